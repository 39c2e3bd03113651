//! Panel 1 — Operating: temperature/voltage/frequency sliders and their
//! three performance bar charts.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use radlab_core::Metric;

use crate::app::AppState;
use crate::theme;
use crate::ui::widgets::{perf_chart, slider};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    // Sliders on top, charts fill the rest.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_sliders(f, chunks[0], app);
    render_charts(f, chunks[1], app);
}

fn render_sliders(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "[j/k]select [h/l]adjust [H/L]coarse [c]catalog [r]reset",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    let catalog = app.catalog();
    for (i, metric) in Metric::OPERATING.into_iter().enumerate() {
        let spec = catalog.sliders.for_metric(metric);
        let focused = i == app.operating_cursor;
        lines.push(slider::slider_line(metric, spec, app.op.get(metric), focused));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_charts(f: &mut Frame, area: Rect, app: &AppState) {
    let chart_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (i, metric) in Metric::OPERATING.into_iter().enumerate() {
        perf_chart::render(f, chart_areas[i], app.profile.column(metric));
    }
}
