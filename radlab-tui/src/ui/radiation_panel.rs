//! Panel 2 — Radiation: TID/DDD/LET/displacement-energy sliders and their
//! four performance bar charts, in a 2x2 grid.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use radlab_core::Metric;

use crate::app::AppState;
use crate::theme;
use crate::ui::widgets::{perf_chart, slider};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(8)])
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
    for (i, metric) in Metric::RADIATION.into_iter().enumerate() {
        let spec = catalog.sliders.for_metric(metric);
        let focused = i == app.radiation_cursor;
        lines.push(slider::slider_line(metric, spec, app.op.get(metric), focused));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_charts(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(rows[1]);

    let areas = [top[0], top[1], bottom[0], bottom[1]];
    for (i, metric) in Metric::RADIATION.into_iter().enumerate() {
        perf_chart::render(f, areas[i], app.profile.column(metric));
    }
}
