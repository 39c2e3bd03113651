//! Bar chart for one performance column.
//!
//! One bar per material, scaled to percent so the y-axis is 0–100 for
//! every chart regardless of metric. Bar color follows the performance
//! gradient, so a fully rated material is always green.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use radlab_core::metric::format_value;
use radlab_core::PerformanceColumn;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, column: &PerformanceColumn) {
    let bars: Vec<Bar> = column
        .bars
        .iter()
        .map(|bar| {
            let percent = (bar.ratio * 100.0).round() as u64;
            Bar::default()
                .value(percent)
                .text_value(format!("{:.2}", bar.ratio))
                .label(Line::from(short_label(&bar.material)))
                .style(Style::default().fg(theme::performance_color(bar.ratio)))
        })
        .collect();

    let title = format!(
        " {} @ {} ",
        column.metric.chart_title(),
        format_value(column.operating_point)
    );

    let bar_width = bar_width_for(area.width, column.bars.len());

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .title_style(theme::panel_title(false))
                .borders(Borders::ALL)
                .border_style(theme::muted()),
        )
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(chart, area);
}

/// Bar labels have to fit under narrow bars; prefer a parenthesised
/// abbreviation ("Boron-Doped Diamond (BDD)" → "BDD"), else truncate.
fn short_label(name: &str) -> String {
    if let (Some(open), Some(close)) = (name.find('('), name.rfind(')')) {
        if open + 1 < close {
            return name[open + 1..close].to_string();
        }
    }
    let mut label = String::new();
    for word in name.split_whitespace() {
        if !label.is_empty() {
            break;
        }
        label.push_str(word);
    }
    label.chars().take(8).collect()
}

fn bar_width_for(area_width: u16, bar_count: usize) -> u16 {
    if bar_count == 0 {
        return 1;
    }
    // Leave room for borders and one gap per bar.
    let usable = area_width.saturating_sub(2 + bar_count as u16);
    (usable / bar_count as u16).clamp(1, 9)
}
