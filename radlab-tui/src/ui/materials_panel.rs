//! Panel 3 — Materials: the catalog's reference values as a table.
//!
//! Read-only view of the data the charts divide by. Column headings use
//! the same short labels and units as the rest of the tool. Enter opens
//! the detail overlay with electronic properties.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use radlab_core::metric::format_value;
use radlab_core::{MaterialRecord, Metric};

use crate::app::AppState;
use crate::theme;

const NAME_WIDTH: usize = 32;
const COL_WIDTH: usize = 11;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[j/k]select [Enter]detail",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    let (labels, units) = header_lines();
    lines.push(Line::from(Span::styled(labels, theme::accent_bold())));
    lines.push(Line::from(Span::styled(units, theme::muted())));

    for (i, record) in app.catalog().materials.iter().enumerate() {
        let style = if i == app.materials_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::secondary()
        };
        lines.push(Line::from(Span::styled(row_text(record), style)));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn header_lines() -> (String, String) {
    let mut labels = format!("{:<NAME_WIDTH$}", "Material");
    let mut units = " ".repeat(NAME_WIDTH);
    for metric in Metric::ALL {
        labels.push_str(&pad_left(metric.short_label()));
        units.push_str(&pad_left(metric.unit()));
    }
    (labels, units)
}

fn row_text(record: &MaterialRecord) -> String {
    let mut row = format!("{:<NAME_WIDTH$}", record.name);
    for metric in Metric::ALL {
        row.push_str(&pad_left(&format_value(metric.capability(record))));
    }
    row
}

// format! width counts bytes for &str, which undercounts "°C" and
// "MeV·cm²/mg"; pad by chars instead so columns stay aligned.
fn pad_left(text: &str) -> String {
    let chars = text.chars().count();
    let pad = COL_WIDTH.saturating_sub(chars);
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radlab_core::Catalog;

    #[test]
    fn row_shows_compact_dose_values() {
        let c = Catalog::wide_bandgap();
        let row = row_text(&c.materials[0]);
        assert!(row.starts_with("Diamond"));
        assert!(row.contains("10.00M")); // TID 1e7
        assert!(row.contains("10.00P")); // DDD 1e16
    }

    #[test]
    fn wide_bandgap_ddd_column_stays_in_tera_range() {
        let c = Catalog::wide_bandgap();
        // SiC DDD tolerance is 1e14
        let row = row_text(&c.materials[2]);
        assert!(row.contains("100.00T"));
        assert!(!row.contains("100000000.00M"));
    }

    #[test]
    fn header_uses_shared_metric_vocabulary() {
        let (labels, units) = header_lines();
        assert!(labels.contains("TID"));
        assert!(labels.contains("DDD"));
        assert!(units.contains("rad(Si)"));
        assert!(units.contains("GHz"));
        assert!(units.contains("MeV·cm²/mg"));
    }

    #[test]
    fn rows_align_with_header() {
        let (labels, units) = header_lines();
        let width = labels.chars().count();
        assert_eq!(units.chars().count(), width);
        for catalog in [Catalog::wide_bandgap(), Catalog::diamond_dopants()] {
            for record in &catalog.materials {
                assert_eq!(row_text(record).chars().count(), width, "{}", record.name);
            }
        }
    }
}
