//! Labeled horizontal slider rendering.
//!
//! Shared by the Operating and Radiation panels.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use radlab_core::catalog::SliderSpec;
use radlab_core::metric::{format_value, Metric};

use crate::theme;

const TRACK_WIDTH: usize = 24;

/// One slider row: right-aligned label, track, value + unit readout.
pub fn slider_line(metric: Metric, spec: &SliderSpec, value: f64, focused: bool) -> Line<'static> {
    let track = slider_track(spec.fraction(value), TRACK_WIDTH);

    let label_style = if focused {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::muted()
    };
    let track_style = if focused { theme::accent() } else { theme::muted() };

    Line::from(vec![
        Span::styled(format!("{:>26}: ", metric.label()), label_style),
        Span::styled(track, track_style),
        Span::styled(
            format!(" {} {}", format_value(value), metric.unit()),
            label_style,
        ),
    ])
}

/// Track string, e.g. "[========            ]".
pub fn slider_track(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}
