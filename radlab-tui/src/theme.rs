//! Color tokens for the RadLab TUI.
//!
//! Neon accents on a dark terminal background. Performance ratios get a
//! fixed gradient so a bar's color alone tells you roughly how derated
//! a material is at the current operating point.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active { accent() } else { muted() }
}

pub fn panel_title(active: bool) -> Style {
    if active { accent_bold() } else { muted() }
}

/// Gradient for a relative-performance ratio in [0, 1].
pub fn performance_color(ratio: f64) -> Color {
    match ratio {
        r if r >= 1.0 => POSITIVE,
        r if r >= 0.75 => ACCENT,
        r if r >= 0.5 => NEUTRAL,
        r if r >= 0.25 => WARNING,
        _ => NEGATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_gradient() {
        assert_eq!(performance_color(1.0), POSITIVE);
        assert_eq!(performance_color(0.8), ACCENT);
        assert_eq!(performance_color(0.6), NEUTRAL);
        assert_eq!(performance_color(0.3), WARNING);
        assert_eq!(performance_color(0.1), NEGATIVE);
    }

    #[test]
    fn zero_ratio_is_negative() {
        assert_eq!(performance_color(0.0), NEGATIVE);
    }
}
