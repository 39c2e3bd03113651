//! Panel 4 — Help: keyboard shortcuts and metric documentation.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "c", "Switch material catalog (sliders reset)");
    key(&mut lines, "r", "Reset sliders to catalog defaults");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panels 1 & 2 — Operating / Radiation");
    key(&mut lines, "j / k", "Select slider below / above");
    key(&mut lines, "h / l", "Step the focused slider down / up");
    key(&mut lines, "H / L", "Coarse step (5 slider steps)");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3 — Materials");
    key(&mut lines, "j / k", "Move material cursor");
    key(&mut lines, "Enter", "Open material detail (electronic properties)");
    lines.push(Line::from(""));

    section(&mut lines, "Reading the charts");
    key(&mut lines, "1.00", "Rated capability exceeds the operating point");
    key(&mut lines, "< 1.00", "Capability / operating point — the derating ratio");
    lines.push(Line::from(""));

    section(&mut lines, "Metrics");
    key(&mut lines, "Temperature", "Operating temperature, °C");
    key(&mut lines, "Voltage", "Operating voltage vs breakdown voltage, V");
    key(&mut lines, "Frequency", "Operating frequency, GHz");
    key(&mut lines, "TID", "Total ionizing dose, rad(Si)");
    key(&mut lines, "DDD", "Displacement damage dose, n/cm²");
    key(&mut lines, "LET", "Linear energy transfer threshold, MeV·cm²/mg");
    key(&mut lines, "DE", "Displacement threshold energy, eV");

    f.render_widget(Paragraph::new(lines), area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>16}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
