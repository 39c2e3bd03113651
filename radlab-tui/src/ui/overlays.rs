//! Overlay widgets — welcome and material detail.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use radlab_core::metric::format_value;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to RadLab ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press 1 for the Operating panel",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Move sliders with h/l; charts redraw as you go",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press 2 for the radiation hardness sliders",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Press c to switch between material catalogs",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Material detail overlay: rated capabilities plus electronic properties.
pub fn render_material_detail(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Material Detail [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(record) = app.catalog().materials.get(idx) else {
        let text = Paragraph::new(Span::styled("Material not found.", theme::muted()));
        f.render_widget(text, inner);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        record.name.clone(),
        theme::accent_bold(),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Rated Capabilities",
        theme::accent_bold(),
    )));
    detail_line(&mut lines, "Max Temperature", record.max_temperature_c, "°C");
    detail_line(&mut lines, "Breakdown Voltage", record.breakdown_voltage_v, "V");
    detail_line(&mut lines, "Max Frequency", record.max_frequency_ghz, "GHz");
    detail_line(&mut lines, "TID Tolerance", record.tid_tolerance_rad, "rad(Si)");
    detail_line(&mut lines, "DDD Tolerance", record.ddd_tolerance_n_cm2, "n/cm²");
    detail_line(
        &mut lines,
        "LET Threshold",
        record.let_threshold_mev_cm2_mg,
        "MeV·cm²/mg",
    );
    detail_line(
        &mut lines,
        "Displacement Energy",
        record.displacement_energy_ev,
        "eV",
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Electronic Properties",
        theme::accent_bold(),
    )));
    detail_line(&mut lines, "Bandgap", record.bandgap_ev, "eV");
    detail_line(&mut lines, "Breakdown Field", record.breakdown_field_mv_m, "MV/m");
    detail_line(
        &mut lines,
        "Electron Mobility",
        record.electron_mobility_m2_vs,
        "m²/V·s",
    );
    detail_line(&mut lines, "Power Density", record.power_density_w_cm2, "W/cm²");
    detail_line(
        &mut lines,
        "Thermal Conductivity",
        record.thermal_conductivity_w_mk,
        "W/m·K",
    );

    f.render_widget(Paragraph::new(lines), inner);
}

fn detail_line<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: f64, unit: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>22}: "), theme::muted()),
        Span::styled(format!("{} {unit}", format_value(value)), theme::accent()),
    ]));
}
