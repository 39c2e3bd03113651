//! Keyboard input dispatch — global keys → overlays → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::MaterialDetail(_) => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Operating; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Radiation; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Materials; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('c') => {
            app.switch_catalog();
            return;
        }
        KeyCode::Char('r') => {
            app.reset_sliders();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Operating => handle_slider_key(app, key, Panel::Operating),
        Panel::Radiation => handle_slider_key(app, key, Panel::Radiation),
        Panel::Materials => handle_materials_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_slider_key(app: &mut AppState, key: KeyEvent, panel: Panel) {
    let slider_count = match panel {
        Panel::Operating => 3,
        Panel::Radiation => 4,
        _ => return,
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let cursor = slider_cursor(app, panel);
            if *cursor + 1 < slider_count {
                *cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let cursor = slider_cursor(app, panel);
            *cursor = cursor.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left => app.adjust_focused(-1),
        KeyCode::Char('l') | KeyCode::Right => app.adjust_focused(1),
        // Coarse adjustment
        KeyCode::Char('H') => app.adjust_focused(-5),
        KeyCode::Char('L') => app.adjust_focused(5),
        _ => {}
    }
}

fn slider_cursor(app: &mut AppState, panel: Panel) -> &mut usize {
    match panel {
        Panel::Radiation => &mut app.radiation_cursor,
        _ => &mut app.operating_cursor,
    }
}

fn handle_materials_key(app: &mut AppState, key: KeyEvent) {
    let count = app.catalog().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.materials_cursor + 1 < count {
                app.materials_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.materials_cursor = app.materials_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            if count > 0 {
                app.overlay = Overlay::MaterialDetail(app.materials_cursor);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radlab_core::Metric;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_past_welcome() -> AppState {
        let mut app = AppState::new();
        app.overlay = Overlay::None;
        app
    }

    #[test]
    fn any_key_dismisses_welcome() {
        let mut app = AppState::new();
        assert_eq!(app.overlay, Overlay::Welcome);
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn q_quits() {
        let mut app = app_past_welcome();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn number_keys_switch_panels() {
        let mut app = app_past_welcome();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.active_panel, Panel::Radiation);
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.active_panel, Panel::Help);
    }

    #[test]
    fn slider_adjustment_moves_operating_point() {
        let mut app = app_past_welcome();
        let before = app.op.get(Metric::Temperature);
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.op.get(Metric::Temperature), before + 25.0);
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.op.get(Metric::Temperature), before);
    }

    #[test]
    fn coarse_adjustment_takes_five_steps() {
        let mut app = app_past_welcome();
        handle_key(&mut app, press(KeyCode::Char('L')));
        assert_eq!(app.op.get(Metric::Temperature), 500.0 + 5.0 * 25.0);
    }

    #[test]
    fn cursor_stops_at_last_slider() {
        let mut app = app_past_welcome();
        app.active_panel = Panel::Radiation;
        for _ in 0..10 {
            handle_key(&mut app, press(KeyCode::Char('j')));
        }
        assert_eq!(app.radiation_cursor, 3);
    }

    #[test]
    fn enter_opens_material_detail() {
        let mut app = app_past_welcome();
        app.active_panel = Panel::Materials;
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::MaterialDetail(1));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn catalog_switch_is_global() {
        let mut app = app_past_welcome();
        app.active_panel = Panel::Help;
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.catalog().name, "Diamond Dopants");
    }
}
