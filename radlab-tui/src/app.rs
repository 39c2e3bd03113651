//! Application state — single-owner, main-thread only.
//!
//! Everything is synchronous: a slider change mutates the operating point
//! and recomputes the full performance profile before the next draw.

use radlab_core::{Catalog, Metric, OperatingPoint, PerformanceProfile};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Operating,
    Radiation,
    Materials,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Operating => 0,
            Panel::Radiation => 1,
            Panel::Materials => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Operating),
            1 => Some(Panel::Radiation),
            2 => Some(Panel::Materials),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Operating => "Operating",
            Panel::Radiation => "Radiation",
            Panel::Materials => "Materials",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    MaterialDetail(usize), // index into the active catalog's materials
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub overlay: Overlay,

    // Catalogs (immutable after construction; only the index moves)
    pub catalogs: Vec<Catalog>,
    pub active_catalog: usize,

    // The reactive loop: operating point in, profile out
    pub op: OperatingPoint,
    pub profile: PerformanceProfile,

    // Per-panel cursors
    pub operating_cursor: usize, // 0..3 sliders
    pub radiation_cursor: usize, // 0..4 sliders
    pub materials_cursor: usize,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new() -> Self {
        let catalogs = vec![Catalog::wide_bandgap(), Catalog::diamond_dopants()];
        let op = OperatingPoint::default_for(&catalogs[0]);
        let profile = PerformanceProfile::compute(&catalogs[0], &op);
        Self {
            active_panel: Panel::Operating,
            running: true,
            overlay: Overlay::Welcome,
            catalogs,
            active_catalog: 0,
            op,
            profile,
            operating_cursor: 0,
            radiation_cursor: 0,
            materials_cursor: 0,
            status_message: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalogs[self.active_catalog]
    }

    /// The metric under the cursor, if the active panel has sliders.
    pub fn focused_metric(&self) -> Option<Metric> {
        match self.active_panel {
            Panel::Operating => Metric::OPERATING.get(self.operating_cursor).copied(),
            Panel::Radiation => Metric::RADIATION.get(self.radiation_cursor).copied(),
            _ => None,
        }
    }

    /// Move the focused slider and recompute the profile.
    pub fn adjust_focused(&mut self, steps: i32) {
        if let Some(metric) = self.focused_metric() {
            let catalog = &self.catalogs[self.active_catalog];
            self.op.step(catalog, metric, steps);
            self.profile = PerformanceProfile::compute(catalog, &self.op);
        }
    }

    /// Switch to the next catalog; operating point resets to its defaults.
    pub fn switch_catalog(&mut self) {
        self.active_catalog = (self.active_catalog + 1) % self.catalogs.len();
        let catalog = &self.catalogs[self.active_catalog];
        self.op = OperatingPoint::default_for(catalog);
        self.profile = PerformanceProfile::compute(catalog, &self.op);
        self.materials_cursor = 0;
        self.set_status(format!("Catalog: {}", catalog.name));
    }

    /// Reset all sliders to the catalog defaults.
    pub fn reset_sliders(&mut self) {
        let catalog = &self.catalogs[self.active_catalog];
        self.op.reset(catalog);
        self.profile = PerformanceProfile::compute(catalog, &self.op);
        self.set_status("Sliders reset to defaults");
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Operating.next(), Panel::Radiation);
        assert_eq!(Panel::Help.next(), Panel::Operating);
        assert_eq!(Panel::Operating.prev(), Panel::Help);
        assert_eq!(Panel::Radiation.prev(), Panel::Operating);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..4 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(4).is_none());
    }

    #[test]
    fn adjust_recomputes_only_through_profile() {
        let mut app = AppState::new();
        app.active_panel = Panel::Operating;
        app.operating_cursor = 0; // temperature
        let before = app.profile.clone();
        app.adjust_focused(4); // 500 → 600
        assert_eq!(app.op.get(Metric::Temperature), 600.0);
        assert_ne!(before, app.profile);
    }

    #[test]
    fn focused_metric_tracks_panel_and_cursor() {
        let mut app = AppState::new();
        app.active_panel = Panel::Operating;
        app.operating_cursor = 2;
        assert_eq!(app.focused_metric(), Some(Metric::Frequency));
        app.active_panel = Panel::Radiation;
        app.radiation_cursor = 3;
        assert_eq!(app.focused_metric(), Some(Metric::DisplacementEnergy));
        app.active_panel = Panel::Materials;
        assert_eq!(app.focused_metric(), None);
    }

    #[test]
    fn switch_catalog_resets_operating_point() {
        let mut app = AppState::new();
        app.adjust_focused(2);
        app.switch_catalog();
        assert_eq!(app.catalog().name, "Diamond Dopants");
        assert_eq!(app.op.get(Metric::Temperature), 950.0);
        // Cycles back
        app.switch_catalog();
        assert_eq!(app.catalog().name, "Wide Bandgap");
        assert_eq!(app.op.get(Metric::Temperature), 500.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = AppState::new();
        app.active_panel = Panel::Radiation;
        app.radiation_cursor = 0;
        app.adjust_focused(10);
        assert_ne!(app.op.get(Metric::TotalIonizingDose), 1e6);
        app.reset_sliders();
        assert_eq!(app.op.get(Metric::TotalIonizingDose), 1e6);
    }
}
