//! Material catalog — fixed reference data, one record per material.
//!
//! A catalog is loaded once (built-in or from a TOML file) and only read
//! afterwards. Record order is stable and drives chart label order.
//! Each catalog carries its own slider ranges because the sensible
//! operating envelope differs between catalogs (the diamond dopant
//! catalog explores a much tighter window than the wide-bandgap one).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::metric::Metric;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog file: {0}")]
    Read(#[from] std::io::Error),
    #[error("parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("catalog '{0}' has no materials")]
    Empty(String),
}

/// Range of one operating-condition slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderSpec {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Fraction of the range covered by `value`, for slider rendering.
    pub fn fraction(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }
}

/// Slider ranges for the seven metrics, one set per catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRanges {
    pub temperature: SliderSpec,
    pub voltage: SliderSpec,
    pub frequency: SliderSpec,
    pub tid: SliderSpec,
    pub ddd: SliderSpec,
    pub let_threshold: SliderSpec,
    pub displacement_energy: SliderSpec,
}

impl SliderRanges {
    pub fn for_metric(&self, metric: Metric) -> &SliderSpec {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Voltage => &self.voltage,
            Metric::Frequency => &self.frequency,
            Metric::TotalIonizingDose => &self.tid,
            Metric::DisplacementDamageDose => &self.ddd,
            Metric::LinearEnergyTransfer => &self.let_threshold,
            Metric::DisplacementEnergy => &self.displacement_energy,
        }
    }
}

/// One material with its rated capabilities and electronic properties.
///
/// Capability fields are the divisors of the performance transform.
/// Electronic properties are reference data shown in the Materials panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub name: String,

    // Rated capabilities, one per sliderable metric
    pub max_temperature_c: f64,
    pub breakdown_voltage_v: f64,
    pub max_frequency_ghz: f64,
    pub tid_tolerance_rad: f64,
    pub ddd_tolerance_n_cm2: f64,
    pub let_threshold_mev_cm2_mg: f64,
    pub displacement_energy_ev: f64,

    // Electronic properties (display only)
    pub bandgap_ev: f64,
    pub breakdown_field_mv_m: f64,
    pub electron_mobility_m2_vs: f64,
    pub power_density_w_cm2: f64,
    pub thermal_conductivity_w_mk: f64,
}

/// A complete catalog: named, ordered materials plus slider ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    pub sliders: SliderRanges,
    pub materials: Vec<MaterialRecord>,
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        if catalog.materials.is_empty() {
            return Err(CatalogError::Empty(catalog.name));
        }
        Ok(catalog)
    }

    /// Serialize the catalog to TOML.
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn material_names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Wide-bandgap comparison catalog: diamond against the incumbent
    /// power/RF semiconductors.
    pub fn wide_bandgap() -> Self {
        let sliders = SliderRanges {
            temperature: SliderSpec::new(0.0, 1000.0, 25.0, 500.0),
            voltage: SliderSpec::new(0.0, 2000.0, 50.0, 1000.0),
            frequency: SliderSpec::new(0.0, 1000.0, 25.0, 500.0),
            tid: SliderSpec::new(0.0, 2e6, 5e4, 1e6),
            ddd: SliderSpec::new(1e12, 2e14, 5e12, 1e14),
            let_threshold: SliderSpec::new(0.0, 100.0, 2.0, 50.0),
            displacement_energy: SliderSpec::new(0.0, 50.0, 1.0, 25.0),
        };

        let materials = vec![
            material("Diamond", [1000.0, 2000.0, 1000.0, 1e7, 1e16, 100.0, 43.0],
                     [5.45, 1000.0, 0.22, 5000.0, 2200.0]),
            material("Si", [150.0, 600.0, 20.0, 1e5, 1e12, 10.0, 13.0],
                     [1.12, 30.0, 0.14, 100.0, 150.0]),
            material("SiC", [600.0, 1200.0, 100.0, 1e6, 1e14, 20.0, 20.0],
                     [3.26, 350.0, 0.09, 1000.0, 490.0]),
            material("GaN/Si", [300.0, 1200.0, 200.0, 5e5, 5e13, 30.0, 19.0],
                     [3.4, 330.0, 0.1, 1300.0, 130.0]),
            material("GaN/SiC", [400.0, 1500.0, 300.0, 1e6, 1e14, 35.0, 20.0],
                     [3.4, 330.0, 0.1, 1500.0, 250.0]),
            material("GaAs", [250.0, 400.0, 250.0, 1e5, 1e12, 8.0, 10.0],
                     [1.42, 40.0, 0.85, 200.0, 55.0]),
        ];

        Self {
            name: "Wide Bandgap".into(),
            sliders,
            materials,
        }
    }

    /// Diamond dopant catalog: growth and doping variants of diamond,
    /// explored over a much tighter operating window.
    pub fn diamond_dopants() -> Self {
        let sliders = SliderRanges {
            temperature: SliderSpec::new(900.0, 1000.0, 2.0, 950.0),
            voltage: SliderSpec::new(1700.0, 2000.0, 10.0, 1850.0),
            frequency: SliderSpec::new(800.0, 1200.0, 10.0, 1000.0),
            tid: SliderSpec::new(8e6, 1e7, 1e5, 9e6),
            ddd: SliderSpec::new(8e15, 1e16, 1e14, 9e15),
            let_threshold: SliderSpec::new(85.0, 100.0, 0.5, 92.5),
            displacement_energy: SliderSpec::new(40.0, 43.0, 0.125, 41.5),
        };

        let materials = vec![
            material("Undoped Diamond", [1000.0, 2000.0, 1000.0, 1e7, 1e16, 100.0, 43.0],
                     [5.45, 1000.0, 0.22, 5000.0, 2200.0]),
            material("Boron-Doped Diamond (BDD)", [950.0, 1950.0, 1200.0, 1e7, 1e16, 96.0, 42.0],
                     [5.0, 975.0, 0.25, 4900.0, 2000.0]),
            material("Phosphorus-Doped Diamond (PDD)", [940.0, 1900.0, 1150.0, 9e6, 9.5e15, 92.0, 41.0],
                     [4.9, 960.0, 0.21, 4800.0, 1900.0]),
            material("Nitrogen-Doped Diamond (NDD)", [900.0, 1700.0, 800.0, 8e6, 8e15, 85.0, 40.0],
                     [4.8, 850.0, 0.15, 4000.0, 1500.0]),
            material("HPHT Diamond", [950.0, 1800.0, 950.0, 9.5e6, 9e15, 90.0, 41.0],
                     [5.3, 900.0, 0.20, 4500.0, 2100.0]),
            material("CVD Diamond", [980.0, 1900.0, 1000.0, 9.8e6, 9.7e15, 98.0, 42.0],
                     [5.4, 980.0, 0.22, 4950.0, 2150.0]),
        ];

        Self {
            name: "Diamond Dopants".into(),
            sliders,
            materials,
        }
    }
}

fn material(name: &str, caps: [f64; 7], props: [f64; 5]) -> MaterialRecord {
    MaterialRecord {
        name: name.into(),
        max_temperature_c: caps[0],
        breakdown_voltage_v: caps[1],
        max_frequency_ghz: caps[2],
        tid_tolerance_rad: caps[3],
        ddd_tolerance_n_cm2: caps[4],
        let_threshold_mev_cm2_mg: caps[5],
        displacement_energy_ev: caps[6],
        bandgap_ev: props[0],
        breakdown_field_mv_m: props[1],
        electron_mobility_m2_vs: props[2],
        power_density_w_cm2: props[3],
        thermal_conductivity_w_mk: props[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogs_have_six_materials() {
        assert_eq!(Catalog::wide_bandgap().len(), 6);
        assert_eq!(Catalog::diamond_dopants().len(), 6);
    }

    #[test]
    fn wide_bandgap_reference_values() {
        let c = Catalog::wide_bandgap();
        let diamond = &c.materials[0];
        assert_eq!(diamond.name, "Diamond");
        assert_eq!(diamond.max_temperature_c, 1000.0);
        assert_eq!(diamond.tid_tolerance_rad, 1e7);
        let si = &c.materials[1];
        assert_eq!(si.name, "Si");
        assert_eq!(si.breakdown_voltage_v, 600.0);
        assert_eq!(si.displacement_energy_ev, 13.0);
    }

    #[test]
    fn material_order_is_stable() {
        let names = Catalog::wide_bandgap()
            .material_names()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Diamond", "Si", "SiC", "GaN/Si", "GaN/SiC", "GaAs"]);
    }

    #[test]
    fn dopant_sliders_are_tighter() {
        let wb = Catalog::wide_bandgap();
        let dd = Catalog::diamond_dopants();
        assert!(dd.sliders.temperature.min > wb.sliders.temperature.min);
        assert!(dd.sliders.temperature.max - dd.sliders.temperature.min
            < wb.sliders.temperature.max - wb.sliders.temperature.min);
        assert_eq!(dd.sliders.let_threshold.step, 0.5);
    }

    #[test]
    fn toml_roundtrip() {
        let c = Catalog::wide_bandgap();
        let toml_str = c.to_toml().unwrap();
        let parsed = Catalog::from_toml(&toml_str).unwrap();
        assert_eq!(c, parsed);
    }

    #[test]
    fn empty_catalog_rejected() {
        let c = Catalog {
            name: "Empty".into(),
            sliders: Catalog::wide_bandgap().sliders,
            materials: vec![],
        };
        let toml_str = toml::to_string_pretty(&c).unwrap();
        assert!(matches!(
            Catalog::from_toml(&toml_str),
            Err(CatalogError::Empty(_))
        ));
    }

    #[test]
    fn slider_fraction() {
        let spec = SliderSpec::new(0.0, 1000.0, 25.0, 500.0);
        assert_eq!(spec.fraction(0.0), 0.0);
        assert_eq!(spec.fraction(500.0), 0.5);
        assert_eq!(spec.fraction(1000.0), 1.0);
        assert_eq!(spec.fraction(2000.0), 1.0);
    }

    #[test]
    fn slider_clamp() {
        let spec = SliderSpec::new(900.0, 1000.0, 2.0, 950.0);
        assert_eq!(spec.clamp(800.0), 900.0);
        assert_eq!(spec.clamp(950.0), 950.0);
        assert_eq!(spec.clamp(1100.0), 1000.0);
    }
}
