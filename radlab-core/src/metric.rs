//! The seven sliderable operating metrics.
//!
//! Ordering in `Metric::ALL` is fixed: it drives the layout of sliders
//! and charts in every surface (TUI panels, CLI tables, JSON output).

use serde::Serialize;

use crate::catalog::MaterialRecord;

/// Section a metric belongs to, mirroring the two dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGroup {
    Operating,
    RadiationHardness,
}

impl MetricGroup {
    pub fn label(self) -> &'static str {
        match self {
            MetricGroup::Operating => "General Operating Metrics",
            MetricGroup::RadiationHardness => "Radiation Hardness Metrics",
        }
    }
}

/// One operating-condition metric with a slider and a bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Temperature,
    Voltage,
    Frequency,
    TotalIonizingDose,
    DisplacementDamageDose,
    LinearEnergyTransfer,
    DisplacementEnergy,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Temperature,
        Metric::Voltage,
        Metric::Frequency,
        Metric::TotalIonizingDose,
        Metric::DisplacementDamageDose,
        Metric::LinearEnergyTransfer,
        Metric::DisplacementEnergy,
    ];

    pub const OPERATING: [Metric; 3] = [Metric::Temperature, Metric::Voltage, Metric::Frequency];

    pub const RADIATION: [Metric; 4] = [
        Metric::TotalIonizingDose,
        Metric::DisplacementDamageDose,
        Metric::LinearEnergyTransfer,
        Metric::DisplacementEnergy,
    ];

    pub fn index(self) -> usize {
        match self {
            Metric::Temperature => 0,
            Metric::Voltage => 1,
            Metric::Frequency => 2,
            Metric::TotalIonizingDose => 3,
            Metric::DisplacementDamageDose => 4,
            Metric::LinearEnergyTransfer => 5,
            Metric::DisplacementEnergy => 6,
        }
    }

    pub fn group(self) -> MetricGroup {
        match self {
            Metric::Temperature | Metric::Voltage | Metric::Frequency => MetricGroup::Operating,
            _ => MetricGroup::RadiationHardness,
        }
    }

    /// Column abbreviation, shared by the materials table and CLI output.
    pub fn short_label(self) -> &'static str {
        match self {
            Metric::Temperature => "Temp",
            Metric::Voltage => "Volt",
            Metric::Frequency => "Freq",
            Metric::TotalIonizingDose => "TID",
            Metric::DisplacementDamageDose => "DDD",
            Metric::LinearEnergyTransfer => "LET",
            Metric::DisplacementEnergy => "DE",
        }
    }

    /// Slider label, e.g. "Operating Temperature".
    pub fn label(self) -> &'static str {
        match self {
            Metric::Temperature => "Operating Temperature",
            Metric::Voltage => "Operating Voltage",
            Metric::Frequency => "Operating Frequency",
            Metric::TotalIonizingDose => "Total Ionizing Dose",
            Metric::DisplacementDamageDose => "Displacement Damage Dose",
            Metric::LinearEnergyTransfer => "Linear Energy Transfer",
            Metric::DisplacementEnergy => "Displacement Energy",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Voltage => "V",
            Metric::Frequency => "GHz",
            Metric::TotalIonizingDose => "rad(Si)",
            Metric::DisplacementDamageDose => "n/cm²",
            Metric::LinearEnergyTransfer => "MeV·cm²/mg",
            Metric::DisplacementEnergy => "eV",
        }
    }

    /// Bar chart title for this metric's column.
    pub fn chart_title(self) -> &'static str {
        match self {
            Metric::Temperature => "Performance due to Operating Temperature",
            Metric::Voltage => "Performance due to Operating Voltage",
            Metric::Frequency => "Performance due to Operating Frequency",
            Metric::TotalIonizingDose => "Performance due to Total Ionizing Dose",
            Metric::DisplacementDamageDose => "Performance due to Displacement Damage Dose",
            Metric::LinearEnergyTransfer => "Performance due to Linear Energy Transfer",
            Metric::DisplacementEnergy => "Performance due to Displacement Energy",
        }
    }

    /// The rated capability this metric divides by.
    pub fn capability(self, record: &MaterialRecord) -> f64 {
        match self {
            Metric::Temperature => record.max_temperature_c,
            Metric::Voltage => record.breakdown_voltage_v,
            Metric::Frequency => record.max_frequency_ghz,
            Metric::TotalIonizingDose => record.tid_tolerance_rad,
            Metric::DisplacementDamageDose => record.ddd_tolerance_n_cm2,
            Metric::LinearEnergyTransfer => record.let_threshold_mev_cm2_mg,
            Metric::DisplacementEnergy => record.displacement_energy_ev,
        }
    }
}

/// Format a metric value compactly for slider readouts and axis labels.
///
/// Dose metrics span many decades, so large magnitudes collapse to
/// k / M / G / T / P suffixes the way the original dashboard marks did.
/// Every tier pads to at most 9 characters for the shipped catalogs,
/// which fixed-width table columns rely on.
pub fn format_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e15 {
        format!("{:.2}P", value / 1e15)
    } else if abs >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}G", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if abs >= 1e4 {
        format!("{:.0}k", value / 1e3)
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn all_covers_both_groups() {
        assert_eq!(Metric::ALL.len(), 7);
        assert_eq!(Metric::OPERATING.len() + Metric::RADIATION.len(), 7);
        for m in Metric::OPERATING {
            assert_eq!(m.group(), MetricGroup::Operating);
        }
        for m in Metric::RADIATION {
            assert_eq!(m.group(), MetricGroup::RadiationHardness);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, m) in Metric::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn capability_selects_the_right_field() {
        let c = Catalog::wide_bandgap();
        let diamond = &c.materials[0];
        assert_eq!(Metric::Temperature.capability(diamond), 1000.0);
        assert_eq!(Metric::Voltage.capability(diamond), 2000.0);
        assert_eq!(Metric::TotalIonizingDose.capability(diamond), 1e7);
        assert_eq!(Metric::DisplacementEnergy.capability(diamond), 43.0);
    }

    #[test]
    fn format_magnitudes() {
        assert_eq!(format_value(500.0), "500");
        assert_eq!(format_value(92.5), "92.50");
        assert_eq!(format_value(50_000.0), "50k");
        assert_eq!(format_value(1e6), "1.00M");
        assert_eq!(format_value(9.5e6), "9.50M");
        assert_eq!(format_value(1e9), "1.00G");
        assert_eq!(format_value(1e12), "1.00T");
        assert_eq!(format_value(5e12), "5.00T");
        assert_eq!(format_value(1e14), "100.00T");
        assert_eq!(format_value(2e14), "200.00T");
        assert_eq!(format_value(9e15), "9.00P");
    }

    #[test]
    fn every_catalog_value_formats_within_nine_chars() {
        for catalog in [Catalog::wide_bandgap(), Catalog::diamond_dopants()] {
            for metric in Metric::ALL {
                let spec = catalog.sliders.for_metric(metric);
                for value in [spec.min, spec.max, spec.default] {
                    let text = format_value(value);
                    assert!(text.chars().count() <= 9, "{text} too wide");
                }
                for record in &catalog.materials {
                    let text = format_value(metric.capability(record));
                    assert!(text.chars().count() <= 9, "{text} too wide");
                }
            }
        }
    }

    #[test]
    fn short_labels_are_unique() {
        let mut labels: Vec<&str> = Metric::ALL.iter().map(|m| m.short_label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Metric::ALL.len());
    }
}
