//! The relative-performance transform and per-metric chart columns.
//!
//! For every material and metric:
//!
//! ```text
//! performance = 1.0            if capability > operating_point
//!             = capability/op  otherwise
//! ```
//!
//! A material takes no penalty once its rated capability exceeds what is
//! demanded of it; below that the penalty is the plain ratio. The ratio
//! branch never divides by zero for the shipped catalogs: capabilities
//! are positive, so an operating point of zero always takes the 1.0 branch.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::metric::Metric;

/// Relative performance of one capability at one operating point.
pub fn relative_performance(capability: f64, operating_point: f64) -> f64 {
    if capability > operating_point {
        1.0
    } else {
        capability / operating_point
    }
}

/// The user-chosen operating point, one value per metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    values: [f64; 7],
}

impl OperatingPoint {
    /// Seed every metric from the catalog's slider defaults.
    pub fn default_for(catalog: &Catalog) -> Self {
        let mut values = [0.0; 7];
        for metric in Metric::ALL {
            values[metric.index()] = catalog.sliders.for_metric(metric).default;
        }
        Self { values }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        self.values[metric.index()]
    }

    /// Set a metric, clamped to the catalog's slider range.
    pub fn set(&mut self, catalog: &Catalog, metric: Metric, value: f64) {
        self.values[metric.index()] = catalog.sliders.for_metric(metric).clamp(value);
    }

    /// Move a metric by a signed number of slider steps.
    pub fn step(&mut self, catalog: &Catalog, metric: Metric, steps: i32) {
        let spec = catalog.sliders.for_metric(metric);
        let next = self.get(metric) + spec.step * steps as f64;
        self.values[metric.index()] = spec.clamp(next);
    }

    /// Reset every metric to the catalog's slider defaults.
    pub fn reset(&mut self, catalog: &Catalog) {
        *self = Self::default_for(catalog);
    }
}

/// One material's bar in a performance column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceBar {
    pub material: String,
    pub ratio: f64,
}

/// All materials' relative performance for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceColumn {
    pub metric: Metric,
    pub operating_point: f64,
    pub bars: Vec<PerformanceBar>,
}

impl PerformanceColumn {
    pub fn compute(catalog: &Catalog, op: &OperatingPoint, metric: Metric) -> Self {
        let operating_point = op.get(metric);
        let bars = catalog
            .materials
            .iter()
            .map(|record| PerformanceBar {
                material: record.name.clone(),
                ratio: relative_performance(metric.capability(record), operating_point),
            })
            .collect();
        Self {
            metric,
            operating_point,
            bars,
        }
    }
}

/// All seven columns for one catalog and operating point.
///
/// This is the whole recompute step of the reactive loop: cheap enough
/// to rebuild from scratch on every slider change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceProfile {
    pub columns: Vec<PerformanceColumn>,
}

impl PerformanceProfile {
    pub fn compute(catalog: &Catalog, op: &OperatingPoint) -> Self {
        let columns = Metric::ALL
            .iter()
            .map(|&metric| PerformanceColumn::compute(catalog, op, metric))
            .collect();
        Self { columns }
    }

    pub fn column(&self, metric: Metric) -> &PerformanceColumn {
        &self.columns[metric.index()]
    }
}
