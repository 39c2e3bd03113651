//! RadLab Core — material catalog, metric definitions, performance transform.
//!
//! This crate contains everything the UI surfaces are built on:
//! - Immutable material catalogs (built-in or loaded from TOML)
//! - The seven sliderable operating metrics and their units
//! - The relative-performance transform and per-metric chart columns

pub mod catalog;
pub mod metric;
pub mod performance;

pub use catalog::{Catalog, CatalogError, MaterialRecord, SliderSpec};
pub use metric::{Metric, MetricGroup};
pub use performance::{
    relative_performance, OperatingPoint, PerformanceBar, PerformanceColumn, PerformanceProfile,
};
