//! Reusable widgets shared by the slider panels.

pub mod perf_chart;
pub mod slider;
