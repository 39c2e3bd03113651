//! Property tests for the performance transform.
//!
//! Uses proptest to verify:
//! 1. Performance never exceeds 1
//! 2. Capability above the operating point always yields exactly 1
//! 3. Performance is monotonically non-increasing in the operating point
//! 4. Operating points stay inside the catalog's slider ranges

use proptest::prelude::*;
use radlab_core::{relative_performance, Catalog, Metric, OperatingPoint};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_capability() -> impl Strategy<Value = f64> {
    // Spans the shipped catalogs: eV-scale thresholds up to DDD fluence
    1e-2..1e16_f64
}

fn arb_operating_point() -> impl Strategy<Value = f64> {
    1e-2..1e16_f64
}

fn arb_metric() -> impl Strategy<Value = Metric> {
    (0usize..Metric::ALL.len()).prop_map(|i| Metric::ALL[i])
}

// ── 1. Bounded above by 1 ────────────────────────────────────────────

proptest! {
    #[test]
    fn performance_never_exceeds_one(cap in arb_capability(), op in arb_operating_point()) {
        let perf = relative_performance(cap, op);
        prop_assert!(perf <= 1.0);
        prop_assert!(perf > 0.0);
    }

    // ── 2. No penalty above the operating point ──────────────────────

    #[test]
    fn capability_above_demand_is_exactly_one(cap in arb_capability(), op in arb_operating_point()) {
        if cap > op {
            prop_assert_eq!(relative_performance(cap, op), 1.0);
        } else {
            prop_assert_eq!(relative_performance(cap, op), cap / op);
        }
    }

    // ── 3. Monotone non-increasing in the operating point ────────────

    #[test]
    fn performance_is_monotone_in_operating_point(
        cap in arb_capability(),
        op_lo in arb_operating_point(),
        op_hi in arb_operating_point(),
    ) {
        let (lo, hi) = if op_lo <= op_hi { (op_lo, op_hi) } else { (op_hi, op_lo) };
        prop_assert!(relative_performance(cap, hi) <= relative_performance(cap, lo));
    }

    // ── 4. Stepping never escapes the slider range ───────────────────

    #[test]
    fn stepping_stays_in_slider_range(
        metric in arb_metric(),
        steps in proptest::collection::vec(-50i32..50, 1..30),
    ) {
        let catalog = Catalog::wide_bandgap();
        let mut op = OperatingPoint::default_for(&catalog);
        for s in steps {
            op.step(&catalog, metric, s);
            let spec = catalog.sliders.for_metric(metric);
            let value = op.get(metric);
            prop_assert!(value >= spec.min);
            prop_assert!(value <= spec.max);
        }
    }

    // Every bar in every column obeys the bound for arbitrary slider settings.
    #[test]
    fn all_columns_stay_bounded(
        fractions in proptest::collection::vec(0.0..=1.0_f64, 7),
    ) {
        let catalog = Catalog::diamond_dopants();
        let mut op = OperatingPoint::default_for(&catalog);
        for (metric, frac) in Metric::ALL.into_iter().zip(fractions) {
            let spec = catalog.sliders.for_metric(metric);
            op.set(&catalog, metric, spec.min + frac * (spec.max - spec.min));
        }
        let profile = radlab_core::PerformanceProfile::compute(&catalog, &op);
        for column in &profile.columns {
            for bar in &column.bars {
                prop_assert!(bar.ratio <= 1.0);
                prop_assert!(bar.ratio > 0.0);
            }
        }
    }
}
