use gridsig_types::{METRIC_TONS_PER_MIN, Signal, clamp_relative};
use proptest::prelude::*;

proptest! {
    #[test]
    fn totals_at_or_above_one_hundred_clamp_to_one_hundred(total in 100.0f64..1.0e12) {
        let s = Signal::truncated("TotalEmissions", total, METRIC_TONS_PER_MIN);
        prop_assert_eq!(s.relative_value, 100);
        prop_assert_eq!(s.raw_value, total);
    }

    #[test]
    fn totals_below_one_hundred_truncate(total in 0.0f64..100.0) {
        let s = Signal::truncated("TotalEmissions", total, METRIC_TONS_PER_MIN);
        prop_assert_eq!(i64::from(s.relative_value), total.trunc() as i64);
        prop_assert_eq!(s.raw_value, total);
    }

    #[test]
    fn relative_value_is_always_bounded(v in any::<f64>()) {
        let r = clamp_relative(v);
        prop_assert!((-100..=100).contains(&r));
    }
}
