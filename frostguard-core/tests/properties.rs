//! Property tests for the engine invariants

use frostguard_core::{evaluate, psychrometrics, risk_level, RiskLevel};
use proptest::prelude::*;

fn temperature() -> impl Strategy<Value = f64> {
    -60.0f64..50.0
}

fn humidity() -> impl Strategy<Value = f64> {
    0.5f64..=100.0
}

fn level(t: f64, dp: f64, wb: f64, fp: f64, ah: f64) -> u8 {
    risk_level(t, dp, wb, fp, ah).value()
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(t in temperature(), rh in humidity()) {
        let first = evaluate(t, rh).unwrap();
        let second = evaluate(t, rh).unwrap();
        prop_assert_eq!(first.metrics.dew_point.to_bits(), second.metrics.dew_point.to_bits());
        prop_assert_eq!(first.metrics.freezing_point.to_bits(), second.metrics.freezing_point.to_bits());
        prop_assert_eq!(first.metrics.humidity_ratio.to_bits(), second.metrics.humidity_ratio.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn level_always_on_scale(
        t in any::<f64>(),
        dp in any::<f64>(),
        wb in any::<f64>(),
        fp in any::<f64>(),
        ah in any::<f64>(),
    ) {
        prop_assert!(risk_level(t, dp, wb, fp, ah) <= RiskLevel::VERY_HIGH);
    }

    #[test]
    fn colder_air_never_lowers_risk(
        t in -20.0f64..20.0,
        drop in 0.0f64..10.0,
        dp in -20.0f64..20.0,
        wb in -20.0f64..20.0,
        fp in -20.0f64..20.0,
        ah in 0.0f64..20.0,
    ) {
        prop_assert!(level(t - drop, dp, wb, fp, ah) >= level(t, dp, wb, fp, ah));
    }

    #[test]
    fn lower_dew_point_never_lowers_risk(
        t in -20.0f64..20.0,
        dp in -20.0f64..20.0,
        drop in 0.0f64..10.0,
        wb in -20.0f64..20.0,
        fp in -20.0f64..20.0,
        ah in 0.0f64..20.0,
    ) {
        prop_assert!(level(t, dp - drop, wb, fp, ah) >= level(t, dp, wb, fp, ah));
    }

    #[test]
    fn lower_wet_bulb_never_lowers_risk(
        t in -20.0f64..20.0,
        dp in -20.0f64..20.0,
        wb in -20.0f64..20.0,
        drop in 0.0f64..10.0,
        fp in -20.0f64..20.0,
        ah in 0.0f64..20.0,
    ) {
        prop_assert!(level(t, dp, wb - drop, fp, ah) >= level(t, dp, wb, fp, ah));
    }

    #[test]
    fn lower_freezing_point_never_lowers_risk(
        t in -20.0f64..20.0,
        dp in -20.0f64..20.0,
        wb in -20.0f64..20.0,
        fp in -20.0f64..20.0,
        drop in 0.0f64..10.0,
        ah in 0.0f64..20.0,
    ) {
        prop_assert!(level(t, dp, wb, fp - drop, ah) >= level(t, dp, wb, fp, ah));
    }

    #[test]
    fn frost_point_equals_dew_point_when_dew_point_non_negative(t in temperature(), rh in humidity()) {
        let dew = psychrometrics::dew_point(t, rh).unwrap();
        if dew >= 0.0 {
            prop_assert_eq!(psychrometrics::frost_point(t, rh).unwrap(), dew);
        }
    }

    #[test]
    fn very_dry_wet_bulb_is_dry_bulb_minus_half(t in temperature(), rh in -50.0f64..5.0) {
        let expected = psychrometrics::round_to(t - 0.5, 2);
        prop_assert_eq!(psychrometrics::wet_bulb(t, rh).unwrap(), expected);
    }

    #[test]
    fn humidity_below_floor_fails_dew_point(t in temperature(), rh in -100.0f64..0.01) {
        prop_assert!(psychrometrics::dew_point(t, rh).is_err());
        prop_assert!(evaluate(t, rh).is_err());
    }
}
