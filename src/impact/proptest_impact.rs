//! Property-based tests for the impact calculator using proptest.
//!
//! These tests verify that consequence estimates keep their documented
//! shape across the whole valid parameter space.

use proptest::prelude::*;

use super::{crater_diameter_km, estimate, tsunami_height_m};
use crate::types::ImpactorParameters;

fn impactor() -> impl Strategy<Value = ImpactorParameters> {
    (1.0f64..2000.0, 11_000.0f64..72_000.0, 0.0f64..=90.0, 100.0f64..15_000.0)
        .prop_map(|(d, v, a, rho)| ImpactorParameters::new(d, v, a, rho))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Same inputs always give bit-identical outputs.
    #[test]
    fn prop_estimate_is_deterministic(params in impactor()) {
        let a = estimate(&params).expect("valid impactor");
        let b = estimate(&params).expect("valid impactor");
        prop_assert_eq!(a, b);
    }

    /// Non-negative outputs stay non-negative and finite.
    #[test]
    fn prop_outputs_non_negative(params in impactor()) {
        let e = estimate(&params).expect("valid impactor");
        prop_assert!(e.megatons > 0.0 && e.megatons.is_finite());
        prop_assert!(e.crater_diameter_km >= 0.0);
        prop_assert!(e.fireball_radius_km >= 0.0);
        prop_assert!(e.tsunami_height_m >= 0.0);
        prop_assert!(e.affected_population >= 0.0);
        prop_assert!(e.seismic_magnitude.is_finite());
    }

    /// Tsunami term only appears for impacts shallower than 30°.
    #[test]
    fn prop_tsunami_only_for_shallow_impacts(params in impactor()) {
        let e = estimate(&params).expect("valid impactor");
        if params.impact_angle_deg < 30.0 {
            prop_assert!(e.tsunami_height_m > 0.0);
        } else {
            prop_assert_eq!(e.tsunami_height_m, 0.0);
        }
    }

    /// Crater never exceeds the vertical-impact value for the same energy.
    #[test]
    fn prop_crater_bounded_by_vertical(megatons in 1e-3f64..1e6, angle in 0.0f64..=90.0) {
        let crater = crater_diameter_km(megatons, angle);
        let vertical = crater_diameter_km(megatons, 90.0);
        prop_assert!(crater <= vertical * (1.0 + 1e-12));
        prop_assert!(tsunami_height_m(megatons, angle) >= 0.0);
    }

    /// Heavier impactors release more energy.
    #[test]
    fn prop_energy_grows_with_diameter(params in impactor(), factor in 1.01f64..3.0) {
        let small = estimate(&params).expect("valid impactor");
        let bigger = ImpactorParameters { diameter_m: params.diameter_m * factor, ..params };
        let large = estimate(&bigger).expect("valid impactor");
        prop_assert!(large.megatons > small.megatons);
        prop_assert!(large.seismic_magnitude > small.seismic_magnitude);
    }

    /// Rounded output stays within half a unit of the last kept decimal.
    #[test]
    fn prop_rounding_within_half_unit(params in impactor()) {
        let e = estimate(&params).expect("valid impactor");
        let c = e.rounded();
        prop_assert!((c.crater_diameter_km - e.crater_diameter_km).abs() <= 0.005 + 1e-9);
        prop_assert!((c.fireball_radius_km - e.fireball_radius_km).abs() <= 0.005 + 1e-9);
        prop_assert!((c.seismic_magnitude - e.seismic_magnitude).abs() <= 0.05 + 1e-9);
    }
}
