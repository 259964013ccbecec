//! Property-based tests for orbit sampling using proptest.
//!
//! These tests verify that sampled paths keep their geometric properties
//! across a wide range of element sets and step counts.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::kepler::KeplerOrbit;
use super::{sample_one_period, sample_proxy, OrbitalElements, ProxyOrbit};
use crate::types::J2000_JD;

fn elliptical_elements() -> impl Strategy<Value = OrbitalElements> {
    (
        0.5f64..5.0,
        0.0f64..0.95,
        0.0f64..180.0,
        0.0f64..360.0,
        0.0f64..360.0,
        0.0f64..360.0,
    )
        .prop_map(|(a, e, i, node, peri, m)| OrbitalElements {
            semi_major_axis_au: a,
            eccentricity: e,
            inclination_deg: i,
            ascending_node_deg: node,
            argument_of_periapsis_deg: peri,
            mean_anomaly_deg: m,
            epoch_jd: J2000_JD,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Verify Kepler solver convergence for all valid eccentricities and mean anomalies.
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_normalized in 0.0f64..1.0,
        elements in elliptical_elements(),
    ) {
        let orbit = KeplerOrbit::from_elements(&elements).expect("valid elements");
        let mean_anomaly = mean_anomaly_normalized * TAU;

        let e_anom = orbit.solve_eccentric_anomaly(mean_anomaly);
        let m_check = e_anom - orbit.eccentricity * e_anom.sin();
        let m_normalized = mean_anomaly.rem_euclid(TAU);

        let error = (m_check - m_normalized).abs();
        prop_assert!(
            error < 1e-8,
            "Kepler solver failed: M={}, e={}, E={}, error={}",
            mean_anomaly, orbit.eccentricity, e_anom, error
        );
    }

    /// Every sampled point lies between perihelion and aphelion.
    #[test]
    fn prop_points_within_apsides(elements in elliptical_elements(), steps in 1usize..300) {
        let sample = sample_one_period(&elements, steps).expect("valid elements");
        prop_assert_eq!(sample.len(), steps);

        let a = elements.semi_major_axis_au;
        let e = elements.eccentricity;
        let tolerance = 1e-9 * a;
        for p in sample.points() {
            let r = p.length();
            prop_assert!(r >= a * (1.0 - e) - tolerance, "r={} below perihelion", r);
            prop_assert!(r <= a * (1.0 + e) + tolerance, "r={} beyond aphelion", r);
        }
    }

    /// Every sampled point lies in the orbital plane, whose normal is set by i and Ω.
    #[test]
    fn prop_points_in_orbital_plane(elements in elliptical_elements()) {
        let sample = sample_one_period(&elements, 64).expect("valid elements");
        let i = elements.inclination_deg.to_radians();
        let node = elements.ascending_node_deg.to_radians();
        let normal = bevy::math::DVec3::new(
            i.sin() * node.sin(),
            -i.sin() * node.cos(),
            i.cos(),
        );

        for p in sample.points() {
            prop_assert!(p.dot(normal).abs() < 1e-9 * elements.semi_major_axis_au.max(1.0));
        }
    }

    /// Proxy points are equally spaced on a circle in the z = 0 plane.
    #[test]
    fn prop_proxy_is_equally_spaced_circle(
        miss_distance_km in 1.0e3f64..5.0e8,
        steps in 3usize..400,
    ) {
        let proxy = ProxyOrbit { miss_distance_km, period_days: None };
        let sample = sample_proxy(&proxy, steps).expect("valid proxy");
        prop_assert_eq!(sample.len(), steps);

        let pts = sample.points();
        let radius = pts[0].length();
        let chord = (pts[1] - pts[0]).length();
        for k in 0..steps {
            let next = pts[(k + 1) % steps];
            prop_assert!((pts[k].length() - radius).abs() <= 1e-12 * radius);
            prop_assert!(((next - pts[k]).length() - chord).abs() <= 1e-9 * radius);
            prop_assert_eq!(pts[k].z, 0.0);
        }
    }
}
