//! Test utilities shared by unit tests.
//!
//! Provides fixtures for catalog data and element sets, and assertions for
//! geometric properties of orbit samples.

use crate::catalog::NeoSummary;
use crate::orbit::{OrbitalElements, OrbitalSample};

/// Fixtures for creating test data.
pub mod fixtures {
    use super::*;
    use crate::risk;
    use crate::types::J2000_JD;

    /// Apophis-like elements (approximate, epoch 2025-Nov-21).
    pub fn apophis_elements() -> OrbitalElements {
        OrbitalElements {
            semi_major_axis_au: 0.9224,
            eccentricity: 0.1914,
            inclination_deg: 3.34,
            ascending_node_deg: 203.96,
            argument_of_periapsis_deg: 126.6,
            mean_anomaly_deg: 180.0,
            epoch_jd: 2_461_000.5,
        }
    }

    /// Circular orbit in the ecliptic at the given radius.
    pub fn circular_elements(radius_au: f64) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis_au: radius_au,
            eccentricity: 0.0,
            inclination_deg: 0.0,
            ascending_node_deg: 0.0,
            argument_of_periapsis_deg: 0.0,
            mean_anomaly_deg: 0.0,
            epoch_jd: J2000_JD,
        }
    }

    /// Summary with the given figures and freshly scored risk.
    pub fn summary(id: &str, diameter_m: f64, miss_distance_au: f64, velocity_km_s: f64) -> NeoSummary {
        NeoSummary {
            id: id.to_string(),
            name: format!("Test {id}"),
            designation: String::new(),
            diameter_m,
            velocity_km_s,
            miss_distance_au,
            approach_date: String::new(),
            is_potentially_hazardous: false,
            orbital_elements: None,
            risk: risk::assess(diameter_m, miss_distance_au, velocity_km_s),
        }
    }

    /// Four records: one with elements, one Earth-impacting proxy, one with
    /// a zero diameter, one high-risk proxy.
    pub const SAMPLE_CATALOG_JSON: &str = r#"[
        {
            "id": 2099942,
            "name": "99942 Apophis",
            "designation": "99942",
            "diameter_avg_m": 370.0,
            "last_relative_velocity_kmh": 26640.0,
            "last_miss_distance_km": 38012.0,
            "is_potentially_hazardous": true,
            "last_close_approach_date": "2029-04-13",
            "orbital_period_days": 323.6,
            "orbital_elements": {
                "a": 0.9224, "e": 0.1914, "i": 3.34, "om": 203.96,
                "w": 126.6, "ma": 180.0, "epoch": 2461000.5
            }
        },
        {
            "id": "3542519",
            "name": "(2010 PK9)",
            "designation": "2010 PK9",
            "diameter_avg_m": 100.0,
            "last_relative_velocity_kmh": 61200.0,
            "last_miss_distance_km": 5000.0,
            "is_potentially_hazardous": false,
            "last_close_approach_date": "2025-10-04",
            "orbital_period_days": 410.2
        },
        {
            "id": 54016,
            "name": "(2020 AB)",
            "diameter_avg_m": 0.0,
            "last_relative_velocity_kmh": 36000.0,
            "last_miss_distance_km": 45000000.0
        },
        {
            "id": "2465633",
            "name": "465633 (2009 JR5)",
            "designation": "465633",
            "diameter_avg_m": 1200.0,
            "last_relative_velocity_kmh": 100800.0,
            "last_miss_distance_km": 4200000.0,
            "is_potentially_hazardous": true,
            "last_close_approach_date": "2026-02-11"
        }
    ]"#;
}

/// Assertions for verifying geometric properties of samples.
pub mod assertions {
    use super::*;

    /// Largest distance between consecutive points along the path.
    pub fn max_step(sample: &OrbitalSample) -> f64 {
        sample
            .points()
            .windows(2)
            .map(|w| (w[1] - w[0]).length())
            .fold(0.0, f64::max)
    }

    /// Assert that the sample closes on itself: the gap from the last point
    /// back to the first is no larger than the largest step along the path.
    ///
    /// # Panics
    /// Panics if the closing gap exceeds `tolerance` times the largest step.
    pub fn assert_closed_curve(sample: &OrbitalSample, tolerance: f64) {
        let pts = sample.points();
        assert!(pts.len() >= 2, "Need at least two points, got {}", pts.len());

        let closing_gap = (pts[0] - pts[pts.len() - 1]).length();
        let largest = max_step(sample);
        assert!(
            closing_gap <= largest * tolerance,
            "Sample not closed: closing gap={closing_gap:.6e}, largest step={largest:.6e}"
        );
    }

    /// Assert that every point lies between perihelion and aphelion.
    ///
    /// # Panics
    /// Panics on the first point outside [a(1-e), a(1+e)].
    pub fn assert_within_apsides(sample: &OrbitalSample, elements: &OrbitalElements) {
        let a = elements.semi_major_axis_au;
        let e = elements.eccentricity;
        let tolerance = 1e-9 * a;
        for (k, p) in sample.points().iter().enumerate() {
            let r = p.length();
            assert!(
                r >= a * (1.0 - e) - tolerance && r <= a * (1.0 + e) + tolerance,
                "Point {k} at r={r} AU outside [{}, {}]",
                a * (1.0 - e),
                a * (1.0 + e)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::sample_one_period;

    #[test]
    fn test_apophis_fixture_is_sampleable() {
        let elements = fixtures::apophis_elements();
        let sample = sample_one_period(&elements, 200).expect("valid elements");
        assertions::assert_closed_curve(&sample, 1.5);
        assertions::assert_within_apsides(&sample, &elements);
    }

    #[test]
    fn test_circular_steps_are_uniform() {
        let sample = sample_one_period(&fixtures::circular_elements(1.0), 100).expect("valid elements");
        let chord = 2.0 * (std::f64::consts::PI / 100.0).sin();
        assert!((assertions::max_step(&sample) - chord).abs() < 1e-9);
    }

    #[test]
    fn test_sample_catalog_parses() {
        let records: Vec<crate::catalog::CatalogRecord> =
            serde_json::from_str(fixtures::SAMPLE_CATALOG_JSON).expect("sample catalog parses");
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].orbital_elements, Some(fixtures::apophis_elements()));
    }

    #[test]
    fn test_summary_fixture_scores_risk() {
        let s = fixtures::summary("x", 2000.0, 0.02, 30.0);
        assert_eq!(s.risk.score, 90);
    }
}
