//! Common test utilities for integration tests.

#![allow(dead_code)]

use neowatch::catalog::{Catalog, CatalogRecord};
use neowatch::orbit::OrbitalElements;

/// Elements of a near-Earth orbit similar to Apophis.
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

/// Record with the given size (m), speed (km/h) and miss distance (km).
pub fn record(id: &str, diameter_m: f64, velocity_kmh: f64, miss_distance_km: f64) -> CatalogRecord {
    CatalogRecord {
        id: id.to_string(),
        name: format!("({id})"),
        designation: id.to_string(),
        diameter_avg_m: diameter_m,
        last_relative_velocity_kmh: velocity_kmh,
        last_miss_distance_km: miss_distance_km,
        is_potentially_hazardous: diameter_m > 140.0,
        last_close_approach_date: "2025-10-04".to_string(),
        orbital_period_days: None,
        orbital_elements: None,
    }
}

/// Six objects spanning the three risk levels, one of them on an
/// Earth-impacting trajectory and one with a full element set.
pub fn sample_catalog() -> Catalog {
    let mut apophis = record("2099942", 370.0, 26_640.0, 38_012.0);
    apophis.name = "99942 Apophis".to_string();
    apophis.orbital_period_days = Some(323.6);
    apophis.orbital_elements = Some(apophis_elements());

    let mut impactor = record("3542519", 100.0, 61_200.0, 5_000.0);
    impactor.orbital_period_days = Some(410.2);

    Catalog::from_records(vec![
        // 20 + 30 + 0 = 50, medium
        apophis,
        // 5 + 30 + 10 = 45, medium
        impactor,
        // 40 + 30 + 20 = 90, high
        record("2465633", 1200.0, 100_800.0, 4_200_000.0),
        // 40 + 20 + 10 = 70, high
        record("2001036", 35_000.0, 61_200.0, 9_000_000.0),
        // 5 + 10 + 0 = 15, low
        record("3713989", 45.0, 20_000.0, 60_000_000.0),
        // 20 + 0 + 20 = 40, medium
        record("3843004", 250.0, 95_000.0, 120_000_000.0),
    ])
}

/// Relative difference between two values.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}
