//! Qualitative hazard scoring from size, miss distance and velocity.
//!
//! The score is the sum of three banded factors:
//! - Size: >1000 m → 40, >100 m → 20, otherwise 5
//! - Miss distance: <7.5M km → 30, <15M km → 20, <75M km → 10, otherwise 0
//! - Velocity: >25 km/s → 20, >15 km/s → 10, otherwise 0
//!
//! Level: score >60 → high, >30 → medium, otherwise low.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::au_to_km;

/// Score strictly above this is high risk.
pub const HIGH_RISK_SCORE: u32 = 60;
/// Score strictly above this (and not high) is medium risk.
pub const MEDIUM_RISK_SCORE: u32 = 30;

/// Qualitative hazard level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Map an additive score onto a level. Ties fall to the lower band.
    pub fn from_score(score: u32) -> Self {
        if score > HIGH_RISK_SCORE {
            RiskLevel::High
        } else if score > MEDIUM_RISK_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Points contributed by each factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub size: u32,
    pub distance: u32,
    pub velocity: u32,
}

impl RiskFactors {
    pub fn total(&self) -> u32 {
        self.size + self.distance + self.velocity
    }
}

/// Result of a risk assessment. Recomputed on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: u32,
}

/// Size contribution for a diameter in meters.
pub fn size_points(diameter_m: f64) -> u32 {
    if diameter_m > 1000.0 {
        40
    } else if diameter_m > 100.0 {
        20
    } else {
        5
    }
}

/// Distance contribution for a miss distance in kilometers.
pub fn distance_points(miss_distance_km: f64) -> u32 {
    if miss_distance_km < 7_500_000.0 {
        30
    } else if miss_distance_km < 15_000_000.0 {
        20
    } else if miss_distance_km < 75_000_000.0 {
        10
    } else {
        0
    }
}

/// Velocity contribution for a relative velocity in km/s.
pub fn velocity_points(velocity_km_s: f64) -> u32 {
    if velocity_km_s > 25.0 {
        20
    } else if velocity_km_s > 15.0 {
        10
    } else {
        0
    }
}

/// Per-factor breakdown of a risk score, miss distance in AU.
pub fn factors(diameter_m: f64, miss_distance_au: f64, velocity_km_s: f64) -> RiskFactors {
    factors_km(diameter_m, au_to_km(miss_distance_au), velocity_km_s)
}

/// Per-factor breakdown of a risk score, miss distance in kilometers.
pub fn factors_km(diameter_m: f64, miss_distance_km: f64, velocity_km_s: f64) -> RiskFactors {
    RiskFactors {
        size: size_points(diameter_m),
        distance: distance_points(miss_distance_km),
        velocity: velocity_points(velocity_km_s),
    }
}

/// Score an object by diameter (m), miss distance (AU) and velocity (km/s).
///
/// Total for any finite input; validation of degenerate values is the
/// caller's job.
pub fn assess(diameter_m: f64, miss_distance_au: f64, velocity_km_s: f64) -> RiskAssessment {
    assess_km(diameter_m, au_to_km(miss_distance_au), velocity_km_s)
}

/// Same as [`assess`] with the miss distance already in kilometers.
///
/// Sources that record kilometers score through here so band edges such as
/// exactly 75,000,000 km are not shifted by an AU round trip.
pub fn assess_km(diameter_m: f64, miss_distance_km: f64, velocity_km_s: f64) -> RiskAssessment {
    let score = factors_km(diameter_m, miss_distance_km, velocity_km_s).total();
    RiskAssessment {
        level: RiskLevel::from_score(score),
        score,
    }
}
