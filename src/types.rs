//! Core physical constants, unit conversions and impactor input types.

use serde::{Deserialize, Serialize};

use crate::error::{NeoError, Result};

// Physical constants

/// Astronomical unit in kilometers (IAU 2012 definition)
pub const AU_KM: f64 = 149_597_870.7;

/// Rounded AU used when projecting plot samples from kilometers
pub const PLOT_AU_KM: f64 = 149_600_000.0;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Energy of one megaton of TNT in joules
pub const MEGATON_TNT_JOULES: f64 = 4.184e15;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// J2000.0 epoch as a Julian date (January 1, 2000, 12:00 TT)
pub const J2000_JD: f64 = 2_451_545.0;

/// Gaussian gravitational constant k (rad/day for a = 1 AU around the Sun).
///
/// Heliocentric mean motion is n = k / a^1.5 with a in AU.
pub const GAUSSIAN_GRAVITATIONAL_CONSTANT: f64 = 0.017_202_098_95;

/// Convert a velocity in km/h to km/s.
pub fn kmh_to_km_s(kmh: f64) -> f64 {
    kmh / 3600.0
}

/// Convert a velocity in km/h to m/s.
pub fn kmh_to_m_s(kmh: f64) -> f64 {
    kmh / 3.6
}

/// Convert a velocity in km/s to m/s.
pub fn km_s_to_m_s(km_s: f64) -> f64 {
    km_s * 1000.0
}

/// Convert astronomical units to kilometers.
pub fn au_to_km(au: f64) -> f64 {
    au * AU_KM
}

/// Convert kilometers to astronomical units.
pub fn km_to_au(km: f64) -> f64 {
    km / AU_KM
}

/// Physical description of an impactor as supplied by the caller.
///
/// The velocity is in m/s here; risk scoring takes km/s and callers convert
/// explicitly with [`km_s_to_m_s`] / [`kmh_to_m_s`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactorParameters {
    /// Diameter in meters (> 0)
    pub diameter_m: f64,
    /// Velocity at impact in m/s (> 0)
    pub velocity_m_s: f64,
    /// Impact angle from the horizontal in degrees, [0, 90]
    pub impact_angle_deg: f64,
    /// Bulk density in kg/m³ (> 0)
    pub density_kg_m3: f64,
}

impl ImpactorParameters {
    pub fn new(diameter_m: f64, velocity_m_s: f64, impact_angle_deg: f64, density_kg_m3: f64) -> Self {
        Self {
            diameter_m,
            velocity_m_s,
            impact_angle_deg,
            density_kg_m3,
        }
    }

    /// Check every field against its domain.
    ///
    /// NaN fails every comparison, so it is rejected by the same checks.
    pub fn validate(&self) -> Result<()> {
        positive("diameter_m", self.diameter_m)?;
        positive("velocity_m_s", self.velocity_m_s)?;
        positive("density_kg_m3", self.density_kg_m3)?;
        if !(0.0..=90.0).contains(&self.impact_angle_deg) {
            return Err(NeoError::validation(
                "impact_angle_deg",
                self.impact_angle_deg,
                "must be within [0, 90] degrees",
            ));
        }
        Ok(())
    }

    /// Radius in meters
    pub fn radius_m(&self) -> f64 {
        self.diameter_m / 2.0
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NeoError::validation(field, value, "must be a finite positive number"))
    }
}
