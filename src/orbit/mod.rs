//! Orbit sampling for plotting.
//!
//! Two modes:
//! - Elements: two-body Kepler propagation of a full element set, sampled at
//!   equally spaced times over a span (by default one orbital period).
//! - Proxy: when only a miss distance and period are known, a circle of radius
//!   equal to the miss distance in the ecliptic plane (z = 0).
//!
//! Samples cover the span divided into `steps` intervals without repeating the
//! starting point, so the first and last points are neighbours on the closed
//! curve. Coordinate frame: heliocentric ecliptic, astronomical units.

pub mod kepler;

#[cfg(test)]
mod proptest_orbit;

use bevy::math::DVec3;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{NeoError, Result};
use crate::types::{positive, PLOT_AU_KM};

pub use kepler::KeplerOrbit;

/// Default number of points for element-based sampling.
pub const DEFAULT_ELEMENT_STEPS: usize = 200;

/// Default number of points for proxy sampling.
pub const DEFAULT_PROXY_STEPS: usize = 100;

/// Classical orbital elements from an external catalog.
///
/// Field aliases accept the short column names used by small-body
/// databases (`a`, `e`, `i`, `om`, `w`, `ma`, `epoch`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis (AU)
    #[serde(alias = "a")]
    pub semi_major_axis_au: f64,
    /// Eccentricity
    #[serde(alias = "e")]
    pub eccentricity: f64,
    /// Inclination (degrees)
    #[serde(alias = "i")]
    pub inclination_deg: f64,
    /// Longitude of the ascending node Ω (degrees)
    #[serde(alias = "om")]
    pub ascending_node_deg: f64,
    /// Argument of periapsis ω (degrees)
    #[serde(alias = "w")]
    pub argument_of_periapsis_deg: f64,
    /// Mean anomaly at epoch (degrees)
    #[serde(alias = "ma")]
    pub mean_anomaly_deg: f64,
    /// Epoch (Julian date)
    #[serde(alias = "epoch")]
    pub epoch_jd: f64,
}

/// Last-known geometry of an object without a full element set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProxyOrbit {
    /// Last miss distance (km); becomes the circle radius
    pub miss_distance_km: f64,
    /// Orbital period (days), reported alongside the sample
    pub period_days: Option<f64>,
}

/// Time span covered by element-based sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSpan {
    /// Exactly one orbital period; the sample is a closed curve
    #[default]
    OnePeriod,
    /// A fixed number of days from the epoch
    Days(f64),
}

/// Input to [`sample`]: a full element set or a proxy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitSource {
    Elements {
        elements: OrbitalElements,
        span: SampleSpan,
    },
    Proxy(ProxyOrbit),
}

/// Which sampling mode produced a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    Elements,
    Proxy,
}

/// Ordered 3-D points (AU) along an orbit. Built fresh per request.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalSample {
    mode: SampleMode,
    period_days: Option<f64>,
    points: Vec<DVec3>,
}

impl OrbitalSample {
    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    /// Orbital period (days) when known.
    pub fn period_days(&self) -> Option<f64> {
        self.period_days
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as plain `[x, y, z]` triples for serialization or plotting.
    pub fn to_triples(&self) -> Vec<[f64; 3]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}

impl Serialize for OrbitalSample {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("OrbitalSample", 3)?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("period_days", &self.period_days)?;
        state.serialize_field("points", &self.to_triples())?;
        state.end()
    }
}

fn check_steps(steps: usize) -> Result<()> {
    if steps == 0 {
        return Err(NeoError::validation("steps", 0.0, "at least one sample is required"));
    }
    Ok(())
}

/// Sample a Keplerian orbit at `steps` equally spaced times over `span_days`.
pub fn sample_elements(elements: &OrbitalElements, span_days: f64, steps: usize) -> Result<OrbitalSample> {
    check_steps(steps)?;
    positive("span_days", span_days)?;
    let orbit = KeplerOrbit::from_elements(elements)?;

    let dt = span_days / steps as f64;
    let points = (0..steps).map(|k| orbit.position(k as f64 * dt)).collect();

    Ok(OrbitalSample {
        mode: SampleMode::Elements,
        period_days: Some(orbit.period_days()),
        points,
    })
}

/// Sample exactly one orbital period, giving a closed curve.
pub fn sample_one_period(elements: &OrbitalElements, steps: usize) -> Result<OrbitalSample> {
    let orbit = KeplerOrbit::from_elements(elements)?;
    sample_elements(elements, orbit.period_days(), steps)
}

/// Circle of radius `miss_distance_km` (converted to AU) in the z = 0 plane,
/// sampled at `steps` equally spaced angles.
pub fn sample_proxy(proxy: &ProxyOrbit, steps: usize) -> Result<OrbitalSample> {
    check_steps(steps)?;
    let radius_km = proxy.miss_distance_km;
    if !(radius_km.is_finite() && radius_km >= 0.0) {
        return Err(NeoError::validation(
            "miss_distance_km",
            radius_km,
            "must be a finite non-negative number",
        ));
    }

    let radius_au = radius_km / PLOT_AU_KM;
    let points = (0..steps)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / steps as f64;
            DVec3::new(radius_au * angle.cos(), radius_au * angle.sin(), 0.0)
        })
        .collect();

    Ok(OrbitalSample {
        mode: SampleMode::Proxy,
        period_days: proxy.period_days,
        points,
    })
}

/// Sample either mode.
pub fn sample(source: &OrbitSource, steps: usize) -> Result<OrbitalSample> {
    match source {
        OrbitSource::Elements {
            elements,
            span: SampleSpan::OnePeriod,
        } => sample_one_period(elements, steps),
        OrbitSource::Elements {
            elements,
            span: SampleSpan::Days(days),
        } => sample_elements(elements, *days, steps),
        OrbitSource::Proxy(proxy) => sample_proxy(proxy, steps),
    }
}
