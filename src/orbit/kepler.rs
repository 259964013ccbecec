//! Two-body Kepler orbit solver using Newton's method for the Kepler equation.

use bevy::math::{DMat3, DVec2, DVec3};

use super::OrbitalElements;
use crate::error::{NeoError, Result};
use crate::types::{DEG_TO_RAD, GAUSSIAN_GRAVITATIONAL_CONSTANT};

/// Heliocentric Keplerian orbit prepared for position sampling.
/// Angles in radians, distances in AU, time in days.
#[derive(Clone, Debug)]
pub struct KeplerOrbit {
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1)
    pub eccentricity: f64,
    /// Mean anomaly at epoch in radians
    pub mean_anomaly_at_epoch: f64,
    /// Mean motion in radians per day
    pub mean_motion: f64,
    /// Epoch of the elements (Julian date)
    pub epoch_jd: f64,
    /// Perifocal → ecliptic rotation built from Ω, i and ω
    orientation: DMat3,
}

impl KeplerOrbit {
    /// Prepare an orbit from classical elements.
    ///
    /// # Errors
    /// [`NeoError::Validation`] unless `a > 0` and `0 ≤ e < 1`, or when any
    /// angle or the epoch is not finite.
    pub fn from_elements(elements: &OrbitalElements) -> Result<Self> {
        let a = elements.semi_major_axis_au;
        if !(a.is_finite() && a > 0.0) {
            return Err(NeoError::validation(
                "semi_major_axis_au",
                a,
                "must be a finite positive number",
            ));
        }
        let e = elements.eccentricity;
        if !(0.0..1.0).contains(&e) {
            return Err(NeoError::validation(
                "eccentricity",
                e,
                "only elliptical orbits (0 <= e < 1) can be sampled",
            ));
        }
        for (field, value) in [
            ("inclination_deg", elements.inclination_deg),
            ("ascending_node_deg", elements.ascending_node_deg),
            ("argument_of_periapsis_deg", elements.argument_of_periapsis_deg),
            ("mean_anomaly_deg", elements.mean_anomaly_deg),
            ("epoch_jd", elements.epoch_jd),
        ] {
            if !value.is_finite() {
                return Err(NeoError::validation(field, value, "must be finite"));
            }
        }

        let orientation = DMat3::from_rotation_z(elements.ascending_node_deg * DEG_TO_RAD)
            * DMat3::from_rotation_x(elements.inclination_deg * DEG_TO_RAD)
            * DMat3::from_rotation_z(elements.argument_of_periapsis_deg * DEG_TO_RAD);

        Ok(Self {
            semi_major_axis: a,
            eccentricity: e,
            mean_anomaly_at_epoch: elements.mean_anomaly_deg * DEG_TO_RAD,
            mean_motion: GAUSSIAN_GRAVITATIONAL_CONSTANT / a.powf(1.5),
            epoch_jd: elements.epoch_jd,
            orientation,
        })
    }

    /// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E
    /// using Newton's method.
    ///
    /// Starts from E = M for moderate eccentricity and E = π above 0.8,
    /// which converges for the elliptical NEO orbits found in catalogs.
    pub fn solve_eccentric_anomaly(&self, mean_anomaly: f64) -> f64 {
        // Normalize mean anomaly to [0, 2π)
        let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);

        let mut e_anomaly = if self.eccentricity < 0.8 {
            m
        } else {
            std::f64::consts::PI
        };

        for _ in 0..50 {
            let sin_e = e_anomaly.sin();
            let cos_e = e_anomaly.cos();

            // f(E) = E - e*sin(E) - M
            let f = e_anomaly - self.eccentricity * sin_e - m;
            // f'(E) = 1 - e*cos(E)
            let f_prime = 1.0 - self.eccentricity * cos_e;

            let delta = f / f_prime;
            e_anomaly -= delta;

            if delta.abs() < 1e-12 {
                break;
            }
        }

        e_anomaly
    }

    /// True anomaly ν from eccentric anomaly E, full-quadrant via atan2.
    pub fn eccentric_to_true_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let half_e = eccentric_anomaly / 2.0;

        let y = (1.0 + e).sqrt() * half_e.sin();
        let x = (1.0 - e).sqrt() * half_e.cos();
        2.0 * y.atan2(x)
    }

    /// Distance from the focus in AU.
    pub fn radius(&self, eccentric_anomaly: f64) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * eccentric_anomaly.cos())
    }

    /// Position in the orbital plane (periapsis along +x), in AU.
    pub fn perifocal_position(&self, days_since_epoch: f64) -> DVec2 {
        let mean_anomaly = self.mean_anomaly_at_epoch + self.mean_motion * days_since_epoch;
        let e_anomaly = self.solve_eccentric_anomaly(mean_anomaly);
        let true_anomaly = self.eccentric_to_true_anomaly(e_anomaly);
        let radius = self.radius(e_anomaly);

        DVec2::new(radius * true_anomaly.cos(), radius * true_anomaly.sin())
    }

    /// Heliocentric ecliptic position in AU, `days_since_epoch` after the epoch.
    pub fn position(&self, days_since_epoch: f64) -> DVec3 {
        self.orientation * self.perifocal_position(days_since_epoch).extend(0.0)
    }

    /// Heliocentric ecliptic position in AU at a Julian date.
    pub fn position_at_jd(&self, jd: f64) -> DVec3 {
        self.position(jd - self.epoch_jd)
    }

    /// Orbital period in days.
    pub fn period_days(&self) -> f64 {
        std::f64::consts::TAU / self.mean_motion
    }
}
