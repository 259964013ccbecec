//! Impact consequence estimates from impactor size, speed, angle and density.
//!
//! Every formula here is an order-of-magnitude heuristic:
//! - mass from a sphere of the given density
//! - kinetic energy ½mv², converted to megatons of TNT
//! - crater ∝ Mt^0.294 scaled by sin(angle)
//! - fireball ∝ Mt^0.4
//! - tsunami ∝ Mt^0.5 for shallow (< 30°) impacts, used as an ocean-impact proxy
//! - seismic magnitude log10(Mt) + 4
//! - affected population ∝ Mt^0.6
//!
//! [`estimate`] returns unrounded values; [`compute`] applies the presentation
//! rounding on top of it.

pub mod presets;
pub mod severity;

#[cfg(test)]
mod proptest_impact;

use bevy::log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{NeoError, Result};
use crate::types::{ImpactorParameters, MEGATON_TNT_JOULES};

pub use presets::{DensityPreset, ImpactPreset};
pub use severity::{DamageZone, ReferenceScenario, ScenarioComparison, Severity};

/// Impact angle below which the tsunami term is applied.
pub const OCEAN_IMPACT_MAX_ANGLE_DEG: f64 = 30.0;

/// Unrounded impact consequences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactEstimate {
    /// Impactor mass (kg)
    pub mass_kg: f64,
    /// Kinetic energy at impact (J)
    pub kinetic_energy_j: f64,
    /// TNT-equivalent energy (megatons)
    pub megatons: f64,
    /// Final crater diameter (km)
    pub crater_diameter_km: f64,
    /// Fireball radius (km)
    pub fireball_radius_km: f64,
    /// Tsunami wave height (m), zero for steep impacts
    pub tsunami_height_m: f64,
    /// Equivalent seismic magnitude
    pub seismic_magnitude: f64,
    /// Affected population estimate (people)
    pub affected_population: f64,
}

impl ImpactEstimate {
    /// Apply the presentation rounding.
    pub fn rounded(&self) -> ImpactConsequence {
        ImpactConsequence {
            energy_megatons: round_to(self.megatons, 2),
            crater_diameter_km: round_to(self.crater_diameter_km, 2),
            fireball_radius_km: round_to(self.fireball_radius_km, 2),
            tsunami_height_m: round_to(self.tsunami_height_m, 1),
            seismic_magnitude: round_to(self.seismic_magnitude, 1),
            affected_population: self.affected_population.round_ties_even(),
            mass_kg: self.mass_kg.round_ties_even(),
            kinetic_energy_j: self.kinetic_energy_j.round_ties_even(),
        }
    }
}

/// Rounded impact consequences, as presented to callers.
///
/// `affected_population`, `mass_kg` and `kinetic_energy_j` are whole numbers
/// kept as `f64`, since large impactors exceed the `u64` range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactConsequence {
    /// 2 decimals
    pub energy_megatons: f64,
    /// 2 decimals
    pub crater_diameter_km: f64,
    /// 2 decimals
    pub fireball_radius_km: f64,
    /// 1 decimal
    pub tsunami_height_m: f64,
    /// 1 decimal
    pub seismic_magnitude: f64,
    pub affected_population: f64,
    pub mass_kg: f64,
    pub kinetic_energy_j: f64,
}

impl ImpactConsequence {
    /// Severity class for this energy.
    pub fn severity(&self) -> Severity {
        Severity::classify(self.energy_megatons)
    }
}

/// Round to a fixed number of decimal places.
///
/// Works on the exact decimal expansion of `value`, so only true ties round
/// to even: 0.125 → 0.12, while 5.65 (stored just above 5.65) → 5.7.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Mass of a homogeneous sphere (kg).
pub fn sphere_mass(radius_m: f64, density_kg_m3: f64) -> f64 {
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
    density_kg_m3 * volume
}

/// Kinetic energy (J) of a mass moving at `velocity_m_s`.
pub fn kinetic_energy(mass_kg: f64, velocity_m_s: f64) -> f64 {
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// Joules to megatons of TNT.
pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / MEGATON_TNT_JOULES
}

/// Crater diameter (km). Zero for grazing (0°) impacts, largest at 90°.
pub fn crater_diameter_km(megatons: f64, angle_deg: f64) -> f64 {
    let base_diameter_m = megatons.powf(0.294) * 1000.0;
    base_diameter_m * angle_deg.to_radians().sin() / 1000.0
}

/// Fireball radius (km).
pub fn fireball_radius_km(megatons: f64) -> f64 {
    megatons.powf(0.4)
}

/// Tsunami height (m); only shallow impacts are treated as ocean impacts.
pub fn tsunami_height_m(megatons: f64, angle_deg: f64) -> f64 {
    if angle_deg < OCEAN_IMPACT_MAX_ANGLE_DEG {
        megatons.powf(0.5) * 10.0
    } else {
        0.0
    }
}

/// Seismic magnitude; undefined unless `megatons` is finite and positive.
pub fn seismic_magnitude(megatons: f64) -> Result<f64> {
    if !(megatons.is_finite() && megatons > 0.0) {
        warn!("Seismic magnitude undefined for {megatons} Mt");
        return Err(NeoError::Domain(format!(
            "log10 of non-positive or non-finite energy ({megatons} Mt)"
        )));
    }
    Ok(megatons.log10() + 4.0)
}

/// Affected population estimate (people).
pub fn affected_population(megatons: f64) -> f64 {
    megatons.powf(0.6) * 1_000_000.0
}

/// Compute unrounded consequences.
///
/// # Errors
/// - [`NeoError::Validation`] for out-of-domain parameters
/// - [`NeoError::Domain`] when the energy underflows to zero or overflows
pub fn estimate(params: &ImpactorParameters) -> Result<ImpactEstimate> {
    params.validate()?;

    let mass_kg = sphere_mass(params.radius_m(), params.density_kg_m3);
    let kinetic_energy_j = kinetic_energy(mass_kg, params.velocity_m_s);
    let megatons = joules_to_megatons(kinetic_energy_j);

    // Checked first so every later term is computed from a usable energy
    let seismic_magnitude = seismic_magnitude(megatons)?;

    Ok(ImpactEstimate {
        mass_kg,
        kinetic_energy_j,
        megatons,
        crater_diameter_km: crater_diameter_km(megatons, params.impact_angle_deg),
        fireball_radius_km: fireball_radius_km(megatons),
        tsunami_height_m: tsunami_height_m(megatons, params.impact_angle_deg),
        seismic_magnitude,
        affected_population: affected_population(megatons),
    })
}

/// Compute rounded consequences for an impactor.
pub fn compute(params: &ImpactorParameters) -> Result<ImpactConsequence> {
    estimate(params).map(|e| e.rounded())
}

/// Convenience preset: 45° impact of a 2500 kg/m³ body.
pub fn compute_preset(diameter_m: f64, velocity_m_s: f64) -> Result<ImpactConsequence> {
    compute(&ImpactPreset::default().parameters(diameter_m, velocity_m_s))
}
