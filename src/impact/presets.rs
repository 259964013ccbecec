//! Impactor presets: common bulk densities and the default impact geometry
//! used when only size and speed are known.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::ImpactorParameters;

/// Default impact angle (degrees) when none is supplied.
pub const DEFAULT_IMPACT_ANGLE_DEG: f64 = 45.0;

/// Default bulk density (kg/m³) when none is supplied: generic rock.
pub const DEFAULT_DENSITY_KG_M3: f64 = 2500.0;

/// Bulk density presets by impactor composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityPreset {
    /// Generic rock, the default for catalog objects of unknown composition
    Rock,
    /// Stony (chondritic) asteroid
    Stony,
    /// Iron-nickel asteroid
    Iron,
    /// Icy cometary nucleus
    Comet,
}

impl DensityPreset {
    pub const ALL: [DensityPreset; 4] = [
        DensityPreset::Rock,
        DensityPreset::Stony,
        DensityPreset::Iron,
        DensityPreset::Comet,
    ];

    /// Bulk density in kg/m³.
    pub fn density_kg_m3(&self) -> f64 {
        match self {
            DensityPreset::Rock => DEFAULT_DENSITY_KG_M3,
            DensityPreset::Stony => 3000.0,
            DensityPreset::Iron => 8000.0,
            DensityPreset::Comet => 500.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DensityPreset::Rock => "Rock",
            DensityPreset::Stony => "Stony",
            DensityPreset::Iron => "Iron",
            DensityPreset::Comet => "Comet",
        }
    }
}

impl fmt::Display for DensityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kg/m³)", self.name(), self.density_kg_m3())
    }
}

/// Fixed impact angle and density applied to a size/speed pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactPreset {
    pub angle_deg: f64,
    pub density_kg_m3: f64,
}

impl Default for ImpactPreset {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_IMPACT_ANGLE_DEG,
            density_kg_m3: DEFAULT_DENSITY_KG_M3,
        }
    }
}

impl ImpactPreset {
    /// Preset with the default angle and a composition's density.
    pub fn with_composition(preset: DensityPreset) -> Self {
        Self {
            density_kg_m3: preset.density_kg_m3(),
            ..Self::default()
        }
    }

    /// Full impactor parameters for a diameter (m) and velocity (m/s).
    pub fn parameters(&self, diameter_m: f64, velocity_m_s: f64) -> ImpactorParameters {
        ImpactorParameters::new(diameter_m, velocity_m_s, self.angle_deg, self.density_kg_m3)
    }
}
