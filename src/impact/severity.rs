//! Presentation helpers on top of an impact consequence: a severity class
//! with a comparable historic event, map damage zones, and a side-by-side
//! comparison with a fixed reference scenario.

use serde::{Deserialize, Serialize};

use super::ImpactConsequence;

/// Coarse severity class by released energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    LowMedium,
    Medium,
    High,
    Extreme,
}

impl Severity {
    /// Classify an energy in megatons. Thresholds are strict.
    pub fn classify(megatons: f64) -> Self {
        if megatons > 1000.0 {
            Severity::Extreme
        } else if megatons > 100.0 {
            Severity::High
        } else if megatons > 10.0 {
            Severity::Medium
        } else if megatons > 1.0 {
            Severity::LowMedium
        } else {
            Severity::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::LowMedium => "Low-Medium",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Extreme => "Extreme",
        }
    }

    /// A historic or familiar event of similar scale.
    pub fn comparable_event(&self) -> &'static str {
        match self {
            Severity::Low => "Small meteorite",
            Severity::LowMedium => "Nuclear bomb",
            Severity::Medium => "Chelyabinsk meteor",
            Severity::High => "Tunguska event",
            Severity::Extreme => "Chicxulub impact (dinosaur extinction)",
        }
    }
}

/// Which ring of the impact map a zone describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    Fireball,
    Crater,
    /// Ejecta and blast ring at twice the crater diameter
    Outer,
}

/// A circle around the impact point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageZone {
    pub kind: ZoneKind,
    pub radius_m: f64,
}

/// Concentric damage zones for a map overlay, innermost first as drawn.
pub fn damage_zones(consequence: &ImpactConsequence) -> [DamageZone; 3] {
    [
        DamageZone {
            kind: ZoneKind::Fireball,
            radius_m: consequence.fireball_radius_km * 1000.0,
        },
        DamageZone {
            kind: ZoneKind::Crater,
            radius_m: consequence.crater_diameter_km * 1000.0,
        },
        DamageZone {
            kind: ZoneKind::Outer,
            radius_m: consequence.crater_diameter_km * 2000.0,
        },
    ]
}

/// A fixed, published scenario used as a yardstick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceScenario {
    pub name: &'static str,
    pub energy_megatons: f64,
    pub crater_diameter_km: f64,
    pub tsunami_height_m: f64,
}

/// Theoretical Impactor-2025 exercise scenario (Pacific Ocean impact).
pub static IMPACTOR_2025: ReferenceScenario = ReferenceScenario {
    name: "Impactor-2025",
    energy_megatons: 500.0,
    crater_diameter_km: 45.0,
    tsunami_height_m: 200.0,
};

/// One metric side by side with its reference value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub simulated: f64,
    pub reference: f64,
    /// simulated / reference
    pub ratio: f64,
}

impl MetricComparison {
    fn new(simulated: f64, reference: f64) -> Self {
        Self {
            simulated,
            reference,
            ratio: simulated / reference,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub reference: String,
    pub energy_megatons: MetricComparison,
    pub crater_diameter_km: MetricComparison,
    pub tsunami_height_m: MetricComparison,
}

/// Compare a consequence with a reference scenario.
pub fn compare(consequence: &ImpactConsequence, reference: &ReferenceScenario) -> ScenarioComparison {
    ScenarioComparison {
        reference: reference.name.to_string(),
        energy_megatons: MetricComparison::new(consequence.energy_megatons, reference.energy_megatons),
        crater_diameter_km: MetricComparison::new(
            consequence.crater_diameter_km,
            reference.crater_diameter_km,
        ),
        tsunami_height_m: MetricComparison::new(consequence.tsunami_height_m, reference.tsunami_height_m),
    }
}
