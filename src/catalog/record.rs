//! Catalog record schema and lenient field decoding.
//!
//! Upstream sources disagree on field types: identifiers arrive as integers
//! or strings, and numeric feed values are often quoted. The helpers here
//! accept both.

use serde::{Deserialize, Deserializer, Serialize};

use crate::orbit::OrbitalElements;
use crate::risk::{self, RiskAssessment};
use crate::types::{km_to_au, kmh_to_km_s, kmh_to_m_s};

/// One object in the read-only catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub designation: String,
    /// Average estimated diameter (m)
    pub diameter_avg_m: f64,
    /// Relative velocity at the last close approach (km/h)
    pub last_relative_velocity_kmh: f64,
    /// Miss distance at the last close approach (km)
    pub last_miss_distance_km: f64,
    #[serde(default)]
    pub is_potentially_hazardous: bool,
    #[serde(default)]
    pub last_close_approach_date: String,
    #[serde(default)]
    pub orbital_period_days: Option<f64>,
    #[serde(default)]
    pub orbital_elements: Option<OrbitalElements>,
}

impl CatalogRecord {
    /// Last relative velocity in km/s.
    pub fn velocity_km_s(&self) -> f64 {
        kmh_to_km_s(self.last_relative_velocity_kmh)
    }

    /// Last relative velocity in m/s.
    pub fn velocity_m_s(&self) -> f64 {
        kmh_to_m_s(self.last_relative_velocity_kmh)
    }

    /// Last miss distance in AU.
    pub fn miss_distance_au(&self) -> f64 {
        km_to_au(self.last_miss_distance_km)
    }

    pub fn risk(&self) -> RiskAssessment {
        risk::assess_km(self.diameter_avg_m, self.last_miss_distance_km, self.velocity_km_s())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Integer(i64),
    Unsigned(u64),
}

/// Identifier as a string, accepting JSON integers.
pub(crate) fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Integer(n) => n.to_string(),
        IdRepr::Unsigned(n) => n.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Number(f64),
    Text(String),
}

/// Optional number that may be quoted. Unparseable text is an error.
pub(crate) fn de_lenient_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    match Option::<NumberRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberRepr::Number(n)) => Ok(Some(n)),
        Some(NumberRepr::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {s:?}"))),
    }
}
