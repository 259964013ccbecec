//! Normalization of NeoWs-style feed and lookup documents.
//!
//! A feed groups objects by date under `near_earth_objects`; a lookup is a
//! single object. Both are reduced to [`NeoSummary`] rows with risk attached,
//! using these fallbacks:
//! - diameter: mean of the estimated min/max in meters, else 100 m
//! - velocity (km/s), miss distance (AU) and date: first close approach,
//!   else 0 / 0 / ""
//! - orbital elements: absent without `orbital_data`; missing numbers are 0
//!
//! Numeric fields are accepted as JSON numbers or numeric strings.

use std::collections::BTreeMap;

use bevy::log::{debug, info};
use serde::Deserialize;

use crate::catalog::NeoSummary;
use crate::catalog::record::{de_id, de_lenient_f64};
use crate::error::Result;
use crate::orbit::OrbitalElements;
use crate::risk;

/// Diameter assumed when a document carries no size estimate (m).
pub const DEFAULT_DIAMETER_M: f64 = 100.0;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FeedDocument {
    #[serde(default)]
    pub element_count: Option<u64>,
    /// Objects keyed by close-approach date; iterated in date order
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<FeedObject>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FeedObject {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default, alias = "is_potentially_hazardous")]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    #[serde(default)]
    pub orbital_data: Option<FeedOrbitalData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default)]
    pub meters: Option<DiameterRange>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DiameterRange {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub estimated_diameter_min: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub estimated_diameter_max: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: String,
    #[serde(default)]
    pub relative_velocity: Option<RelativeVelocity>,
    #[serde(default)]
    pub miss_distance: Option<MissDistance>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelativeVelocity {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub kilometers_per_second: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MissDistance {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub astronomical: Option<f64>,
}

/// Orbital elements as published by the feed, all optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FeedOrbitalData {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub semi_major_axis: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub eccentricity: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub inclination: Option<f64>,
    #[serde(default, alias = "longitude_of_ascending_node", deserialize_with = "de_lenient_f64")]
    pub ascending_node_longitude: Option<f64>,
    #[serde(default, alias = "argument_of_periapsis", deserialize_with = "de_lenient_f64")]
    pub perihelion_argument: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub mean_anomaly: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub epoch_osculation: Option<f64>,
}

impl FeedOrbitalData {
    pub fn elements(&self) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis_au: self.semi_major_axis.unwrap_or(0.0),
            eccentricity: self.eccentricity.unwrap_or(0.0),
            inclination_deg: self.inclination.unwrap_or(0.0),
            ascending_node_deg: self.ascending_node_longitude.unwrap_or(0.0),
            argument_of_periapsis_deg: self.perihelion_argument.unwrap_or(0.0),
            mean_anomaly_deg: self.mean_anomaly.unwrap_or(0.0),
            epoch_jd: self.epoch_osculation.unwrap_or(0.0),
        }
    }
}

impl FeedObject {
    pub fn diameter_m(&self) -> f64 {
        let range = self.estimated_diameter.as_ref().and_then(|d| d.meters.as_ref());
        match range {
            Some(DiameterRange {
                estimated_diameter_min: Some(min),
                estimated_diameter_max: Some(max),
            }) => (min + max) / 2.0,
            _ => DEFAULT_DIAMETER_M,
        }
    }

    fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.first()
    }

    pub fn velocity_km_s(&self) -> f64 {
        self.first_approach()
            .and_then(|a| a.relative_velocity.as_ref())
            .and_then(|v| v.kilometers_per_second)
            .unwrap_or(0.0)
    }

    pub fn miss_distance_au(&self) -> f64 {
        self.first_approach()
            .and_then(|a| a.miss_distance.as_ref())
            .and_then(|d| d.astronomical)
            .unwrap_or(0.0)
    }

    pub fn approach_date(&self) -> String {
        self.first_approach()
            .map(|a| a.close_approach_date.clone())
            .unwrap_or_default()
    }

    pub fn summary(&self) -> NeoSummary {
        let diameter_m = self.diameter_m();
        let velocity_km_s = self.velocity_km_s();
        let miss_distance_au = self.miss_distance_au();

        NeoSummary {
            id: self.id.clone(),
            name: self.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            designation: self.designation.clone().unwrap_or_default(),
            diameter_m,
            velocity_km_s,
            miss_distance_au,
            approach_date: self.approach_date(),
            is_potentially_hazardous: self.is_potentially_hazardous_asteroid,
            orbital_elements: self.orbital_data.as_ref().map(FeedOrbitalData::elements),
            risk: risk::assess(diameter_m, miss_distance_au, velocity_km_s),
        }
    }
}

impl FeedDocument {
    /// Summaries for every object, dates ascending, feed order within a date.
    pub fn summaries(&self) -> Vec<NeoSummary> {
        self.near_earth_objects
            .values()
            .flatten()
            .map(FeedObject::summary)
            .collect()
    }
}

/// Normalize a feed document.
pub fn normalize_feed(json: &str) -> Result<Vec<NeoSummary>> {
    let document: FeedDocument = serde_json::from_str(json)?;
    let summaries = document.summaries();
    match document.element_count {
        Some(count) if count as usize != summaries.len() => {
            debug!("Feed reports {count} objects but lists {}", summaries.len());
        }
        _ => {}
    }
    info!(
        "Normalized {} feed objects over {} dates",
        summaries.len(),
        document.near_earth_objects.len()
    );
    Ok(summaries)
}

/// Normalize a single-object lookup document.
pub fn normalize_lookup(json: &str) -> Result<NeoSummary> {
    let object: FeedObject = serde_json::from_str(json)?;
    Ok(object.summary())
}
