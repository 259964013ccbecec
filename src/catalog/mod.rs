//! Read-only catalog of near-Earth objects.
//!
//! A [`Catalog`] is built once from records and never mutated, so a shared
//! reference can serve any number of concurrent readers. Every derived value
//! (risk, orbit sample, impact consequence) is recomputed per call.

pub mod query;
pub mod record;

use std::collections::HashMap;
use std::path::Path;

use bevy::log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{CatalogSettings, OrbitSettings};
use crate::error::{NeoError, Result};
use crate::geolocate::{self, ImpactDetermination};
use crate::impact::{self, ImpactConsequence, ImpactPreset, Severity};
use crate::orbit::{self, OrbitSource, OrbitalElements, OrbitalSample, ProxyOrbit};
use crate::risk::RiskAssessment;
use crate::types::ImpactorParameters;

pub use query::{NeoFilter, NeoStatistics, RiskDistribution};
pub use record::CatalogRecord;

/// Normalized view of one object with its risk attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeoSummary {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub miss_distance_au: f64,
    pub approach_date: String,
    pub is_potentially_hazardous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital_elements: Option<OrbitalElements>,
    pub risk: RiskAssessment,
}

impl From<&CatalogRecord> for NeoSummary {
    fn from(record: &CatalogRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            designation: record.designation.clone(),
            diameter_m: record.diameter_avg_m,
            velocity_km_s: record.velocity_km_s(),
            miss_distance_au: record.miss_distance_au(),
            approach_date: record.last_close_approach_date.clone(),
            is_potentially_hazardous: record.is_potentially_hazardous,
            orbital_elements: record.orbital_elements,
            risk: record.risk(),
        }
    }
}

/// Orbit sample for one object, with the figures shown beside the plot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrbitProfile {
    pub id: String,
    pub name: String,
    pub diameter_m: f64,
    pub velocity_m_s: f64,
    pub miss_distance_km: f64,
    pub orbital_period_days: Option<f64>,
    pub last_approach_date: String,
    pub sample: OrbitalSample,
}

/// Impact run for one catalog object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectImpact {
    pub id: String,
    pub name: String,
    pub parameters: ImpactorParameters,
    pub consequence: ImpactConsequence,
    pub severity: Severity,
    pub determination: ImpactDetermination,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog. When an identifier repeats, the first record wins.
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        let mut kept = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            if index.contains_key(&record.id) {
                warn!("Duplicate catalog id {}, keeping the first record", record.id);
                continue;
            }
            index.insert(record.id.clone(), kept.len());
            kept.push(record);
        }
        info!("Catalog ready with {} records", kept.len());
        Self {
            records: kept,
            index,
        }
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Read a JSON array of records from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading catalog from {}", path.display());
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Result<&CatalogRecord> {
        match self.index.get(id) {
            Some(&i) => Ok(&self.records[i]),
            None => {
                debug!("Unknown catalog id {id}");
                Err(NeoError::NotFound(id.to_string()))
            }
        }
    }

    /// Summaries of every record, in catalog order.
    pub fn summaries(&self) -> Vec<NeoSummary> {
        self.records.iter().map(NeoSummary::from).collect()
    }

    pub fn filter(&self, neo_filter: &NeoFilter, settings: &CatalogSettings) -> Vec<NeoSummary> {
        let rows = query::filter(&self.summaries(), neo_filter, settings.default_limit);
        debug!("Filter {:?} matched {} rows", neo_filter, rows.len());
        rows
    }

    /// High-risk objects, highest score first.
    pub fn alerts(&self) -> Vec<NeoSummary> {
        query::alerts(&self.summaries())
    }

    pub fn statistics(&self, settings: &CatalogSettings) -> NeoStatistics {
        query::statistics(&self.summaries(), settings.close_approach_au)
    }

    /// Orbit source for a record: its elements when present, else a proxy
    /// circle at its last miss distance.
    pub fn orbit_source(record: &CatalogRecord, settings: &OrbitSettings) -> OrbitSource {
        match record.orbital_elements {
            Some(elements) => OrbitSource::Elements {
                elements,
                span: settings.element_span,
            },
            None => OrbitSource::Proxy(ProxyOrbit {
                miss_distance_km: record.last_miss_distance_km,
                period_days: record.orbital_period_days,
            }),
        }
    }

    pub fn orbit_profile(&self, id: &str, settings: &OrbitSettings) -> Result<OrbitProfile> {
        let record = self.get(id)?;
        let source = Self::orbit_source(record, settings);
        let steps = match source {
            OrbitSource::Elements { .. } => settings.element_steps,
            OrbitSource::Proxy(_) => settings.proxy_steps,
        };
        let sample = orbit::sample(&source, steps)?;

        Ok(OrbitProfile {
            id: record.id.clone(),
            name: record.name.clone(),
            diameter_m: record.diameter_avg_m,
            velocity_m_s: record.velocity_m_s(),
            miss_distance_km: record.last_miss_distance_km,
            orbital_period_days: record.orbital_period_days.or(sample.period_days()),
            last_approach_date: record.last_close_approach_date.clone(),
            sample,
        })
    }

    /// Run the impact calculator on a record's size and speed with the
    /// preset angle and density.
    pub fn impact_for(&self, id: &str, preset: &ImpactPreset) -> Result<ObjectImpact> {
        let record = self.get(id)?;
        let parameters = preset.parameters(record.diameter_avg_m, record.velocity_m_s());
        let consequence = impact::compute(&parameters)?;

        Ok(ObjectImpact {
            id: record.id.clone(),
            name: record.name.clone(),
            parameters,
            severity: consequence.severity(),
            consequence,
            determination: geolocate::determine_impact(&record.id, record.last_miss_distance_km),
        })
    }
}
