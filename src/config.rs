//! Runtime settings: impact preset, sampling resolution and catalog defaults.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration. Risk thresholds and physical constants are fixed
//! and deliberately absent here.

use std::path::Path;

use bevy::log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::impact::ImpactPreset;
use crate::orbit::{SampleSpan, DEFAULT_ELEMENT_STEPS, DEFAULT_PROXY_STEPS};

/// Default number of rows returned by catalog filtering.
pub const DEFAULT_FILTER_LIMIT: usize = 100;

/// Miss distance (AU) below which an approach counts as close in statistics.
pub const DEFAULT_CLOSE_APPROACH_AU: f64 = 0.1;

/// Orbit sampling resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    /// Points per element-based sample
    pub element_steps: usize,
    /// Time covered by element-based samples
    pub element_span: SampleSpan,
    /// Points per proxy circle
    pub proxy_steps: usize,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            element_steps: DEFAULT_ELEMENT_STEPS,
            element_span: SampleSpan::OnePeriod,
            proxy_steps: DEFAULT_PROXY_STEPS,
        }
    }
}

/// Catalog query defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Row limit applied when a filter names none
    pub default_limit: usize,
    /// Close-approach threshold for statistics (AU)
    pub close_approach_au: f64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_FILTER_LIMIT,
            close_approach_au: DEFAULT_CLOSE_APPROACH_AU,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub impact: ImpactPreset,
    pub orbit: OrbitSettings,
    pub catalog: CatalogSettings,
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
