//! Filtering, alerting and statistics over object summaries.
//!
//! These work on any slice of [`NeoSummary`], whether it came from the
//! catalog or from a normalized feed.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::NeoSummary;
use crate::risk::RiskLevel;

/// Filter over summaries. Diameter bounds are inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeoFilter {
    pub risk_level: Option<RiskLevel>,
    pub min_diameter_m: Option<f64>,
    pub max_diameter_m: Option<f64>,
    /// Row limit; the configured default applies when absent
    pub limit: Option<usize>,
}

impl NeoFilter {
    pub fn with_risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = Some(level);
        self
    }

    pub fn with_diameter_range(mut self, min_m: Option<f64>, max_m: Option<f64>) -> Self {
        self.min_diameter_m = min_m;
        self.max_diameter_m = max_m;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, summary: &NeoSummary) -> bool {
        if self.risk_level.is_some_and(|level| summary.risk.level != level) {
            return false;
        }
        if self.min_diameter_m.is_some_and(|min| summary.diameter_m < min) {
            return false;
        }
        if self.max_diameter_m.is_some_and(|max| summary.diameter_m > max) {
            return false;
        }
        true
    }
}

/// Matching summaries in input order, truncated to the filter's limit or
/// `default_limit`.
pub fn filter(summaries: &[NeoSummary], neo_filter: &NeoFilter, default_limit: usize) -> Vec<NeoSummary> {
    summaries
        .iter()
        .filter(|s| neo_filter.matches(s))
        .take(neo_filter.limit.unwrap_or(default_limit))
        .cloned()
        .collect()
}

/// High-risk summaries, highest score first. Equal scores keep input order.
pub fn alerts(summaries: &[NeoSummary]) -> Vec<NeoSummary> {
    let mut high: Vec<NeoSummary> = summaries
        .iter()
        .filter(|s| s.risk.level == RiskLevel::High)
        .cloned()
        .collect();
    high.sort_by_key(|s| Reverse(s.risk.score));
    high
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskDistribution {
    fn count(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }
}

/// Aggregate figures over a set of summaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NeoStatistics {
    pub total: usize,
    pub risk_distribution: RiskDistribution,
    /// Objects with a miss distance below the close-approach threshold
    pub close_approaches: usize,
    /// Largest diameter (m), zero for an empty set
    pub largest_diameter_m: f64,
    /// Mean of the positive diameters (m), zero if there are none
    pub average_diameter_m: f64,
    /// Mean of the positive velocities (km/s), zero if there are none
    pub average_velocity_km_s: f64,
}

fn positive_mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .filter(|v| *v > 0.0)
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

pub fn statistics(summaries: &[NeoSummary], close_approach_au: f64) -> NeoStatistics {
    let mut risk_distribution = RiskDistribution::default();
    for s in summaries {
        risk_distribution.count(s.risk.level);
    }

    NeoStatistics {
        total: summaries.len(),
        risk_distribution,
        close_approaches: summaries
            .iter()
            .filter(|s| s.miss_distance_au < close_approach_au)
            .count(),
        largest_diameter_m: summaries.iter().map(|s| s.diameter_m).fold(0.0, f64::max),
        average_diameter_m: positive_mean(summaries.iter().map(|s| s.diameter_m)),
        average_velocity_km_s: positive_mean(summaries.iter().map(|s| s.velocity_km_s)),
    }
}
