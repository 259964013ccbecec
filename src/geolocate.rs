//! Deterministic fallback impact location for objects without ephemeris data.
//!
//! When an object is on an Earth-impacting trajectory but no precise impact
//! point is known, a plausible coordinate is derived from its identifier
//! alone. The result is illustrative only and is stable across runs.
//!
//! Seed derivation: hex-encode the identifier's UTF-8 bytes, keep the first
//! six hex digits and parse them as an integer. Identifiers with no bytes
//! fall back to the leading four bytes of their SHA-256 digest.

use bevy::log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::EARTH_RADIUS_KM;

/// Latitude bound for synthetic impact points (degrees).
pub const MAX_SYNTHETIC_LATITUDE: f64 = 60.0;

/// Longitudes within ±this many degrees are pushed out of the mid-ocean band.
pub const EQUATORIAL_BAND_DEG: i64 = 30;

/// Shift applied to longitudes inside the equatorial band (degrees).
pub const EQUATORIAL_BAND_SHIFT_DEG: i64 = 60;

/// Number of hex digits of the encoded identifier used as the seed.
const SEED_HEX_DIGITS: usize = 6;

/// A synthetic Earth surface coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Whether an object hits Earth, and where (illustratively).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactDetermination {
    pub will_impact: bool,
    pub miss_distance_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_point: Option<GeoCoordinate>,
}

/// Seed from the first six hex digits of the identifier's bytes.
fn hex_seed(identifier: &str) -> Option<u32> {
    let encoded = hex::encode(identifier.as_bytes());
    let prefix = encoded.get(..SEED_HEX_DIGITS.min(encoded.len()))?;
    u32::from_str_radix(prefix, 16).ok()
}

fn hashed_seed(identifier: &str) -> u32 {
    let digest = Sha256::digest(identifier.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Non-negative integer seed for an identifier.
pub fn seed(identifier: &str) -> u32 {
    hex_seed(identifier).unwrap_or_else(|| {
        debug!("No hex seed for identifier {identifier:?}, using hashed seed");
        hashed_seed(identifier)
    })
}

/// Push longitudes in the equatorial band outward by 60°.
fn avoid_equatorial_band(longitude: i64) -> i64 {
    if (-EQUATORIAL_BAND_DEG..=EQUATORIAL_BAND_DEG).contains(&longitude) {
        if longitude >= 0 {
            longitude + EQUATORIAL_BAND_SHIFT_DEG
        } else {
            longitude - EQUATORIAL_BAND_SHIFT_DEG
        }
    } else {
        longitude
    }
}

/// Synthetic impact coordinate for an identifier. Total and deterministic.
///
/// Latitude lies in [-60, 59]; longitude in [-180, 179] outside (-30, 30).
pub fn locate(identifier: &str) -> GeoCoordinate {
    let nid = i64::from(seed(identifier));

    let base_lat = nid.rem_euclid(120) - 60;
    let base_lng = (nid / 7).rem_euclid(360) - 180;

    GeoCoordinate {
        latitude: (base_lat as f64).clamp(-MAX_SYNTHETIC_LATITUDE, MAX_SYNTHETIC_LATITUDE),
        longitude: avoid_equatorial_band(base_lng) as f64,
    }
}

/// True when the miss distance is within Earth's radius.
pub fn will_impact(miss_distance_km: f64) -> bool {
    miss_distance_km <= EARTH_RADIUS_KM
}

/// Decide impact from the miss distance and attach a synthetic coordinate
/// when the object hits.
pub fn determine_impact(identifier: &str, miss_distance_km: f64) -> ImpactDetermination {
    let hits = will_impact(miss_distance_km);
    ImpactDetermination {
        will_impact: hits,
        miss_distance_km,
        impact_point: hits.then(|| locate(identifier)),
    }
}
