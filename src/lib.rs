//! Neowatch - Near-Earth Object Hazard Toolkit
//!
//! A library crate providing the computational core of a near-Earth object
//! monitor: risk scoring, impact consequence estimates, deterministic
//! synthetic impact locations, and orbit samples for plotting, plus a
//! read-only catalog handle and feed normalization on top of them.
//!
//! Every operation is a pure function of its inputs (or of an immutable
//! [`catalog::Catalog`]) and may be called from any number of threads.

pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod geolocate;
pub mod impact;
pub mod orbit;
pub mod risk;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use error::{NeoError, Result};
