//! Error taxonomy shared by the calculators and the catalog handle.

/// Result type alias for fallible neowatch operations.
pub type Result<T> = std::result::Result<T, NeoError>;

#[derive(thiserror::Error, Debug)]
pub enum NeoError {
    /// Caller-supplied input outside its domain. Raised before any computation.
    #[error("invalid {field} = {value}: {reason}")]
    Validation {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Identifier absent from the catalog.
    #[error("object not found: {0}")]
    NotFound(String),

    /// Numeric singularity inside a calculation whose inputs were valid.
    #[error("numeric domain error: {0}")]
    Domain(String),

    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NeoError {
    pub(crate) fn validation(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Validation {
            field,
            value,
            reason,
        }
    }

    /// True for errors caused by bad caller input rather than internal arithmetic.
    pub fn is_validation(&self) -> bool {
        matches!(self, NeoError::Validation { .. })
    }

    /// True for numeric singularities raised after validation passed.
    pub fn is_domain(&self) -> bool {
        matches!(self, NeoError::Domain(_))
    }
}
