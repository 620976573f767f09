//! Error types for the pallet layout engine.

use thiserror::Error;

/// Result type alias for pallet layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the validation layer in front of the arrangement engine.
///
/// The engine itself never returns these; a pallet that does not fit is reported
/// through its overflow flag instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A pallet dimension was zero, negative or not finite.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A trailer bed dimension was zero, negative or not finite.
    #[error("Invalid bed: {0}")]
    InvalidBed(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A per-pallet operation addressed a pallet that does not exist.
    #[error("Pallet index {index} out of range (plan holds {len} pallets)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of pallets in the plan.
        len: usize,
    },
}

/// Checks that a dimension is finite and strictly positive.
///
/// `what` names the value in the error message, e.g. `"pallet width"`.
pub fn ensure_positive(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidDimension(format!(
            "{what} must be a positive number, got {value}"
        )))
    }
}

/// Like [`ensure_positive`], but reports a trailer bed value as [`Error::InvalidBed`].
pub fn ensure_bed_dimension(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidBed(format!(
            "{what} must be a positive number, got {value}"
        )))
    }
}
