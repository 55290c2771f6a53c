//! Estimation errors.
//!
//! All fallible operations of the crate report an [`EstimateError`].
//! A measurement above the sensor cutoff is a normal filter branch and is never reported as an error.

use thiserror::Error;

/// Errors raised by the estimators, the simulation driver and record persistence.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Input that cannot seed or drive an estimator.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Fusion variances that cannot weight a combined estimate.
    #[error("degenerate fusion: {reason} (variances {p1} and {p2})")]
    DegenerateFusion { p1: f64, p2: f64, reason: &'static str },

    /// Innovation covariance that is not strictly positive.
    #[error("innovation covariance not PD in update")]
    DegenerateInnovation,

    #[error("length mismatch in {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EstimateError>;
