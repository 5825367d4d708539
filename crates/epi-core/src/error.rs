//! Error types for epidemiological statistics
//!
//! Provides a unified error type for all epi-stats crates.
//!
//! Not every degenerate input surfaces here: several primitives document a
//! sentinel return value instead (e.g. a critical value of `0.0` for
//! non-positive degrees of freedom), so that batch computations such as
//! power curves remain composable without per-point error handling. This
//! type covers the cases that are mathematically undefined and must be
//! reported to the caller rather than encoded as a NaN or infinity.

use thiserror::Error;

/// Core error type for epidemiological statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Result is mathematically undefined for the given input
    #[error("Not computable: {0}")]
    NotComputable(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a probability outside (0, 1)
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in (0, 1)"))
    }

    /// Create an error for a count that must be positive
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive, got {value}"))
    }

    /// Create an error for a 2x2 table with an empty row or column
    pub fn zero_margin(context: &str) -> Self {
        Self::NotComputable(format!(
            "{context} is undefined for a table with an empty row or column"
        ))
    }
}
