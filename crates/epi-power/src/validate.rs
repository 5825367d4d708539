//! Shared parameter checks for the solvers

use epi_core::{Error, Result};

/// Check that a probability-like parameter lies strictly in (0, 1)
pub(crate) fn probability(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(Error::InvalidParameter(format!(
            "{name} must be in (0, 1), got {value}"
        )));
    }
    Ok(())
}

/// Check that a parameter is finite and strictly positive
pub(crate) fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::non_positive(name, value));
    }
    Ok(())
}
