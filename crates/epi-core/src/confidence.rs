//! Confidence level representation
//!
//! Caller-facing layers work with confidence percentages (e.g. "95%"); the
//! numeric layer works with the fractional level and its tail areas. This
//! newtype carries the validated value between the two so the distribution
//! primitives themselves can stay validation-free.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level from a fraction in (0, 1)
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::InvalidParameter(format!(
                "Confidence level {level} must be in (0, 1)"
            )));
        }
        Ok(Self(level))
    }

    /// Create a new confidence level from a percentage in (0, 100)
    pub fn from_percent(percent: f64) -> Result<Self> {
        if !(percent > 0.0 && percent < 100.0) {
            return Err(Error::InvalidParameter(format!(
                "Confidence percentage {percent} must be in (0, 100)"
            )));
        }
        Ok(Self(percent / 100.0))
    }

    /// Get the confidence level value as a fraction
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the confidence level as a percentage
    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
