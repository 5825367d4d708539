//! Interval estimate representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point estimate with lower and upper interval bounds
///
/// Bounds may be `0` or infinite at the boundary of a one-sided degenerate
/// case (e.g. zero observed events), so no finiteness invariant is enforced
/// here; whenever all three values are finite, `lower <= estimate <= upper`
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalEstimate {
    /// The point estimate
    pub estimate: f64,
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Confidence level (e.g. 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl IntervalEstimate {
    /// Create a new interval estimate
    pub fn new(estimate: f64, lower: f64, upper: f64, confidence_level: f64) -> Self {
        Self {
            estimate,
            lower,
            upper,
            confidence_level,
        }
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for IntervalEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} ({:.1}% CI: {:.4} to {:.4})",
            self.estimate,
            self.confidence_level * 100.0,
            self.lower,
            self.upper
        )
    }
}
