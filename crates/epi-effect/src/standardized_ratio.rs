//! Standardized mortality/incidence ratio
//!
//! The ratio of observed to expected events, with Byar's approximate
//! Poisson bounds on the observed count scaled by the expected count.

use epi_core::{ConfidenceLevel, Error, IntervalEstimate, Result};
use epi_distributions::normal;

/// Standardized ratio `observed / expected` with Byar's interval
///
/// `expected` must be positive. `observed = 0` pins the lower bound at
/// zero.
pub fn standardized_ratio(
    observed: u64,
    expected: f64,
    level: ConfidenceLevel,
) -> Result<IntervalEstimate> {
    if !expected.is_finite() || expected <= 0.0 {
        return Err(Error::non_positive("expected count", expected));
    }

    let o = observed as f64;
    let z = normal::z_critical(level);

    let lower = if observed == 0 {
        0.0
    } else {
        let term = 1.0 - 1.0 / (9.0 * o) - z / (3.0 * o.sqrt());
        (o * term * term * term / expected).max(0.0)
    };
    let upper = {
        let o1 = o + 1.0;
        let term = 1.0 - 1.0 / (9.0 * o1) + z / (3.0 * o1.sqrt());
        o1 * term * term * term / expected
    };

    Ok(IntervalEstimate::new(o / expected, lower, upper, level.value()))
}
