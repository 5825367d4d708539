//! Poisson rate confidence intervals
//!
//! Exact bounds come from the chi-square relation
//! `[chi2(1 - a/2, 2k) / 2T, chi2(a/2, 2k + 2) / 2T]` (upper-tail critical
//! values); Byar's cube-root formula is the fast alternative. With the
//! Wilson-Hilferty chi-square approximation in this workspace the two are
//! algebraically identical; an exact chi-square inverse would separate
//! them, so both entry points are kept.

use epi_core::{ConfidenceLevel, Error, IntervalEstimate, Result};
use epi_distributions::{chi_squared, normal};
use serde::{Deserialize, Serialize};

/// Exact and approximate interval estimates for one observed rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoissonRateIntervals {
    /// Observed rate, events per unit person-time
    pub rate: f64,
    /// Chi-square (exact-relation) bounds
    pub exact: IntervalEstimate,
    /// Byar's approximation
    pub byar: IntervalEstimate,
}

/// Confidence interval for a Poisson rate from `events` over `person_time`
///
/// `person_time` must be positive. `events = 0` pins the lower bound at
/// zero (one-sided degenerate case, not an error).
pub fn rate_interval(
    events: u64,
    person_time: f64,
    level: ConfidenceLevel,
) -> Result<PoissonRateIntervals> {
    if !person_time.is_finite() || person_time <= 0.0 {
        return Err(Error::non_positive("person-time", person_time));
    }

    let k = events as f64;
    let rate = k / person_time;
    let tail = level.tail_probability();
    let conf = level.value();

    let exact_lower = if events == 0 {
        0.0
    } else {
        chi_squared::critical(1.0 - tail, 2.0 * k) / (2.0 * person_time)
    };
    let exact_upper = chi_squared::critical(tail, 2.0 * k + 2.0) / (2.0 * person_time);

    let z = normal::z_critical(level);
    let byar_lower = if events == 0 {
        0.0
    } else {
        let term = 1.0 - 1.0 / (9.0 * k) - z / (3.0 * k.sqrt());
        k * term * term * term / person_time
    };
    let byar_upper = {
        let k1 = k + 1.0;
        let term = 1.0 - 1.0 / (9.0 * k1) + z / (3.0 * k1.sqrt());
        k1 * term * term * term / person_time
    };

    Ok(PoissonRateIntervals {
        rate,
        exact: IntervalEstimate::new(rate, exact_lower.max(0.0), exact_upper, conf),
        byar: IntervalEstimate::new(rate, byar_lower.max(0.0), byar_upper, conf),
    })
}
