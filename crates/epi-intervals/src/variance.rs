//! Variance and standard-deviation confidence intervals

use epi_core::{ConfidenceLevel, Error, IntervalEstimate, Result};
use epi_distributions::chi_squared;
use serde::{Deserialize, Serialize};

/// Interval estimates for a sample variance and standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceIntervals {
    /// Interval for the population variance
    pub variance: IntervalEstimate,
    /// Interval for the population standard deviation
    pub sd: IntervalEstimate,
}

/// Chi-square interval for a variance from an observed standard deviation
///
/// Uses `[(n-1)s² / chi2(a/2), (n-1)s² / chi2(1-a/2)]` with upper-tail
/// critical values. Requires `n >= 2` and `sd >= 0`. At `n = 2` with high
/// confidence the approximated lower-tail quantile collapses to zero and
/// the upper bound becomes infinite, the documented degenerate boundary.
pub fn interval(sd: f64, n: u64, level: ConfidenceLevel) -> Result<VarianceIntervals> {
    if n < 2 {
        return Err(Error::InvalidParameter(format!(
            "Variance interval requires n >= 2, got {n}"
        )));
    }
    if !sd.is_finite() || sd < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Standard deviation must be finite and non-negative, got {sd}"
        )));
    }

    let df = (n - 1) as f64;
    let s2 = sd * sd;
    let tail = level.tail_probability();
    let conf = level.value();

    let var_lower = df * s2 / chi_squared::critical(tail, df);
    let var_upper = df * s2 / chi_squared::critical(1.0 - tail, df);

    Ok(VarianceIntervals {
        variance: IntervalEstimate::new(s2, var_lower, var_upper, conf),
        sd: IntervalEstimate::new(sd, var_lower.sqrt(), var_upper.sqrt(), conf),
    })
}
