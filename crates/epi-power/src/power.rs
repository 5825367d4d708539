//! Achieved power for a fixed sample size
//!
//! These run the sample-size formulas in the inverse direction: instead of
//! solving for `n`, they evaluate the Normal CDF at the non-centrality
//! term implied by the design. Results are clamped to `[0, 1]` even when
//! extrapolated parameters push the non-centrality term far outside
//! realistic ranges.

use crate::validate;
use epi_core::{Error, Result};
use epi_distributions::normal;
use tracing::instrument;

/// Power of a two-sided two-proportion comparison with `n1` per group one
/// and `n2 = ratio·n1`
#[instrument]
pub fn power_two_proportions(
    p1: f64,
    p2: f64,
    n1: u64,
    ratio: f64,
    alpha: f64,
) -> Result<f64> {
    validate::probability("p1", p1)?;
    validate::probability("p2", p2)?;
    validate::probability("alpha", alpha)?;
    validate::positive("ratio", ratio)?;
    if n1 == 0 {
        return Err(Error::InvalidParameter(
            "Group size must be positive".to_string(),
        ));
    }

    let nf1 = n1 as f64;
    let nf2 = ratio * nf1;
    let se = (p1 * (1.0 - p1) / nf1 + p2 * (1.0 - p2) / nf2).sqrt();
    let z_a = normal::quantile(1.0 - alpha / 2.0);

    Ok(normal::cdf((p1 - p2).abs() / se - z_a).clamp(0.0, 1.0))
}

/// Power of a two-sided two-mean comparison with `n1` per group one and
/// `n2 = ratio·n1`
#[instrument]
pub fn power_two_means(
    sd1: f64,
    sd2: f64,
    delta: f64,
    n1: u64,
    ratio: f64,
    alpha: f64,
) -> Result<f64> {
    validate::probability("alpha", alpha)?;
    validate::positive("ratio", ratio)?;
    if !sd1.is_finite() || !sd2.is_finite() || sd1 < 0.0 || sd2 < 0.0 || (sd1 == 0.0 && sd2 == 0.0)
    {
        return Err(Error::InvalidParameter(
            "Standard deviations must be non-negative and not both zero".to_string(),
        ));
    }
    if !delta.is_finite() {
        return Err(Error::InvalidParameter("delta must be finite".to_string()));
    }
    if n1 == 0 {
        return Err(Error::InvalidParameter(
            "Group size must be positive".to_string(),
        ));
    }

    let nf1 = n1 as f64;
    let se = (sd1 * sd1 / nf1 + sd2 * sd2 / (ratio * nf1)).sqrt();
    let z_a = normal::quantile(1.0 - alpha / 2.0);

    Ok(normal::cdf(delta.abs() / se - z_a).clamp(0.0, 1.0))
}
