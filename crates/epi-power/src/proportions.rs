//! Sample size for comparing proportions

use crate::types::SampleSize;
use crate::validate;
use epi_core::{Error, Result};
use epi_distributions::normal;
use tracing::instrument;

/// Sample size for two independent proportions
///
/// Pooled variance under the null, unpooled under the alternative:
/// `n1 = [z_a·sqrt((1 + 1/r)·p̄q̄) + z_b·sqrt(p1 q1 + p2 q2 / r)]² / (p1 - p2)²`
/// with `p̄` the allocation-weighted pooled proportion and `r = n2/n1`.
#[instrument]
pub fn two_proportions(
    p1: f64,
    p2: f64,
    alpha: f64,
    power: f64,
    ratio: f64,
) -> Result<SampleSize> {
    validate::probability("p1", p1)?;
    validate::probability("p2", p2)?;
    validate::probability("alpha", alpha)?;
    validate::probability("power", power)?;
    validate::positive("ratio", ratio)?;
    if p1 == p2 {
        return Err(Error::NotComputable(
            "Sample size is unbounded for identical proportions".to_string(),
        ));
    }

    let z_a = normal::quantile(1.0 - alpha / 2.0);
    let z_b = normal::quantile(power);
    let p_bar = (p1 + ratio * p2) / (1.0 + ratio);
    let q_bar = 1.0 - p_bar;
    let delta = p1 - p2;

    let null_term = z_a * ((1.0 + 1.0 / ratio) * p_bar * q_bar).sqrt();
    let alt_term = z_b * (p1 * (1.0 - p1) + p2 * (1.0 - p2) / ratio).sqrt();
    let n1 = (null_term + alt_term).powi(2) / (delta * delta);

    Ok(SampleSize::two_group(n1, ratio))
}

/// Sample size for a non-inferiority comparison of proportions
///
/// One-sided `z_a`; the margin enters the denominator as
/// `p_test - p_standard - margin`, so a margin of `-0.10` allows the test
/// arm to be up to ten points worse. A non-positive denominator means the
/// assumed difference has consumed the whole margin and no finite sample
/// size exists; that is reported as not computable rather than returned as
/// a negative size.
#[instrument]
pub fn non_inferiority_proportions(
    p_test: f64,
    p_standard: f64,
    margin: f64,
    alpha: f64,
    power: f64,
) -> Result<SampleSize> {
    validate::probability("p_test", p_test)?;
    validate::probability("p_standard", p_standard)?;
    validate::probability("alpha", alpha)?;
    validate::probability("power", power)?;
    if !margin.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "margin must be finite, got {margin}"
        )));
    }

    let denom = p_test - p_standard - margin;
    if denom <= 0.0 {
        return Err(Error::NotComputable(format!(
            "Margin {margin} is not attainable for difference {}",
            p_test - p_standard
        )));
    }

    let z_a = normal::quantile(1.0 - alpha);
    let z_b = normal::quantile(power);
    let variance = p_test * (1.0 - p_test) + p_standard * (1.0 - p_standard);
    let n1 = (z_a + z_b).powi(2) * variance / (denom * denom);

    Ok(SampleSize::two_group(n1, 1.0))
}
