//! Sample size for comparing means

use crate::types::SampleSize;
use crate::validate;
use epi_core::{Error, Result};
use epi_distributions::normal;
use tracing::instrument;

/// Sample size for two independent means
///
/// `n1 = (z_a + z_b)²·(sd1² + sd2²/ratio) / delta²`, where `ratio` is
/// `n2/n1`. A zero difference has no finite answer and is reported as not
/// computable.
#[instrument]
pub fn two_means(
    sd1: f64,
    sd2: f64,
    delta: f64,
    alpha: f64,
    power: f64,
    ratio: f64,
) -> Result<SampleSize> {
    validate::probability("alpha", alpha)?;
    validate::probability("power", power)?;
    validate::positive("ratio", ratio)?;
    if !sd1.is_finite() || !sd2.is_finite() || sd1 < 0.0 || sd2 < 0.0 {
        return Err(Error::InvalidParameter(
            "Standard deviations must be finite and non-negative".to_string(),
        ));
    }
    if sd1 == 0.0 && sd2 == 0.0 {
        return Err(Error::InvalidParameter(
            "At least one standard deviation must be positive".to_string(),
        ));
    }
    if delta == 0.0 || !delta.is_finite() {
        return Err(Error::NotComputable(
            "Sample size is unbounded for a zero mean difference".to_string(),
        ));
    }

    let z_a = normal::quantile(1.0 - alpha / 2.0);
    let z_b = normal::quantile(power);
    let z = z_a + z_b;
    let n1 = z * z * (sd1 * sd1 + sd2 * sd2 / ratio) / (delta * delta);

    Ok(SampleSize::two_group(n1, ratio))
}

/// Sample size for paired means (number of pairs)
///
/// `sd_diff` is the standard deviation of the within-pair differences.
#[instrument]
pub fn paired_means(sd_diff: f64, delta: f64, alpha: f64, power: f64) -> Result<SampleSize> {
    validate::probability("alpha", alpha)?;
    validate::probability("power", power)?;
    validate::positive("sd of differences", sd_diff)?;
    if delta == 0.0 || !delta.is_finite() {
        return Err(Error::NotComputable(
            "Sample size is unbounded for a zero mean difference".to_string(),
        ));
    }

    let z = normal::quantile(1.0 - alpha / 2.0) + normal::quantile(power);
    let n = z * z * sd_diff * sd_diff / (delta * delta);

    Ok(SampleSize::single(n))
}
