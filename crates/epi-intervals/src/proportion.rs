//! Binomial proportion confidence intervals
//!
//! Four interval estimates from one `(successes, n)` pair. The Wald
//! interval is reported as computed and may escape `[0, 1]` near the
//! boundaries; Wilson, Wilson with continuity correction, and
//! Clopper-Pearson are guaranteed to contain the point estimate within
//! `[0, 1]`. Clopper-Pearson is exact (conservative) and therefore at
//! least as wide as Wilson.

use epi_core::{ConfidenceLevel, Error, IntervalEstimate, Result};
use epi_distributions::{fisher_f, normal};
use serde::{Deserialize, Serialize};

/// The four proportion interval estimates for one observed proportion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionIntervals {
    /// Simple normal approximation, `p ± z·sqrt(p(1-p)/n)`
    pub wald: IntervalEstimate,
    /// Score interval (closed-form solution of the score quadratic)
    pub wilson: IntervalEstimate,
    /// Newcombe's continuity-corrected score interval
    pub wilson_cc: IntervalEstimate,
    /// Exact interval via the Beta-F relation
    pub clopper_pearson: IntervalEstimate,
}

/// Compute all four proportion intervals
///
/// `n` must be positive and `successes <= n`. At the boundaries the exact
/// interval follows the defined one-sided policy: `lower = 0` when
/// `successes = 0` and `upper = 1` when `successes = n`.
pub fn intervals(successes: u64, n: u64, level: ConfidenceLevel) -> Result<ProportionIntervals> {
    if n == 0 {
        return Err(Error::InvalidParameter(
            "Proportion interval requires at least one trial".to_string(),
        ));
    }
    if successes > n {
        return Err(Error::InvalidInput(format!(
            "Successes ({successes}) exceed trials ({n})"
        )));
    }

    let x = successes as f64;
    let nf = n as f64;
    let p_hat = x / nf;
    let z = normal::z_critical(level);
    let conf = level.value();

    Ok(ProportionIntervals {
        wald: wald(p_hat, nf, z, conf),
        wilson: wilson(p_hat, nf, z, conf),
        wilson_cc: wilson_cc(p_hat, nf, z, conf),
        clopper_pearson: clopper_pearson(successes, n, level),
    })
}

fn wald(p_hat: f64, n: f64, z: f64, conf: f64) -> IntervalEstimate {
    let se = (p_hat * (1.0 - p_hat) / n).sqrt();
    IntervalEstimate::new(p_hat, p_hat - z * se, p_hat + z * se, conf)
}

fn wilson(p_hat: f64, n: f64, z: f64, conf: f64) -> IntervalEstimate {
    let z2 = z * z;
    let center = p_hat + z2 / (2.0 * n);
    let half = z * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt();
    let denom = 1.0 + z2 / n;

    // The closed form lands exactly on 0/1 at the boundaries; pin them so
    // rounding noise cannot leak outside the unit interval
    let lower = if p_hat == 0.0 {
        0.0
    } else {
        ((center - half) / denom).max(0.0)
    };
    let upper = if p_hat == 1.0 {
        1.0
    } else {
        ((center + half) / denom).min(1.0)
    };
    IntervalEstimate::new(p_hat, lower, upper, conf)
}

fn wilson_cc(p_hat: f64, n: f64, z: f64, conf: f64) -> IntervalEstimate {
    let z2 = z * z;
    let q_hat = 1.0 - p_hat;
    let denom = 2.0 * (n + z2);

    // Newcombe's corrected closed form; the lower and upper radicands are
    // asymmetric. Radicands are floored at zero, which only engages for
    // very small n where the correction overshoots.
    let lower = if p_hat == 0.0 {
        0.0
    } else {
        let radicand = (z2 - 2.0 - 1.0 / n + 4.0 * p_hat * (n * q_hat + 1.0)).max(0.0);
        ((2.0 * n * p_hat + z2 - 1.0 - z * radicand.sqrt()) / denom).max(0.0)
    };
    let upper = if p_hat == 1.0 {
        1.0
    } else {
        let radicand = (z2 + 2.0 - 1.0 / n + 4.0 * p_hat * (n * q_hat - 1.0)).max(0.0);
        ((2.0 * n * p_hat + z2 + 1.0 + z * radicand.sqrt()) / denom).min(1.0)
    };

    IntervalEstimate::new(p_hat, lower, upper, conf)
}

fn clopper_pearson(successes: u64, n: u64, level: ConfidenceLevel) -> IntervalEstimate {
    let x = successes as f64;
    let nf = n as f64;
    let p_hat = x / nf;
    let tail = level.tail_probability();

    let lower = if successes == 0 {
        0.0
    } else {
        let f = fisher_f::critical(tail, 2.0 * (nf - x + 1.0), 2.0 * x);
        x / (x + (nf - x + 1.0) * f)
    };
    let upper = if successes == n {
        1.0
    } else {
        let f = fisher_f::critical(tail, 2.0 * (x + 1.0), 2.0 * (nf - x));
        (x + 1.0) * f / (nf - x + (x + 1.0) * f)
    };

    IntervalEstimate::new(p_hat, lower, upper, level.value())
}
