//! Student-t distribution approximations
//!
//! The critical value uses a Cornish-Fisher style expansion around the
//! Normal quantile; the p-value uses the closed-form trigonometric
//! recursion for the t CDF, which is exact for integer degrees of freedom.
//! Accuracy of the critical value degrades below roughly 5 degrees of
//! freedom (a few percent at df = 2), which is acceptable for interval
//! estimation at typical sample sizes.

use crate::normal;
use epi_core::ConfidenceLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One-sided and two-sided tail probabilities for a test statistic
///
/// `lower` and `upper` are the left and right tail probabilities and sum to
/// one; `two_sided` is twice the smaller tail. All values are clamped to
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailProbabilities {
    /// Two-sided p-value, `2 * min(lower, upper)`
    pub two_sided: f64,
    /// Left tail probability, `P(T <= t)`
    pub lower: f64,
    /// Right tail probability, `P(T >= t)`
    pub upper: f64,
}

impl TailProbabilities {
    fn from_lower_tail(lower: f64) -> Self {
        let lower = lower.clamp(0.0, 1.0);
        let upper = 1.0 - lower;
        Self {
            two_sided: (2.0 * lower.min(upper)).clamp(0.0, 1.0),
            lower,
            upper,
        }
    }
}

/// Two-sided critical value of the t distribution
///
/// For `df > 500` the t quantile is indistinguishable from the Normal one
/// at the tolerances used here, so the Normal critical value is returned
/// directly. `df <= 0` returns `0.0`; this is a documented degenerate-input
/// sentinel, kept composable for parameter sweeps, not an error.
pub fn critical(level: ConfidenceLevel, df: f64) -> f64 {
    if df <= 0.0 {
        return 0.0;
    }

    let z = normal::z_critical(level);
    if df > 500.0 {
        debug!(df, "degenerating t critical value to normal");
        return z;
    }

    // Cornish-Fisher expansion in powers of 1/df (Abramowitz-Stegun 26.7.5)
    let z2 = z * z;
    let g1 = z * (z2 + 1.0) / 4.0;
    let g2 = z * (5.0 * z2 * z2 + 16.0 * z2 + 3.0) / 96.0;
    let g3 = z * (3.0 * z2 * z2 * z2 + 19.0 * z2 * z2 + 17.0 * z2 - 15.0) / 384.0;

    z + g1 / df + g2 / (df * df) + g3 / (df * df * df)
}

/// Tail probabilities for an observed t statistic
///
/// For `df > 100` the Normal tail is used. Otherwise the exact closed-form
/// trigonometric recursion applies, with fractional `df` rounded to the
/// nearest integer. `df <= 0` yields the degenerate result
/// `{two_sided: 1, lower: 0.5, upper: 0.5}`.
pub fn p_value(t: f64, df: f64) -> TailProbabilities {
    if df <= 0.0 {
        return TailProbabilities {
            two_sided: 1.0,
            lower: 0.5,
            upper: 0.5,
        };
    }

    if df > 100.0 {
        debug!(df, "using normal approximation for t p-value");
        return TailProbabilities::from_lower_tail(normal::cdf(t));
    }

    let n = df.round().max(1.0) as u64;
    let central = central_probability(t.abs(), n);
    let tail = (1.0 - central) / 2.0;
    let lower = if t >= 0.0 { 1.0 - tail } else { tail };
    TailProbabilities::from_lower_tail(lower)
}

/// `P(|T| <= t)` for integer degrees of freedom, `t >= 0`
///
/// Odd df uses the arctangent base term plus a cosine-weighted polynomial
/// sum; even df uses a pure cosine-weighted sum.
fn central_probability(t: f64, df: u64) -> f64 {
    let theta = (t / (df as f64).sqrt()).atan();
    let cos2 = theta.cos() * theta.cos();

    let prob = if df % 2 == 1 {
        let mut sum = 0.0;
        if df >= 3 {
            let mut term = theta.cos();
            sum += term;
            let mut j = 3;
            while j <= df - 2 {
                term *= cos2 * (j - 1) as f64 / j as f64;
                sum += term;
                j += 2;
            }
        }
        (theta + theta.sin() * sum) * 2.0 / std::f64::consts::PI
    } else {
        let mut sum = 1.0;
        let mut term = 1.0;
        let mut j = 2;
        while j <= df - 2 {
            term *= cos2 * (j - 1) as f64 / j as f64;
            sum += term;
            j += 2;
        }
        theta.sin() * sum
    };

    prob.clamp(0.0, 1.0)
}
