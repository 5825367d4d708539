//! F distribution quantile approximation
//!
//! A single consumer exists in this workspace: the Clopper-Pearson exact
//! proportion interval, via the Beta-F relation. The approximation below is
//! the Paulson-type formula built from a Normal quantile with a harmonic
//! mean of the two degrees of freedom and a variance correction
//! (Abramowitz-Stegun 26.6.16). Its relative error is a few percent for
//! small denominator df and well under one percent once both df exceed
//! about 20; the reference-accuracy tests characterize this envelope
//! empirically before anything new is built on it.

use crate::normal;

/// Upper-tail F critical value: the `f` with `P(F > f) = p`
///
/// `d1` is the numerator and `d2` the denominator degrees of freedom;
/// either being non-positive returns `0.0` (degenerate-input sentinel).
pub fn critical(p: f64, d1: f64, d2: f64) -> f64 {
    if d1 <= 0.0 || d2 <= 0.0 {
        return 0.0;
    }

    let z = normal::quantile(1.0 - p);
    let lambda = (z * z - 3.0) / 6.0;
    let h = 2.0 / (1.0 / d1 + 1.0 / d2);
    let w = z * (h + lambda).sqrt() / h
        - (1.0 / d1 - 1.0 / d2) * (lambda + 5.0 / 6.0 - 2.0 / (3.0 * h));
    (2.0 * w).exp()
}
