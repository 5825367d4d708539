//! Closed-form distribution approximations for interval estimation
//!
//! This crate provides the quantiles, CDFs, and p-values of the Normal,
//! Student-t, chi-square, and F distributions as pure, stateless functions
//! of `(probability, degrees of freedom)`. Everything is a closed-form
//! rational or asymptotic approximation, chosen deliberately so the
//! estimation layers above carry no dependency on a full special-function
//! implementation (incomplete beta/gamma).
//!
//! # Accuracy
//!
//! Precision targets are "good enough for interval estimation at typical
//! sample sizes", not metrological accuracy:
//!
//! - Normal CDF: absolute error below 1.5e-7 (Abramowitz-Stegun 7.1.26)
//! - Normal quantile: rational approximation, error well under 1e-3 at the
//!   confidence levels used for intervals
//! - t critical value: Cornish-Fisher expansion, within a few percent at
//!   df = 2 and better than 1e-3 by df = 30
//! - Chi-square: Wilson-Hilferty transform, a few parts in a thousand at
//!   moderate df, degrading for df = 1 in the far lower tail
//! - F quantile: Paulson-type approximation, a few percent for small
//!   denominator df
//!
//! The reference-accuracy test suite characterizes each envelope against an
//! independent implementation. Callers that need tighter guarantees than
//! these should not use this crate.
//!
//! # Degenerate-input policy
//!
//! Non-positive degrees of freedom return a documented sentinel (`0.0` for
//! critical values, `1.0` for p-values) rather than an error, so parameter
//! sweeps such as power curves stay free of per-point error handling.
//! Probabilities are expected in `(0, 1)`; that contract belongs to the
//! caller-facing layer (see `epi_core::ConfidenceLevel`), not to these
//! mathematical primitives.

pub mod chi_squared;
pub mod fisher_f;
pub mod normal;
pub mod student_t;

pub use student_t::TailProbabilities;
