//! Proportion, rate, and variance interval estimators
//!
//! Each estimator composes the closed-form distribution approximations
//! from `epi-distributions` into the standard epidemiological interval
//! formulas. Every function is pure and stateless: validated numeric
//! parameters in, an immutable result record out.
//!
//! # Examples
//!
//! ```rust
//! use epi_core::ConfidenceLevel;
//! use epi_intervals::proportion;
//!
//! let all = proportion::intervals(30, 100, ConfidenceLevel::NINETY_FIVE).unwrap();
//! println!("Wilson: {}", all.wilson);
//! println!("Exact:  {}", all.clopper_pearson);
//! ```

pub mod poisson;
pub mod proportion;
pub mod variance;

// Re-exports
pub use poisson::{rate_interval, PoissonRateIntervals};
pub use proportion::{intervals as proportion_intervals, ProportionIntervals};
pub use variance::{interval as variance_interval, VarianceIntervals};
