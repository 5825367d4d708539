//! Epidemiological effect-measure estimators
//!
//! This crate provides the classical 2x2-table effect measures: risk
//! ratio, odds ratio, risk difference with number needed to treat, the
//! standardized mortality/incidence ratio, and the chi-square test of
//! independence.
//!
//! # Continuity correction
//!
//! Tables with a single zero cell are handled with the Haldane-Anscombe
//! correction (0.5 added to every cell) for the ratio measures, while the
//! risk difference always computes from the uncorrected table. Tables with
//! an empty row or column are reported as [`epi_core::Error::NotComputable`]
//! rather than producing NaN or infinite estimates.
//!
//! # Examples
//!
//! ```rust
//! use epi_core::{ConfidenceLevel, Table2x2};
//! use epi_effect::{odds_ratio, risk_ratio};
//!
//! let table = Table2x2::from_counts(20, 80, 10, 90);
//! let rr = risk_ratio(&table, ConfidenceLevel::NINETY_FIVE).unwrap();
//! let or = odds_ratio(&table, ConfidenceLevel::NINETY_FIVE).unwrap();
//! assert!(or.estimate > rr.estimate);
//! ```

mod correction;
mod independence;
mod odds_ratio;
mod risk_difference;
mod risk_ratio;
mod standardized_ratio;

// Re-exports
pub use independence::{chi_square_test, ChiSquareTest, Correction};
pub use odds_ratio::odds_ratio;
pub use risk_difference::{risk_difference, RiskDifference};
pub use risk_ratio::risk_ratio;
pub use standardized_ratio::standardized_ratio;
