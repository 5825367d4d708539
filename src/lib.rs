//! Epidemiological statistics toolkit
//!
//! A workspace facade re-exporting the four layers of the engine:
//!
//! - [`core`]: shared value types ([`Table2x2`], [`ConfidenceLevel`],
//!   [`IntervalEstimate`]) and the unified error type
//! - [`distributions`]: closed-form Normal/t/chi-square/F approximations
//! - [`intervals`]: proportion, Poisson rate, and variance intervals
//! - [`effect`]: 2x2-table effect measures and the independence test
//! - [`power`]: sample-size and power solvers
//!
//! Every function in the engine is pure, synchronous, and stateless:
//! callers hand in validated numeric parameters and receive immutable
//! result records. Concurrent callers need no coordination, and there is
//! no hidden cache or global anywhere in the tree.
//!
//! # Example
//!
//! ```rust
//! use epi_stats::{ConfidenceLevel, Table2x2};
//!
//! let table = Table2x2::from_counts(20, 80, 10, 90);
//! let rr = epi_stats::effect::risk_ratio(&table, ConfidenceLevel::NINETY_FIVE).unwrap();
//! assert!((rr.estimate - 2.0).abs() < 0.01);
//! ```

pub use epi_core as core;
pub use epi_distributions as distributions;
pub use epi_effect as effect;
pub use epi_intervals as intervals;
pub use epi_power as power;

// The shared vocabulary types, re-exported at the top level
pub use epi_core::{ConfidenceLevel, Error, IntervalEstimate, Result, Table2x2};
