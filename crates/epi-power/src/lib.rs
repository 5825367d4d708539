//! Closed-form sample-size and power solvers
//!
//! Every solver is an algebraic inversion of a Normal-approximation test:
//! critical values come from `epi-distributions`, the target effect size
//! enters the denominator, and the resulting real-valued size is always
//! rounded up (a required sample size is never under-provisioned).
//!
//! Degenerate designs with no finite answer (zero effect, an unattainable
//! non-inferiority margin) are reported as
//! [`epi_core::Error::NotComputable`]; everything else returns a plain
//! [`SampleSize`] or a power in `[0, 1]`, keeping parameter sweeps such as
//! power curves free of per-point error handling.
//!
//! # Examples
//!
//! ```rust
//! use epi_power::{power_two_proportions, two_proportions};
//!
//! let size = two_proportions(0.3, 0.5, 0.05, 0.8, 1.0).unwrap();
//! assert_eq!(size.n, 93);
//!
//! let achieved = power_two_proportions(0.3, 0.5, size.n, 1.0, 0.05).unwrap();
//! assert!(achieved >= 0.8);
//! ```

mod cluster;
mod means;
mod power;
mod proportions;
mod types;
mod validate;

// Re-exports
pub use cluster::cluster_adjusted;
pub use means::{paired_means, two_means};
pub use power::{power_two_means, power_two_proportions};
pub use proportions::{non_inferiority_proportions, two_proportions};
pub use types::{ClusterSampleSize, SampleSize};
