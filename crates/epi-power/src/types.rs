//! Result records for the sample-size solvers

use serde::{Deserialize, Serialize};

/// A required sample size
///
/// Sizes are always the ceiling of the real-valued formula; a required
/// sample size is never under-provisioned by rounding down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSize {
    /// Size of the first group (or number of pairs for paired designs)
    pub n: u64,
    /// Combined size across groups, when the design has more than one
    pub n_total: Option<u64>,
}

impl SampleSize {
    pub(crate) fn single(n: f64) -> Self {
        Self {
            n: n.ceil() as u64,
            n_total: None,
        }
    }

    pub(crate) fn two_group(n1: f64, ratio: f64) -> Self {
        let n1 = n1.ceil() as u64;
        let n2 = (ratio * n1 as f64).ceil() as u64;
        Self {
            n: n1,
            n_total: Some(n1 + n2),
        }
    }
}

/// A cluster-randomized design adjustment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterSampleSize {
    /// Variance inflation factor, `1 + (m - 1)·ICC`
    pub design_effect: f64,
    /// Individually-randomized size the adjustment started from
    pub n_individual: u64,
    /// Inflated number of individuals
    pub n_adjusted: u64,
    /// Number of clusters of the given size needed to reach it
    pub clusters: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ceils() {
        assert_eq!(SampleSize::single(92.001).n, 93);
        assert_eq!(SampleSize::single(93.0).n, 93);
    }

    #[test]
    fn test_two_group_totals() {
        let size = SampleSize::two_group(92.3, 1.0);
        assert_eq!(size.n, 93);
        assert_eq!(size.n_total, Some(186));

        let unequal = SampleSize::two_group(50.0, 2.0);
        assert_eq!(unequal.n, 50);
        assert_eq!(unequal.n_total, Some(150));
    }
}
