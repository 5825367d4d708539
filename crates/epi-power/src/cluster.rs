//! Cluster-randomized design adjustment

use crate::types::ClusterSampleSize;
use epi_core::{Error, Result};
use tracing::instrument;

/// Inflate an individually-randomized sample size for cluster randomization
///
/// The design effect `1 + (m - 1)·ICC` multiplies the individual size;
/// the cluster count is the ceiling of the inflated size over the cluster
/// size. `icc` must lie in `[0, 1]` and clusters must hold at least one
/// individual.
#[instrument]
pub fn cluster_adjusted(
    n_individual: u64,
    cluster_size: u64,
    icc: f64,
) -> Result<ClusterSampleSize> {
    if n_individual == 0 {
        return Err(Error::InvalidParameter(
            "Individually-randomized size must be positive".to_string(),
        ));
    }
    if cluster_size == 0 {
        return Err(Error::InvalidParameter(
            "Cluster size must be at least 1".to_string(),
        ));
    }
    if !icc.is_finite() || !(0.0..=1.0).contains(&icc) {
        return Err(Error::InvalidParameter(format!(
            "ICC must be in [0, 1], got {icc}"
        )));
    }

    let m = cluster_size as f64;
    let design_effect = 1.0 + (m - 1.0) * icc;
    let n_adjusted = (n_individual as f64 * design_effect).ceil() as u64;
    let clusters = (n_adjusted as f64 / m).ceil() as u64;

    Ok(ClusterSampleSize {
        design_effect,
        n_individual,
        n_adjusted,
        clusters,
    })
}
