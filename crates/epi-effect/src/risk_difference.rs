//! Risk difference and number needed to treat
//!
//! Risks here always come from the uncorrected table, even when a zero
//! cell exists: the difference and its Wald standard error stay defined as
//! long as both rows are non-empty, and this family deliberately does not
//! share the ratio measures' continuity-correction behavior.

use epi_core::{ConfidenceLevel, Error, IntervalEstimate, Result, Table2x2};
use epi_distributions::normal;
use serde::{Deserialize, Serialize};

/// Risk difference with its interval and the number needed to treat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskDifference {
    /// The arithmetic difference of row risks with its Wald interval
    pub interval: IntervalEstimate,
    /// `ceil(1 / |difference|)`; infinite when the risks are identical
    pub nnt: f64,
}

/// Risk difference `r1 - r2` with Normal-approximation interval
///
/// Requires both rows to be non-empty; reported as not computable
/// otherwise.
pub fn risk_difference(table: &Table2x2, level: ConfidenceLevel) -> Result<RiskDifference> {
    if table.n1() == 0.0 || table.n2() == 0.0 {
        return Err(Error::NotComputable(
            "risk difference is undefined for a table with an empty row".to_string(),
        ));
    }

    let r1 = table.risk_exposed();
    let r2 = table.risk_unexposed();
    let rd = r1 - r2;
    let se = (r1 * (1.0 - r1) / table.n1() + r2 * (1.0 - r2) / table.n2()).sqrt();
    let z = normal::z_critical(level);

    let nnt = if rd == 0.0 {
        f64::INFINITY
    } else {
        (1.0 / rd.abs()).ceil()
    };

    Ok(RiskDifference {
        interval: IntervalEstimate::new(rd, rd - z * se, rd + z * se, level.value()),
        nnt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn level95() -> ConfidenceLevel {
        ConfidenceLevel::NINETY_FIVE
    }

    #[test]
    fn test_reference_table() {
        let table = Table2x2::from_counts(20, 80, 10, 90);
        let rd = risk_difference(&table, level95()).unwrap();

        assert_abs_diff_eq!(rd.interval.estimate, 0.10, epsilon = 1e-12);
        // SE = sqrt(0.2·0.8/100 + 0.1·0.9/100)
        assert_abs_diff_eq!(rd.interval.lower, 0.0020, epsilon = 1e-3);
        assert_abs_diff_eq!(rd.interval.upper, 0.1980, epsilon = 1e-3);
        assert_eq!(rd.nnt, 10.0);
    }

    #[test]
    fn test_identical_risks() {
        let table = Table2x2::from_counts(10, 90, 10, 90);
        let rd = risk_difference(&table, level95()).unwrap();

        assert_eq!(rd.interval.estimate, 0.0);
        assert!(rd.nnt.is_infinite());
        assert!(rd.interval.contains(0.0));
    }

    #[test]
    fn test_nnt_rounds_up() {
        // RD = 0.15 -> 1/0.15 = 6.67 -> NNT 7, never 6
        let table = Table2x2::from_counts(30, 70, 15, 85);
        let rd = risk_difference(&table, level95()).unwrap();
        assert_eq!(rd.nnt, 7.0);
    }

    #[test]
    fn test_zero_cell_uses_uncorrected_risks() {
        let table = Table2x2::from_counts(0, 100, 10, 90);
        let rd = risk_difference(&table, level95()).unwrap();

        // r1 is exactly 0, not 0.5/100.5
        assert_abs_diff_eq!(rd.interval.estimate, -0.10, epsilon = 1e-12);
        assert_eq!(rd.nnt, 10.0);
    }

    #[test]
    fn test_empty_row_not_computable() {
        let table = Table2x2::from_counts(0, 0, 10, 90);
        assert!(risk_difference(&table, level95()).is_err());
    }

    #[test]
    fn test_protective_direction() {
        let table = Table2x2::from_counts(5, 95, 20, 80);
        let rd = risk_difference(&table, level95()).unwrap();
        assert!(rd.interval.estimate < 0.0);
        assert!(rd.interval.upper < 0.0, "interval excludes the null");
    }
}
