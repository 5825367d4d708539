//! Risk ratio (relative risk)
//!
//! Point estimate is the ratio of row risks; the confidence interval is
//! built on the log scale with the delta-method standard error and
//! back-transformed (log-Taylor-series interval).

use crate::correction::ratio_table;
use epi_core::{ConfidenceLevel, Error, IntervalEstimate, Result, Table2x2};
use epi_distributions::normal;

/// Risk ratio with log-transform confidence interval
///
/// A table with an empty row or column is reported as not computable; a
/// single zero cell triggers the Haldane-Anscombe correction.
pub fn risk_ratio(table: &Table2x2, level: ConfidenceLevel) -> Result<IntervalEstimate> {
    if table.has_zero_margin() {
        return Err(Error::zero_margin("risk ratio"));
    }

    let t = ratio_table(table);
    let rr = t.risk_exposed() / t.risk_unexposed();
    let se = (1.0 / t.a - 1.0 / t.n1() + 1.0 / t.c - 1.0 / t.n2()).sqrt();
    let z = normal::z_critical(level);
    let log_rr = rr.ln();

    Ok(IntervalEstimate::new(
        rr,
        (log_rr - z * se).exp(),
        (log_rr + z * se).exp(),
        level.value(),
    ))
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
        // 20/100 exposed vs 10/100 unexposed
        let table = Table2x2::from_counts(20, 80, 10, 90);
        let rr = risk_ratio(&table, level95()).unwrap();

        assert_abs_diff_eq!(rr.estimate, 2.00, epsilon = 1e-2);
        assert_abs_diff_eq!(rr.lower, 0.987, epsilon = 1e-2);
        assert_abs_diff_eq!(rr.upper, 4.054, epsilon = 1e-2);
        assert!(rr.contains(rr.estimate));
    }

    #[test]
    fn test_null_value_inside_interval_for_weak_effect() {
        let table = Table2x2::from_counts(11, 89, 10, 90);
        let rr = risk_ratio(&table, level95()).unwrap();
        assert!(rr.contains(1.0));
    }

    #[test]
    fn test_zero_cell_is_corrected() {
        let table = Table2x2::from_counts(0, 100, 10, 90);
        let rr = risk_ratio(&table, level95()).unwrap();

        // Corrected table: 0.5/100.5 vs 10.5/100.5
        assert!(rr.estimate > 0.0 && rr.estimate < 1.0);
        assert!(rr.lower > 0.0);
        assert!(rr.upper.is_finite());
    }

    #[test]
    fn test_zero_margin_not_computable() {
        let table = Table2x2::from_counts(0, 0, 10, 90);
        assert!(matches!(
            risk_ratio(&table, level95()),
            Err(Error::NotComputable(_))
        ));

        let no_cases = Table2x2::from_counts(0, 100, 0, 90);
        assert!(risk_ratio(&no_cases, level95()).is_err());
    }

    #[test]
    fn test_row_swap_reciprocal() {
        let table = Table2x2::from_counts(20, 80, 10, 90);
        let rr = risk_ratio(&table, level95()).unwrap();
        let swapped = risk_ratio(&table.swap_rows(), level95()).unwrap();

        assert_abs_diff_eq!(rr.estimate * swapped.estimate, 1.0, epsilon = 1e-10);
        // Bounds swap and invert as well
        assert_abs_diff_eq!(rr.lower * swapped.upper, 1.0, epsilon = 1e-10);
    }
}
