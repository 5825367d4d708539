//! Chi-square test of independence on a 2x2 table

use epi_core::{ConfidenceLevel, Error, Result, Table2x2};
use epi_distributions::chi_squared;
use serde::{Deserialize, Serialize};

/// Continuity correction for the 2x2 chi-square statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Correction {
    /// Uncorrected Pearson statistic
    None,
    /// Yates' continuity correction
    Yates,
}

/// Result of a chi-square independence test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareTest {
    /// The chi-square statistic
    pub statistic: f64,
    /// Degrees of freedom (always 1 for a 2x2 table)
    pub df: f64,
    /// Upper-tail p-value
    pub p_value: f64,
}

impl ChiSquareTest {
    /// Whether the test rejects independence at the given level
    pub fn is_significant(&self, level: ConfidenceLevel) -> bool {
        self.p_value < level.alpha()
    }
}

/// Chi-square test of independence with optional Yates correction
///
/// `chi2 = n(|ad - bc| - c)² / (n1 n2 m1 m2)` with `c = n/2` under Yates,
/// clamped at zero when the correction exceeds the cell imbalance. A table
/// with any zero marginal is reported as not computable rather than
/// propagating a NaN.
pub fn chi_square_test(table: &Table2x2, correction: Correction) -> Result<ChiSquareTest> {
    if table.has_zero_margin() {
        return Err(Error::zero_margin("chi-square test"));
    }

    let n = table.total();
    let imbalance = (table.a * table.d - table.b * table.c).abs();
    let adjustment = match correction {
        Correction::None => 0.0,
        Correction::Yates => n / 2.0,
    };
    let numerator = (imbalance - adjustment).max(0.0);
    let statistic = n * numerator * numerator / (table.n1() * table.n2() * table.m1() * table.m2());

    Ok(ChiSquareTest {
        statistic,
        df: 1.0,
        p_value: chi_squared::p_value(statistic, 1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_table() {
        let table = Table2x2::from_counts(20, 80, 10, 90);
        let test = chi_square_test(&table, Correction::None).unwrap();

        assert_abs_diff_eq!(test.statistic, 3.922, epsilon = 1e-2);
        assert_eq!(test.df, 1.0);
        assert!(test.p_value > 0.03 && test.p_value < 0.06);
    }

    #[test]
    fn test_yates_shrinks_statistic() {
        let table = Table2x2::from_counts(20, 80, 10, 90);
        let plain = chi_square_test(&table, Correction::None).unwrap();
        let yates = chi_square_test(&table, Correction::Yates).unwrap();

        assert!(yates.statistic < plain.statistic);
        assert_abs_diff_eq!(yates.statistic, 3.176, epsilon = 1e-2);
        assert!(yates.p_value > plain.p_value);
    }

    #[test]
    fn test_yates_clamps_at_zero() {
        // |ad - bc| = 10 and n/2 = 10: the corrected statistic floors at 0
        let table = Table2x2::from_counts(3, 7, 4, 6);
        let test = chi_square_test(&table, Correction::Yates).unwrap();
        assert_eq!(test.statistic, 0.0);
        assert_eq!(test.p_value, 1.0);
    }

    #[test]
    fn test_independent_table_is_null() {
        let table = Table2x2::from_counts(10, 90, 10, 90);
        let test = chi_square_test(&table, Correction::None).unwrap();
        assert_eq!(test.statistic, 0.0);
        assert_eq!(test.p_value, 1.0);
        assert!(!test.is_significant(ConfidenceLevel::NINETY_FIVE));
    }

    #[test]
    fn test_zero_margin_not_computable() {
        let table = Table2x2::from_counts(0, 0, 10, 90);
        assert!(matches!(
            chi_square_test(&table, Correction::None),
            Err(Error::NotComputable(_))
        ));

        let empty_column = Table2x2::from_counts(0, 100, 0, 50);
        assert!(chi_square_test(&empty_column, Correction::Yates).is_err());
    }

    #[test]
    fn test_strong_association_is_significant() {
        let table = Table2x2::from_counts(60, 40, 20, 80);
        let test = chi_square_test(&table, Correction::Yates).unwrap();
        assert!(test.is_significant(ConfidenceLevel::NINETY_NINE));
    }
}
