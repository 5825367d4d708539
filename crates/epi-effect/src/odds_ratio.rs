//! Odds ratio with Woolf's confidence interval

use crate::correction::ratio_table;
use epi_core::{ConfidenceLevel, Error, IntervalEstimate, Result, Table2x2};
use epi_distributions::normal;

/// Odds ratio `ad/bc` with Woolf's log-scale standard error
///
/// A table with an empty row or column is reported as not computable; a
/// single zero cell triggers the Haldane-Anscombe correction.
pub fn odds_ratio(table: &Table2x2, level: ConfidenceLevel) -> Result<IntervalEstimate> {
    if table.has_zero_margin() {
        return Err(Error::zero_margin("odds ratio"));
    }

    let t = ratio_table(table);
    let or = (t.a * t.d) / (t.b * t.c);
    let se = (1.0 / t.a + 1.0 / t.b + 1.0 / t.c + 1.0 / t.d).sqrt();
    let z = normal::z_critical(level);
    let log_or = or.ln();

    Ok(IntervalEstimate::new(
        or,
        (log_or - z * se).exp(),
        (log_or + z * se).exp(),
        level.value(),
    ))
}
