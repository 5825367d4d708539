//! Continuity-correction policy for ratio measures
//!
//! Ratio measures (risk ratio, odds ratio) are undefined on a table with a
//! zero cell, so when any single cell is zero the Haldane-Anscombe
//! corrected table (0.5 added to every cell) feeds both the point estimate
//! and the variance. The risk difference never uses the corrected table:
//! its risks stay well-defined with zero cells, and keeping them
//! uncorrected is the established behavior here. The asymmetry between the
//! two families is deliberate and documented; see DESIGN.md before
//! changing it.

use epi_core::Table2x2;
use tracing::debug;

/// The table a ratio measure should compute from
///
/// Returns the Haldane-Anscombe corrected table when any cell is zero,
/// otherwise the original. Callers must have already rejected tables with
/// a zero margin.
pub(crate) fn ratio_table(table: &Table2x2) -> Table2x2 {
    if table.has_zero_cell() {
        debug!(?table, "zero cell: applying Haldane-Anscombe correction");
        table.haldane_anscombe()
    } else {
        *table
    }
}
