//! 2x2 contingency table
//!
//! The table crosses exposure with outcome:
//!
//! ```text
//!                cases   non-cases
//!   exposed        a         b
//!   unexposed      c         d
//! ```
//!
//! Tables are immutable values constructed fresh per computation; the
//! Haldane-Anscombe continuity correction produces a new table rather than
//! mutating in place.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A 2x2 contingency table of non-negative counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Table2x2 {
    /// Exposed cases
    pub a: f64,
    /// Exposed non-cases
    pub b: f64,
    /// Unexposed cases
    pub c: f64,
    /// Unexposed non-cases
    pub d: f64,
}

impl Table2x2 {
    /// Create a new table, validating that all cells are finite and non-negative
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        for (name, value) in [("a", a), ("b", b), ("c", c), ("d", d)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "Cell {name} must be a finite non-negative count, got {value}"
                )));
            }
        }
        Ok(Self { a, b, c, d })
    }

    /// Create a table from integer counts
    pub fn from_counts(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self {
            a: a as f64,
            b: b as f64,
            c: c as f64,
            d: d as f64,
        }
    }

    /// Exposed row total (a + b)
    pub fn n1(&self) -> f64 {
        self.a + self.b
    }

    /// Unexposed row total (c + d)
    pub fn n2(&self) -> f64 {
        self.c + self.d
    }

    /// Case column total (a + c)
    pub fn m1(&self) -> f64 {
        self.a + self.c
    }

    /// Non-case column total (b + d)
    pub fn m2(&self) -> f64 {
        self.b + self.d
    }

    /// Grand total
    pub fn total(&self) -> f64 {
        self.a + self.b + self.c + self.d
    }

    /// Risk in the exposed row, a / (a + b)
    pub fn risk_exposed(&self) -> f64 {
        self.a / self.n1()
    }

    /// Risk in the unexposed row, c / (c + d)
    pub fn risk_unexposed(&self) -> f64 {
        self.c / self.n2()
    }

    /// True if any single cell is exactly zero
    pub fn has_zero_cell(&self) -> bool {
        self.a == 0.0 || self.b == 0.0 || self.c == 0.0 || self.d == 0.0
    }

    /// True if any row or column marginal is zero
    pub fn has_zero_margin(&self) -> bool {
        self.n1() == 0.0 || self.n2() == 0.0 || self.m1() == 0.0 || self.m2() == 0.0
    }

    /// New table with the Haldane-Anscombe correction (0.5 added to every cell)
    pub fn haldane_anscombe(&self) -> Self {
        Self {
            a: self.a + 0.5,
            b: self.b + 0.5,
            c: self.c + 0.5,
            d: self.d + 0.5,
        }
    }

    /// New table with exposure rows swapped (unexposed becomes exposed)
    pub fn swap_rows(&self) -> Self {
        Self {
            a: self.c,
            b: self.d,
            c: self.a,
            d: self.b,
        }
    }
}
