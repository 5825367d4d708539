//! Core types for epidemiological statistics
//!
//! This crate provides the shared vocabulary used across the epi-stats
//! workspace: the unified [`Error`] type, the validated [`ConfidenceLevel`],
//! the [`IntervalEstimate`] result record, and the [`Table2x2`] contingency
//! table.
//!
//! Everything here is a small immutable value; no type holds state beyond a
//! single computation and nothing is cached between calls.

pub mod confidence;
pub mod error;
pub mod interval;
pub mod table;

// Re-export core types
pub use confidence::ConfidenceLevel;
pub use error::{Error, Result};
pub use interval::IntervalEstimate;
pub use table::Table2x2;
