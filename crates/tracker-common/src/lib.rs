//! Shared utilities for the sample tracker crates.
//!
//! This crate provides the cell-level helpers every other crate agrees on:
//! how a Polars value is rendered as text and how a 0/1 indicator is read.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_indicator, any_to_string, format_numeric, parse_f64};
