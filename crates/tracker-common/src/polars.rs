//! Polars AnyValue utility functions.
//!
//! Facet matching, export and coverage all compare cells as text, so every
//! crate must stringify values the same way. This module is that single rule.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to its text form.
///
/// Returns an empty string for `Null`. Integers keep their digits, floats are
/// printed without a trailing fractional zero so that a year read as `2017.0`
/// still compares equal to `"2017"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use tracker_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(2017)), "2017");
/// assert_eq!(any_to_string(AnyValue::Float64(2017.0)), "2017");
/// assert_eq!(any_to_string(AnyValue::String("Smith")), "Smith");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without a trailing fractional zero.
///
/// # Examples
///
/// ```
/// use tracker_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(2020.0), "2020");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Reads a completion indicator cell.
///
/// Returns `Some(true)` for a value equal to 1, `Some(false)` for a value
/// equal to 0 and `None` for anything else, including nulls and text.
/// Booleans count as 1 and 0.
pub fn any_to_indicator(value: AnyValue<'_>) -> Option<bool> {
    match value {
        AnyValue::Boolean(b) => Some(b),
        AnyValue::Int8(v) => int_indicator(i64::from(v)),
        AnyValue::Int16(v) => int_indicator(i64::from(v)),
        AnyValue::Int32(v) => int_indicator(i64::from(v)),
        AnyValue::Int64(v) => int_indicator(v),
        AnyValue::UInt8(v) => int_indicator(i64::from(v)),
        AnyValue::UInt16(v) => int_indicator(i64::from(v)),
        AnyValue::UInt32(v) => int_indicator(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok().and_then(int_indicator),
        AnyValue::Float32(v) => float_indicator(f64::from(v)),
        AnyValue::Float64(v) => float_indicator(v),
        _ => None,
    }
}

fn int_indicator(v: i64) -> Option<bool> {
    match v {
        1 => Some(true),
        0 => Some(false),
        _ => None,
    }
}

fn float_indicator(v: f64) -> Option<bool> {
    if v == 1.0 {
        Some(true)
    } else if v == 0.0 {
        Some(false)
    } else {
        None
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
