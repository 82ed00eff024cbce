//! Polars `AnyValue` helpers for reading source cells as text.
//!
//! Source tables are read with every column as text, but callers that build
//! DataFrames by hand (tests, other readers) may hand in typed columns, so
//! numeric and boolean values are rendered too.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its text form.
///
/// Returns an empty string for `Null`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Converts `AnyValue` to text, keeping nulls as `None`.
///
/// Blank strings are preserved: whether a blank value is meaningful is the
/// caller's decision (a whitespace trailer id is still "not attached").
pub fn any_to_optional_string(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Converts `AnyValue` to text, returning `None` for null or blank values.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Formats a float without trailing zeros (`1.0` -> `1`).
fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
