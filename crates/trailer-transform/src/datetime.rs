//! Lenient parsing of the scheduled arrival column.
//!
//! The upstream export is not consistent about date formats, so several
//! layouts are accepted. Anything unrecognised becomes `None`; a bad cell
//! never fails the batch.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y", // US: 01/15/2024
    "%d-%b-%Y", // 15-Jan-2024
    "%d %b %Y", // 15 Jan 2024
    "%b %d, %Y", // Jan 15, 2024
    "%Y%m%d",   // Compact: 20240115
];

/// Parse a scheduled arrival value into its calendar date.
///
/// Time-of-day and offsets are dropped; reports group by date.
pub fn parse_scheduled_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in &DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }

    None
}
