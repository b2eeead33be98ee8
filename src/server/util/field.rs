//! Coercion of raw, loosely-typed request fields into typed values.
//!
//! Profile submissions arrive as plain strings. These helpers are pure
//! functions of (input, default); malformed or absent input degrades to the
//! caller-supplied default and never fails.

use chrono::NaiveDate;

const FORMAT_DDMMYYYY: &str = "%d/%m/%Y";
const FORMAT_YYYYMMDD: &str = "%Y-%m-%d";

/// Parses a raw field as an integer.
///
/// # Arguments
/// - `value` - Raw field value, if the field was present
/// - `default` - Value to return on absence or parse failure
pub fn int_field(value: Option<&str>, default: Option<i32>) -> Option<i32> {
    value
        .and_then(|v| v.trim().parse::<i32>().ok())
        .or(default)
}

/// Parses a raw field as a date, first as `dd/mm/yyyy`, then as `yyyy-mm-dd`.
///
/// # Arguments
/// - `value` - Raw field value, if the field was present
/// - `default` - Value to return on absence or parse failure
pub fn date_field(value: Option<&str>, default: Option<NaiveDate>) -> Option<NaiveDate> {
    value
        .and_then(|v| {
            let v = v.trim();
            NaiveDate::parse_from_str(v, FORMAT_DDMMYYYY)
                .or_else(|_| NaiveDate::parse_from_str(v, FORMAT_YYYYMMDD))
                .ok()
        })
        .or(default)
}
