//! Canonical date normalization for front-matter values.
//!
//! Top-level front-matter scalars that read as ISO-8601 / YAML-timestamp
//! dates are rewritten as canonical UTC RFC 3339 strings with millisecond
//! precision (`2024-03-01T00:00:00.000Z`). Everything else passes through
//! unchanged, including nested mappings and sequences — normalization is
//! deliberately top-level only.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_yaml::{Mapping, Value};

/// Canonical output shape, the JSON `Date.toJSON()` format.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Datetime shapes accepted without an offset; interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Normalize date-typed values in a front-matter mapping.
///
/// Only top-level string scalars are considered; a value that does not
/// parse as a date or datetime is returned untouched.
pub fn normalize_dates(mut data: Mapping) -> Mapping {
    for (_key, value) in data.iter_mut() {
        if let Value::String(s) = value {
            if let Some(canonical) = canonicalize_date(s) {
                *value = Value::String(canonical);
            }
        }
    }
    data
}

/// Parse a date-like string and return its canonical ISO-8601 form.
///
/// Accepts RFC 3339 datetimes (offset preserved by conversion to UTC),
/// naive datetimes (interpreted as UTC), and bare dates (UTC midnight).
///
/// # Examples
///
/// ```
/// use markweft_content::markdown::canonicalize_date;
///
/// assert_eq!(
///     canonicalize_date("2024-03-01"),
///     Some("2024-03-01T00:00:00.000Z".to_string())
/// );
/// assert_eq!(
///     canonicalize_date("2024-03-01T10:30:00+02:00"),
///     Some("2024-03-01T08:30:00.000Z".to_string())
/// );
/// assert_eq!(canonicalize_date("not a date"), None);
/// ```
pub fn canonicalize_date(s: &str) -> Option<String> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).format(CANONICAL_FORMAT).to_string());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().format(CANONICAL_FORMAT).to_string());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc().format(CANONICAL_FORMAT).to_string());
    }

    None
}
