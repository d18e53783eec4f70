//! Date parsing for backend payloads
//!
//! Both feeds carry dates as strings, sometimes as plain dates and sometimes
//! as full ISO timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Formats tried when no configuration is at hand
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d", "%Y%m%d"];

/// Parse a date string, trying each format in order
///
/// RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS` prefixes are accepted as
/// well; the time component is dropped.
#[must_use]
pub fn parse_date_with<S: AsRef<str>>(s: &str, formats: &[S]) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format.as_ref()) {
            return Some(date);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Some(timestamp.date_naive());
    }

    // Timestamps without a zone, with or without fractional seconds
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Parse a date string with the default formats
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_date_with(s, DEFAULT_DATE_FORMATS)
}

/// Serde helper: an optional date that tolerates blanks and odd formats
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}
