//! Lenient query-string deserializers for optional filter values.
//!
//! A malformed value (for example `property_id=abc`) is treated as if the filter were
//! absent instead of rejecting the request or reaching a comparison.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parses any [`FromStr`] value, yielding `None` for blank or malformed input.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(raw.as_deref().and_then(parse_lenient))
}

/// Parses an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS` timestamp or a bare date
/// (midnight), yielding `None` for anything else.
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(raw.as_deref().and_then(parse_datetime))
}

/// Trims `raw` and parses it, with blank input treated as absent.
pub(crate) fn parse_lenient<T: FromStr>(raw: &str) -> Option<T> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    value.parse().ok()
}

/// Tries RFC 3339 first, then a naive timestamp, then a bare date at midnight.
pub(crate) fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_utc());
    }
    if let Ok(timestamp) = value.parse::<NaiveDateTime>() {
        return Some(timestamp);
    }

    value
        .parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
