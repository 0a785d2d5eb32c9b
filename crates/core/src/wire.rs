//! Field deserializers for records coming from the job data source.
//!
//! The data source is a database export: empty columns arrive as `null`,
//! dates arrive either as plain dates or as ISO timestamps, and free-form
//! columns may hold text that is not a date at all. None of these should
//! fail the record they belong to.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::types::Date;

/// Timestamp layouts accepted besides a plain `YYYY-MM-DD` date.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Deserialize `T`, treating an explicit `null` like a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional calendar date from a date or timestamp string.
///
/// `null`, blank strings and text that is not a date become `None`.
/// Non-string values are still an error.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// Calendar date of a `YYYY-MM-DD` date, a naive ISO timestamp or an
/// RFC 3339 timestamp. Any time component is dropped.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = Date::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.date());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
