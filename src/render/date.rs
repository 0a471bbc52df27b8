use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{ExportError, Result};

/// Layouts carrying a numeric offset that RFC 3339 refuses (`+0000`, space separator).
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

/// Naive layouts accepted after the offset-aware ones; read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Calendar dates without a time of day; midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y", "%d %B, %Y"];

/// Parse a `createdAt` value into a calendar date-time.
pub fn parse_created_at(raw: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(parsed);
    }
    if let Some(parsed) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(parsed);
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    match naive {
        Some(naive) => Ok(Utc.from_utc_datetime(&naive).fixed_offset()),
        None => Err(ExportError::MalformedInput(format!(
            "createdAt `{}` is not a recognizable date",
            raw
        ))),
    }
}

/// Short date in the given locale, taken in the timestamp's own offset.
pub fn format_short_date(created_at: &DateTime<FixedOffset>, locale: Locale) -> String {
    created_at.format_localized("%x", locale).to_string()
}
