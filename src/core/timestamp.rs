//! Fixed-width whole-second timestamp layout.

use chrono::format::ParseErrorKind;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::utils::error::{IntervalError, Result};

/// chrono format string for `YYYY-MM-DD HH:MM:SS`.
pub const SIMPLE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// 1970-01-01T00:00:00Z.
pub fn unix_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(0, 0).unwrap_or_default()
}

pub fn format_simple<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format(SIMPLE_LAYOUT).to_string()
}

/// Reads a [`SIMPLE_LAYOUT`] timestamp. No checks beyond chrono's own.
pub fn parse_simple(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, SIMPLE_LAYOUT).map_err(|e| IntervalError::SyntaxError {
        input: s.to_string(),
        position: 0,
        expected: match e.kind() {
            ParseErrorKind::TooShort => "a complete 'YYYY-MM-DD HH:MM:SS' timestamp",
            ParseErrorKind::TooLong => "end of input after the seconds",
            _ => "a 'YYYY-MM-DD HH:MM:SS' timestamp",
        },
    })
}

/// Reads an RFC 3339 timestamp, or a [`SIMPLE_LAYOUT`] one taken as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t);
    }
    Ok(parse_simple(s)?.and_utc().fixed_offset())
}
