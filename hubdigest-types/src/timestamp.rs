//! Parsing of registry creation timestamps.
//!
//! The registry emits `createdAt` in one format family: UTC ISO-8601 with a
//! trailing `Z`, with or without fractional seconds. Only those two shapes
//! are accepted. Anything else yields `None` and the caller skips the item.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

/// Pattern shared by both accepted shapes, minus the fraction and the `Z`.
const BASE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Maximum number of fractional digits accepted (microsecond precision).
const MAX_FRACTION_DIGITS: usize = 6;

/// Parse a registry timestamp into a UTC instant.
///
/// Accepted patterns, tried in order:
///
/// 1. `YYYY-MM-DDTHH:MM:SS.ffffffZ` (1 to 6 fractional digits)
/// 2. `YYYY-MM-DDTHH:MM:SSZ`
///
/// # Example
///
/// ```rust
/// use hubdigest_types::parse_timestamp;
///
/// assert!(parse_timestamp("2024-05-01T10:00:00.123Z").is_some());
/// assert!(parse_timestamp("2024-05-01T10:00:00Z").is_some());
/// assert!(parse_timestamp("2024-05-01T10:00:00+00:00").is_none());
/// assert!(parse_timestamp("not-a-date").is_none());
/// ```
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let body = s.strip_suffix('Z')?;

    match body.split_once('.') {
        Some((base, fraction)) => parse_with_fraction(base, fraction),
        None => parse_base(body),
    }
}

fn parse_with_fraction(base: &str, fraction: &str) -> Option<DateTime<Utc>> {
    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    // Right-pad to nine digits so "123" reads as 123 ms, not 123 ns.
    let nanos: u32 = format!("{:0<9}", fraction).parse().ok()?;
    NaiveDateTime::parse_from_str(base, BASE_FORMAT)
        .ok()?
        .with_nanosecond(nanos)
        .map(|naive| naive.and_utc())
}

fn parse_base(body: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(body, BASE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
