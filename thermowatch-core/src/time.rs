//! Timestamps and durations
//!
//! The engine works on plain millisecond counts:
//! - [`Timestamp`]: milliseconds since the Unix epoch
//! - durations: `u64` milliseconds (see [`crate::constants::time`])
//!
//! Wall-clock parsing of the logger's ISO-8601 strings lives here too and is
//! only available with `std`.

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Milliseconds elapsed from `earlier` to `later`, zero if out of order
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

/// Parse an ISO-8601 timestamp into milliseconds since the epoch
///
/// Accepts what the acquisition side writes:
/// - `2023-03-14T08:15:02` (`strftime` in the serial logger)
/// - `2023-03-14 08:15:02.318811` (`str(datetime)` in the ADC logger)
/// - RFC 3339 with an explicit offset, e.g. `2023-03-14T08:15:02-07:00`
///
/// Times without an offset are taken as UTC. Returns `None` for anything
/// unparseable or before 1970.
#[cfg(feature = "std")]
pub fn parse_timestamp(text: &str) -> Option<Timestamp> {
    use chrono::{DateTime, NaiveDateTime};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    let text = text.trim();

    let millis = match DateTime::parse_from_rfc3339(text) {
        Ok(with_offset) => with_offset.timestamp_millis(),
        Err(_) => NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())?
            .and_utc()
            .timestamp_millis(),
    };

    u64::try_from(millis).ok()
}

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS` (UTC)
#[cfg(feature = "std")]
pub fn format_timestamp(timestamp: Timestamp) -> Option<String> {
    let millis = i64::try_from(timestamp).ok()?;
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string())
}
