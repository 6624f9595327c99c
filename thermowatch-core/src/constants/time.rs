//! Time-Related Constants
//!
//! Conversion factors and the standard report spans. Every duration in the
//! crate is expressed in milliseconds, matching [`crate::time::Timestamp`].

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u64 = 60;

/// Hours per day.
pub const HOURS_PER_DAY: u64 = 24;

/// Days per week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * MINUTES_PER_HOUR;

/// Milliseconds per day.
pub const MS_PER_DAY: u64 = MS_PER_HOUR * HOURS_PER_DAY;

/// Milliseconds per week.
pub const MS_PER_WEEK: u64 = MS_PER_DAY * DAYS_PER_WEEK;

/// Calendar-free month used by report spans (30 days).
pub const MS_PER_MONTH: u64 = MS_PER_DAY * 30;

/// Calendar-free year used by report spans (365 days).
pub const MS_PER_YEAR: u64 = MS_PER_DAY * 365;
