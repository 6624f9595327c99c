//! Constants for Thermowatch Core
//!
//! Centralized numeric constants. Use these instead of magic numbers.
//!
//! ## Organization
//!
//! - **Time**: unit conversions and report spans
//! - **Analysis**: smoother defaults and filter limits

/// Time-related constants for durations and report spans.
pub mod time;

/// Smoother defaults and filter parameter limits.
pub mod analysis;

// Re-export commonly used constants for convenience
pub use time::{
    MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR, MS_PER_DAY, MS_PER_WEEK,
    MS_PER_MONTH, MS_PER_YEAR,
};

pub use analysis::{
    DEFAULT_BOX_HALF_WIDTH, DEFAULT_LOWPASS_ORDER, DEFAULT_LOWPASS_CUTOFF,
    MAX_LOWPASS_ORDER,
};
