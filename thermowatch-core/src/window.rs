//! Trailing window extraction ("last N duration")
//!
//! A [`Window`] is the maximal suffix of a time-ordered sample sequence whose
//! samples all lie within `duration` of the sequence's last timestamp:
//!
//! ```text
//! samples:   s0  s1  s2 | s3  s4  s5  s6
//!                       |<-- duration -->|
//!                    start            last
//! ```
//!
//! The window borrows the caller's slice; nothing is copied.
//!
//! ## Running out of data
//!
//! When the backward scan reaches the first sample without finding one
//! older than `duration`, the whole sequence is returned and the window is
//! flagged [`Window::truncated_by_availability`]. A "last hour" window over
//! four minutes of recordings is four minutes long, and callers need to
//! know that. A `warn` log event is emitted as well.
//!
//! ```rust
//! use thermowatch_core::{window, Sample};
//!
//! let samples: Vec<Sample> = (0..120)
//!     .map(|i| Sample::new(i * 1000, 0, 21.0, 69.8))
//!     .collect();
//!
//! let minute = window::trailing_window(&samples, 60_000)?;
//! assert_eq!(minute.start_index(), 59);
//! assert_eq!(minute.len(), 61);
//! assert!(!minute.truncated_by_availability());
//!
//! let hour = window::trailing_window(&samples, 3_600_000)?;
//! assert_eq!(hour.len(), 120);
//! assert!(hour.truncated_by_availability());
//! # Ok::<(), thermowatch_core::AnalysisError>(())
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::time::{
        MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_MONTH, MS_PER_WEEK, MS_PER_YEAR,
    },
    errors::{AnalysisError, AnalysisResult},
    sample::Sample,
    time::{elapsed_ms, Timestamp},
};

/// Contiguous trailing view over a sample sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    /// The windowed samples (a suffix of the source sequence)
    samples: &'a [Sample],
    /// Index of the first windowed sample in the source sequence
    start: usize,
    /// Requested duration in milliseconds
    duration_ms: u64,
    /// Scan reached the start of the data without hitting the cutoff
    truncated: bool,
}

impl<'a> Window<'a> {
    /// Windowed samples, oldest first
    pub fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    /// Index of the first windowed sample in the source sequence
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Number of samples in the window (never zero)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration that was requested
    pub fn requested_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Time actually covered, from first to last windowed sample
    pub fn covered_ms(&self) -> u64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => elapsed_ms(first.timestamp, last.timestamp),
            _ => 0,
        }
    }

    /// True when the requested duration exceeds the available data
    pub fn truncated_by_availability(&self) -> bool {
        self.truncated
    }

    /// Oldest windowed sample
    pub fn first(&self) -> &'a Sample {
        &self.samples[0]
    }

    /// Newest windowed sample (the anchor)
    pub fn last(&self) -> &'a Sample {
        &self.samples[self.samples.len() - 1]
    }

    /// Timestamp the window is anchored at
    pub fn anchor(&self) -> Timestamp {
        self.last().timestamp
    }
}

/// Extract the trailing window of `samples` spanning at most `duration_ms`
///
/// A sample `s` is included iff `last.timestamp - s.timestamp <= duration_ms`,
/// scanning backward from the end and stopping at the first sample that
/// falls outside. The boundary is inclusive.
///
/// `samples` must be ordered by non-decreasing timestamp; the order is not
/// checked.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] if `samples` is empty.
pub fn trailing_window(samples: &[Sample], duration_ms: u64) -> AnalysisResult<Window<'_>> {
    let last = samples.last().ok_or(AnalysisError::EmptyInput)?.timestamp;

    let cutoff = samples
        .iter()
        .rposition(|s| elapsed_ms(s.timestamp, last) > duration_ms);

    let (start, truncated) = match cutoff {
        Some(outside) => (outside + 1, false),
        None => (0, true),
    };

    if truncated {
        log_warn!(
            "Requested window of {} ms exceeds available data ({} samples over {} ms)",
            duration_ms,
            samples.len(),
            elapsed_ms(samples[0].timestamp, last)
        );
    }

    Ok(Window {
        samples: &samples[start..],
        start,
        duration_ms,
        truncated,
    })
}

/// Extract the trailing window for a named report span
pub fn trailing_span(samples: &[Sample], span: WindowSpan) -> AnalysisResult<Window<'_>> {
    trailing_window(samples, span.duration_ms())
}

/// Named report spans
///
/// Months and years are fixed-length (30 and 365 days); the engine has no
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WindowSpan {
    /// 60 seconds
    Minute,
    /// 60 minutes
    Hour,
    /// 24 hours
    Day,
    /// 7 days
    Week,
    /// 30 days
    Month,
    /// 365 days
    Year,
    /// Arbitrary duration
    Custom {
        /// Span length in milliseconds
        millis: u64,
    },
}

impl WindowSpan {
    /// Spans printed by the default report
    pub const STANDARD: [WindowSpan; 4] =
        [WindowSpan::Minute, WindowSpan::Hour, WindowSpan::Day, WindowSpan::Week];

    /// Span length in milliseconds
    pub fn duration_ms(self) -> u64 {
        match self {
            WindowSpan::Minute => MS_PER_MINUTE,
            WindowSpan::Hour => MS_PER_HOUR,
            WindowSpan::Day => MS_PER_DAY,
            WindowSpan::Week => MS_PER_WEEK,
            WindowSpan::Month => MS_PER_MONTH,
            WindowSpan::Year => MS_PER_YEAR,
            WindowSpan::Custom { millis } => millis,
        }
    }
}

impl fmt::Display for WindowSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowSpan::Minute => f.write_str("Last minute"),
            WindowSpan::Hour => f.write_str("Last hour"),
            WindowSpan::Day => f.write_str("Last day"),
            WindowSpan::Week => f.write_str("Last week"),
            WindowSpan::Month => f.write_str("Last month"),
            WindowSpan::Year => f.write_str("Last year"),
            WindowSpan::Custom { millis } => write!(f, "Last {} ms", millis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(timestamps: &[u64]) -> Vec<Sample> {
        timestamps
            .iter()
            .map(|&t| Sample::new(t, 0, 0.0, 32.0))
            .collect()
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(trailing_window(&[], 1000), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn boundary_is_inclusive() {
        let samples = series(&[0, 1000, 2000, 3000]);
        let window = trailing_window(&samples, 2000).unwrap();

        assert_eq!(window.start_index(), 1);
        assert_eq!(window.first().timestamp, 1000);
        assert_eq!(window.anchor(), 3000);
        assert!(!window.truncated_by_availability());
    }

    #[test]
    fn single_sample_is_truncated_window() {
        let samples = series(&[5000]);
        let window = trailing_window(&samples, 0).unwrap();

        assert_eq!(window.len(), 1);
        assert!(window.truncated_by_availability());
        assert_eq!(window.covered_ms(), 0);
    }

    #[test]
    fn zero_duration_keeps_duplicates_of_last() {
        let samples = series(&[0, 1000, 2000, 2000, 2000]);
        let window = trailing_window(&samples, 0).unwrap();

        assert_eq!(window.start_index(), 2);
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn irregular_gaps() {
        // Logger was down between 10s and 55s
        let samples = series(&[0, 5_000, 10_000, 55_000, 56_000, 57_000]);
        let window = trailing_window(&samples, 30_000).unwrap();

        assert_eq!(window.start_index(), 3);
        assert_eq!(window.covered_ms(), 2_000);
        assert_eq!(window.requested_ms(), 30_000);
    }

    #[test]
    fn exact_fit_is_still_flagged() {
        // The scan reaches the first sample without a break
        let samples = series(&[0, 30_000, 60_000]);
        let window = trailing_window(&samples, 60_000).unwrap();

        assert_eq!(window.len(), 3);
        assert!(window.truncated_by_availability());
    }

    #[test]
    fn window_borrows_source() {
        let samples = series(&[0, 1000, 2000]);
        let window = trailing_window(&samples, 1000).unwrap();

        assert!(core::ptr::eq(window.last(), &samples[2]));
    }

    #[test]
    fn span_durations_and_labels() {
        assert_eq!(WindowSpan::Minute.duration_ms(), 60_000);
        assert_eq!(WindowSpan::Week.duration_ms(), 604_800_000);
        assert_eq!(WindowSpan::Custom { millis: 42 }.duration_ms(), 42);
        assert_eq!(WindowSpan::Hour.to_string(), "Last hour");
    }
}
