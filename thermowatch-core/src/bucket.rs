//! Fixed-interval bucketing
//!
//! Splits a time-ordered sequence into consecutive, non-overlapping
//! intervals and collapses each into one averaged sample. Used to thin out
//! week- and month-long windows before charting.
//!
//! A bucket opens at its first sample. Each following sample either joins
//! it or, once `timestamp - bucket_start >= interval`, closes it and opens
//! the next one:
//!
//! ```text
//! interval = 60 s, samples every 1 s, 150 samples
//!
//! t:  0 ............ 59 | 60 ........... 119 | 120 ..... 149
//!     bucket 0 (60)     | bucket 1 (60)      | bucket 2 (30, flushed)
//! ```
//!
//! Buckets follow the data, not the wall clock: a gap in recording shifts
//! all later bucket boundaries. The trailing partial bucket is always
//! emitted.

use alloc::vec::Vec;
use core::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    aggregate::average_sample_trailing,
    errors::{AnalysisError, AnalysisResult},
    sample::Sample,
    time::{elapsed_ms, Timestamp},
};

/// One aggregation interval
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bucket {
    /// Timestamp of the bucket's first sample
    pub start: Timestamp,
    /// Index of the first covered sample in the input
    pub start_index: usize,
    /// One past the last covered sample
    pub end_index: usize,
    /// Field-wise mean of the covered samples, stamped with the last
    /// covered timestamp
    pub sample: Sample,
}

impl Bucket {
    /// Number of samples averaged into this bucket
    pub fn count(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Covered index range in the input sequence
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }
}

/// Partition `samples` into buckets of `interval_ms`
///
/// # Errors
///
/// - [`AnalysisError::EmptyInput`] if `samples` is empty
/// - [`AnalysisError::InvalidFilterParameter`] if `interval_ms` is zero
///
/// ```rust
/// use thermowatch_core::{bucket::bucketize, Sample};
///
/// let samples: Vec<Sample> = (0..150)
///     .map(|i| Sample::new(i * 1000, 0, 20.0, 68.0))
///     .collect();
///
/// let buckets = bucketize(&samples, 60_000)?;
/// let counts: Vec<usize> = buckets.iter().map(|b| b.count()).collect();
/// assert_eq!(counts, [60, 60, 30]);
/// assert_eq!(buckets[0].sample.timestamp, 59_000);
/// # Ok::<(), thermowatch_core::AnalysisError>(())
/// ```
pub fn bucketize(samples: &[Sample], interval_ms: u64) -> AnalysisResult<Vec<Bucket>> {
    if interval_ms == 0 {
        return Err(AnalysisError::InvalidFilterParameter {
            parameter: "interval",
            reason: "bucket interval must be positive",
        });
    }
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut buckets = Vec::new();
    let mut start_index = 0;

    for (index, sample) in samples.iter().enumerate().skip(1) {
        let bucket_start = samples[start_index].timestamp;
        if elapsed_ms(bucket_start, sample.timestamp) >= interval_ms {
            buckets.push(close(samples, start_index, index)?);
            start_index = index;
        }
    }
    buckets.push(close(samples, start_index, samples.len())?);

    log_debug!(
        "Bucketized {} samples into {} buckets of {} ms",
        samples.len(),
        buckets.len(),
        interval_ms
    );

    Ok(buckets)
}

fn close(samples: &[Sample], start_index: usize, end_index: usize) -> AnalysisResult<Bucket> {
    let covered = &samples[start_index..end_index];
    Ok(Bucket {
        start: covered[0].timestamp,
        start_index,
        end_index,
        sample: average_sample_trailing(covered)?,
    })
}
