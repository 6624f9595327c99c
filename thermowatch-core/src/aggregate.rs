//! Averages over sample ranges
//!
//! All aggregates are unweighted arithmetic means: each sample counts once,
//! regardless of how much time it represents or whether its timestamp is
//! duplicated. Nothing here is defined for an empty range; every function
//! returns [`AnalysisError::EmptyInput`] instead of a default.
//!
//! ## Synthetic samples
//!
//! [`average_sample`] averages the raw, Celsius and Fahrenheit fields
//! independently and stamps the result with either the first or the last
//! timestamp of the range. The two anchors serve different consumers and
//! are exposed as separately named operations:
//!
//! - [`average_sample_leading`]: first timestamp, used for windowed reports
//! - [`average_sample_trailing`]: last timestamp, used by the bucketizer

use crate::{
    errors::{AnalysisError, AnalysisResult},
    sample::{Sample, Unit},
};

/// Which original timestamp a synthetic sample carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Timestamp of the first sample in the range
    First,
    /// Timestamp of the last sample in the range
    Last,
}

/// Mean, minimum and maximum of a range in one unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl Summary {
    /// Spread between the extremes
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Arithmetic mean of a scalar series
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] if `values` is empty.
pub fn mean(values: &[f64]) -> AnalysisResult<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of `samples` in `unit`
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] if `samples` is empty.
pub fn average(samples: &[Sample], unit: Unit) -> AnalysisResult<f64> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let sum: f64 = samples.iter().map(|s| unit.value_of(s)).sum();
    Ok(sum / samples.len() as f64)
}

/// Count, mean and extremes of `samples` in `unit`
pub fn summarize(samples: &[Sample], unit: Unit) -> AnalysisResult<Summary> {
    let mean = average(samples, unit)?;

    let (min, max) = samples
        .iter()
        .map(|s| unit.value_of(s))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    Ok(Summary {
        count: samples.len(),
        mean,
        min,
        max,
    })
}

/// Field-wise mean of `samples` as a synthetic sample
///
/// Raw, Celsius and Fahrenheit are averaged independently; the averaged raw
/// count is rounded to the nearest integer. The timestamp is taken from the
/// first or last sample according to `anchor`.
///
/// # Errors
///
/// [`AnalysisError::EmptyInput`] if `samples` is empty.
pub fn average_sample(samples: &[Sample], anchor: Anchor) -> AnalysisResult<Sample> {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AnalysisError::EmptyInput),
    };

    let n = samples.len() as f64;
    let (raw, celsius, fahrenheit) = samples.iter().fold((0.0, 0.0, 0.0), |(r, c, f), s| {
        (r + f64::from(s.raw), c + s.celsius, f + s.fahrenheit)
    });

    let timestamp = match anchor {
        Anchor::First => first.timestamp,
        Anchor::Last => last.timestamp,
    };

    Ok(Sample {
        timestamp,
        raw: libm::round(raw / n) as i32,
        celsius: celsius / n,
        fahrenheit: fahrenheit / n,
    })
}

/// Field-wise mean stamped with the range's first timestamp
pub fn average_sample_leading(samples: &[Sample]) -> AnalysisResult<Sample> {
    average_sample(samples, Anchor::First)
}

/// Field-wise mean stamped with the range's last timestamp
pub fn average_sample_trailing(samples: &[Sample]) -> AnalysisResult<Sample> {
    average_sample(samples, Anchor::Last)
}
