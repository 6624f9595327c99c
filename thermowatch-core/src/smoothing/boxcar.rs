//! Truncated-edge moving average ("box" filter)
//!
//! For half-width `N`, output `i` is the mean of
//! `values[max(0, i - N) ..= min(len - 1, i + N)]`:
//!
//! ```text
//! N = 2, len = 6
//! i = 0:  [x0 x1 x2]              3 samples
//! i = 1:  [x0 x1 x2 x3]           4 samples
//! i = 2:  [x0 x1 x2 x3 x4]        5 samples (interior)
//! i = 5:           [x3 x4 x5]     3 samples
//! ```
//!
//! The window covers `N` samples on each side of `i`. Near the ends it is
//! cut short rather than padded or wrapped, so edge outputs are means of
//! fewer samples and lean toward the edge values.
//!
//! The end bound is inclusive on purpose. An exclusive-end slice
//! `[i - N, i + N)` drops `x[i + N]` and skews every interior window left.

use alloc::{format, string::String, vec::Vec};

use crate::{
    constants::analysis::DEFAULT_BOX_HALF_WIDTH,
    errors::{AnalysisError, AnalysisResult},
    traits::Smoother,
};

/// Box-average `values` with the given half-width
///
/// `half_width >= values.len()` is legal and yields the global mean at
/// every index. An empty series smooths to an empty series.
///
/// # Errors
///
/// [`AnalysisError::InvalidFilterParameter`] if `half_width` is zero.
///
/// ```rust
/// use thermowatch_core::smoothing::box_average;
///
/// let out = box_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 1)?;
/// assert_eq!(out, vec![1.5, 2.0, 3.0, 4.0, 4.5]);
/// # Ok::<(), thermowatch_core::AnalysisError>(())
/// ```
pub fn box_average(values: &[f64], half_width: usize) -> AnalysisResult<Vec<f64>> {
    if half_width == 0 {
        return Err(AnalysisError::InvalidFilterParameter {
            parameter: "half_width",
            reason: "must be a positive number of samples",
        });
    }

    let len = values.len();
    let smoothed = (0..len)
        .map(|i| {
            let start = i.saturating_sub(half_width);
            let end = i.saturating_add(half_width).saturating_add(1).min(len);
            let window = &values[start..end];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect();

    Ok(smoothed)
}

/// Box filter as a [`Smoother`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxFilter {
    half_width: usize,
}

impl BoxFilter {
    /// Create a box filter, rejecting a zero half-width
    pub fn new(half_width: usize) -> AnalysisResult<Self> {
        if half_width == 0 {
            return Err(AnalysisError::InvalidFilterParameter {
                parameter: "half_width",
                reason: "must be a positive number of samples",
            });
        }
        Ok(Self { half_width })
    }

    /// Configured half-width in samples
    pub fn half_width(&self) -> usize {
        self.half_width
    }
}

impl Default for BoxFilter {
    fn default() -> Self {
        Self { half_width: DEFAULT_BOX_HALF_WIDTH }
    }
}

impl Smoother for BoxFilter {
    fn smooth(&self, values: &[f64]) -> AnalysisResult<Vec<f64>> {
        box_average(values, self.half_width)
    }

    fn label(&self) -> String {
        format!("Box {}", self.half_width)
    }
}
