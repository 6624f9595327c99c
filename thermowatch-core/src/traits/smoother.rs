//! Series Smoothing Trait
//!
//! A smoother maps a scalar series to a smoothed series of the same length.
//! Both built-in smoothers operate on the whole series at once:
//!
//! - [`crate::smoothing::BoxFilter`]: truncated-edge moving average
//! - [`crate::smoothing::Butterworth`]: zero-phase low-pass
//!
//! The zero-phase filter needs samples on both sides of every output point,
//! so the contract is batch-only. There is no per-sample `push`.
//!
//! ## Example: Median-of-three smoother
//!
//! ```rust
//! use thermowatch_core::traits::Smoother;
//! use thermowatch_core::AnalysisResult;
//!
//! struct Median3;
//!
//! impl Smoother for Median3 {
//!     fn smooth(&self, values: &[f64]) -> AnalysisResult<Vec<f64>> {
//!         Ok((0..values.len())
//!             .map(|i| {
//!                 let lo = i.saturating_sub(1);
//!                 let hi = (i + 2).min(values.len());
//!                 let mut w = values[lo..hi].to_vec();
//!                 w.sort_by(|a, b| a.partial_cmp(b).unwrap());
//!                 w[w.len() / 2]
//!             })
//!             .collect())
//!     }
//!
//!     fn label(&self) -> String {
//!         "Median 3".into()
//!     }
//! }
//!
//! let out = Median3.smooth(&[1.0, 9.0, 2.0, 3.0]).unwrap();
//! assert_eq!(out.len(), 4);
//! ```

use alloc::{string::String, vec::Vec};

use crate::errors::AnalysisResult;

/// Batch smoother over a scalar series
pub trait Smoother {
    /// Smooth `values`, returning a series of the same length
    ///
    /// Implementations must not return the input unchanged when they cannot
    /// filter it; they return an error instead.
    fn smooth(&self, values: &[f64]) -> AnalysisResult<Vec<f64>>;

    /// Legend label for charts, e.g. `Box 10`
    fn label(&self) -> String;
}
