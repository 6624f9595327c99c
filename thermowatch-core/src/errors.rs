//! Error Types for Time-Series Analysis
//!
//! ## Design Philosophy
//!
//! Every analysis operation is a pure function over caller-owned data, so
//! errors are raised at the point of detection and returned to the caller.
//! Nothing inside the engine retries, logs-and-swallows, or substitutes a
//! default result.
//!
//! Errors stay small and `Copy`: messages are `&'static str`, counts are
//! `usize`. They can be stored alongside results (a window report keeps a
//! failed low-pass run as its error) without allocation.
//!
//! ## Error Categories
//!
//! - `EmptyInput`: an aggregate, window or bucket was requested over zero
//!   samples. There is no "average of nothing".
//! - `InvalidFilterParameter`: a smoother or bucketizer parameter is outside
//!   its legal range. Never clamped; the caller must pick another value.
//! - `InsufficientData`: the series is too short for the requested filter
//!   order. The caller may fall back to a lower order or skip smoothing.
//!
//! A window that asks for more history than exists is *not* an error; see
//! [`crate::window::Window::truncated_by_availability`].
//!
//! ```rust
//! use thermowatch_core::{smoothing, AnalysisError};
//!
//! let short = [70.0, 70.5, 71.0];
//! match smoothing::lowpass(&short, 2, 0.1) {
//!     Ok(_) => unreachable!(),
//!     Err(AnalysisError::InsufficientData { required, available }) => {
//!         assert_eq!(available, 3);
//!         assert!(required > available);
//!     }
//!     Err(other) => panic!("unexpected {other}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Analysis errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    /// Operation invoked on a zero-length sequence
    #[error("Empty input: operation needs at least one sample")]
    EmptyInput,

    /// Smoother or bucketizer parameter outside its legal range
    #[error("Invalid parameter `{parameter}`: {reason}")]
    InvalidFilterParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Series too short for the requested filter
    #[error("Insufficient data: need {required} samples, have {available}")]
    InsufficientData {
        /// Minimum series length for the filter
        required: usize,
        /// Actual series length
        available: usize,
    },
}

impl AnalysisError {
    /// Whether the caller can recover by retrying with other parameters
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFilterParameter { .. } | Self::InsufficientData { .. }
        )
    }
}
