//! Time-series engine for logged temperature samples
//!
//! Takes a time-ordered sequence of [`Sample`]s and answers the questions a
//! temperature log is usually asked:
//!
//! - what did the last minute / hour / day / week look like
//!   ([`window`])
//! - what was the average over a range, in a chosen [`Unit`]
//!   ([`aggregate`])
//! - what is the signal underneath the ADC noise ([`smoothing`])
//! - how does a long span look at coarser resolution ([`bucket`])
//!
//! [`report`] ties these together per configured span, driven by an
//! [`AnalysisConfig`]. Logs are read through [`stream`].
//!
//! Everything is synchronous and works on borrowed input; nothing is
//! cached or mutated.
//!
//! ```no_run
//! use thermowatch_core::{report, stream, AnalysisConfig};
//!
//! let mut csv = stream::CsvSampleStream::open("temps.csv")?;
//! let samples = stream::collect_samples(&mut csv)?;
//!
//! let report = report::analyze(&samples, &AnalysisConfig::default())?;
//! for line in report.summary_lines() {
//!     println!("{}", line);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod aggregate;
pub mod bucket;
pub mod config;
pub mod constants;
pub mod errors;
pub mod report;
pub mod sample;
pub mod smoothing;
pub mod stream;
pub mod time;
pub mod traits;
pub mod window;

// Public API
pub use aggregate::{average, average_sample_leading, average_sample_trailing, summarize, Summary};
pub use bucket::{bucketize, Bucket};
pub use config::{AnalysisConfig, ConfigError, LowpassConfig};
pub use errors::{AnalysisError, AnalysisResult};
pub use report::{analyze, analyze_window, Report, WindowReport};
pub use sample::{Sample, Unit};
pub use smoothing::{box_average, lowpass};
pub use time::Timestamp;
pub use traits::{Smoother, Stream};
pub use window::{trailing_window, Window, WindowSpan};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
