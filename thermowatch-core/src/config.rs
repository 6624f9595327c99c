//! Analysis run configuration
//!
//! One [`AnalysisConfig`] drives a whole report: the unit every span is
//! computed in, both smoother settings, optional bucketing and the list of
//! spans. Missing JSON fields fall back to the defaults of the standard
//! charts:
//!
//! ```json
//! {
//!   "unit": "fahrenheit",
//!   "box_half_width": 10,
//!   "lowpass": { "order": 1, "cutoff": 0.03 },
//!   "bucket_interval_ms": null,
//!   "windows": ["minute", "hour", "day", "week"]
//! }
//! ```
//!
//! Values are checked by [`AnalysisConfig::validate`] up front, so a bad
//! cutoff is reported once as a [`ConfigError`] instead of once per span.

use alloc::{string::String, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::{
    constants::analysis::{
        DEFAULT_BOX_HALF_WIDTH, DEFAULT_LOWPASS_CUTOFF, DEFAULT_LOWPASS_ORDER, MAX_LOWPASS_ORDER,
    },
    sample::Unit,
    smoothing::{BoxFilter, Butterworth},
    window::WindowSpan,
    errors::AnalysisResult,
};

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field holds a value outside its legal range
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The document is not valid JSON for this schema
    #[error("Config parse error: {0}")]
    Parse(String),

    /// The config file could not be read
    #[error("Cannot read config file {path}: {message}")]
    Io {
        /// Path as given by the caller
        path: String,
        /// Underlying I/O error text
        message: String,
    },
}

/// Butterworth settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LowpassConfig {
    /// Filter order, `1..=8`
    pub order: usize,
    /// Cutoff as a fraction of Nyquist, strictly between 0 and 1
    pub cutoff: f64,
}

impl Default for LowpassConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_LOWPASS_ORDER,
            cutoff: DEFAULT_LOWPASS_CUTOFF,
        }
    }
}

impl LowpassConfig {
    /// Design the configured filter
    pub fn filter(&self) -> AnalysisResult<Butterworth> {
        Butterworth::lowpass(self.order, self.cutoff)
    }
}

/// Settings for one analysis run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Unit every span is computed in
    pub unit: Unit,
    /// Box smoother half-width in samples
    pub box_half_width: usize,
    /// Low-pass smoother settings
    pub lowpass: LowpassConfig,
    /// Re-aggregate each span into buckets of this many milliseconds
    pub bucket_interval_ms: Option<u64>,
    /// Spans to report, in output order
    pub windows: Vec<WindowSpan>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            box_half_width: DEFAULT_BOX_HALF_WIDTH,
            lowpass: LowpassConfig::default(),
            bucket_interval_ms: None,
            windows: WindowSpan::STANDARD.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Check every field against its legal range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.box_half_width == 0 {
            return Err(ConfigError::Invalid {
                field: "box_half_width",
                reason: "must be at least 1",
            });
        }
        if self.lowpass.order == 0 || self.lowpass.order > MAX_LOWPASS_ORDER {
            return Err(ConfigError::Invalid {
                field: "lowpass.order",
                reason: "must be between 1 and 8",
            });
        }
        let cutoff = self.lowpass.cutoff;
        if !(cutoff > 0.0 && cutoff < 1.0) {
            return Err(ConfigError::Invalid {
                field: "lowpass.cutoff",
                reason: "must lie strictly between 0 and 1",
            });
        }
        if self.bucket_interval_ms == Some(0) {
            return Err(ConfigError::Invalid {
                field: "bucket_interval_ms",
                reason: "must be positive when set",
            });
        }
        if self.windows.is_empty() {
            return Err(ConfigError::Invalid {
                field: "windows",
                reason: "at least one span is required",
            });
        }
        Ok(())
    }

    /// Box smoother for this run
    pub fn box_filter(&self) -> AnalysisResult<BoxFilter> {
        BoxFilter::new(self.box_half_width)
    }

    /// Parse and validate a JSON document
    #[cfg(feature = "std")]
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    #[cfg(feature = "std")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        log_debug!("Loaded analysis config from {}", path.display());
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_charts() {
        let config = AnalysisConfig::default();
        assert_eq!(config.unit, Unit::Fahrenheit);
        assert_eq!(config.box_half_width, 10);
        assert_eq!(config.lowpass.order, 1);
        assert_eq!(config.lowpass.cutoff, 0.03);
        assert_eq!(config.bucket_interval_ms, None);
        assert_eq!(config.windows, WindowSpan::STANDARD.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_rejects_each_bad_field() {
        let bad = [
            AnalysisConfig { box_half_width: 0, ..Default::default() },
            AnalysisConfig {
                lowpass: LowpassConfig { order: 9, cutoff: 0.1 },
                ..Default::default()
            },
            AnalysisConfig {
                lowpass: LowpassConfig { order: 1, cutoff: 1.0 },
                ..Default::default()
            },
            AnalysisConfig { bucket_interval_ms: Some(0), ..Default::default() },
            AnalysisConfig { windows: Vec::new(), ..Default::default() },
        ];
        let fields = [
            "box_half_width",
            "lowpass.order",
            "lowpass.cutoff",
            "bucket_interval_ms",
            "windows",
        ];

        for (config, expected) in bad.iter().zip(fields) {
            match config.validate() {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {} to be rejected, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn nan_cutoff_rejected() {
        let config = AnalysisConfig {
            lowpass: LowpassConfig { order: 1, cutoff: f64::NAN },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn partial_json_uses_defaults() {
        let config = AnalysisConfig::from_json_str(
            r#"{ "unit": "celsius", "lowpass": { "order": 2 }, "bucket_interval_ms": 60000 }"#,
        )
        .unwrap();

        assert_eq!(config.unit, Unit::Celsius);
        assert_eq!(config.lowpass.order, 2);
        assert_eq!(config.lowpass.cutoff, DEFAULT_LOWPASS_CUTOFF);
        assert_eq!(config.bucket_interval_ms, Some(60_000));
        assert_eq!(config.box_half_width, DEFAULT_BOX_HALF_WIDTH);
        assert_eq!(config.windows.len(), 4);
    }

    #[cfg(feature = "std")]
    #[test]
    fn custom_spans_parse() {
        let config = AnalysisConfig::from_json_str(
            r#"{ "windows": ["month", { "custom": { "millis": 5000 } }] }"#,
        )
        .unwrap();
        assert_eq!(
            config.windows,
            vec![WindowSpan::Month, WindowSpan::Custom { millis: 5000 }]
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn json_errors() {
        assert!(matches!(
            AnalysisConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{ "unit": "kelvin" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{ "box_half_width": 0 }"#),
            Err(ConfigError::Invalid { field: "box_half_width", .. })
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            AnalysisConfig::from_file("/nonexistent/thermowatch.json"),
            Err(ConfigError::Io { .. })
        ));
    }
}
