//! Per-span analysis bundles
//!
//! A [`WindowReport`] holds everything a chart of one span needs: the
//! window itself, the raw series in the run's unit, both smoothed series,
//! the span average and, if configured, the bucketed series. [`analyze`]
//! builds one per configured span plus the latest sample.
//!
//! The low-pass series is stored as a `Result`. A minute of 1 Hz data is
//! long enough for every supported order, but a sparse log may leave a
//! span with only a handful of samples; the report keeps the
//! [`AnalysisError::InsufficientData`] for that span and the remaining
//! fields stay usable. Raw data is never substituted for a failed filter.
//!
//! ```rust
//! use thermowatch_core::{report, AnalysisConfig, Sample};
//!
//! let samples: Vec<Sample> = (0..120u64)
//!     .map(|i| Sample::new(i * 1000, 0, 21.0, if i == 119 { 75.0 } else { 70.0 }))
//!     .collect();
//!
//! let report = report::analyze(&samples, &AnalysisConfig::default())?;
//! let lines = report.summary_lines();
//! assert_eq!(lines[0], "Last sample: 75.00 F");
//! assert_eq!(lines[1], "Last minute: 70.08 F");
//! # Ok::<(), thermowatch_core::AnalysisError>(())
//! ```

use alloc::{format, string::String, vec::Vec};

use crate::{
    aggregate::average,
    bucket::{bucketize, Bucket},
    config::AnalysisConfig,
    errors::{AnalysisError, AnalysisResult},
    sample::{values, Sample, Unit},
    traits::Smoother,
    window::{trailing_span, Window, WindowSpan},
};

/// Analysis of one trailing span
#[derive(Debug, Clone, PartialEq)]
pub struct WindowReport<'a> {
    /// Requested span
    pub span: WindowSpan,
    /// Samples covered by the span
    pub window: Window<'a>,
    /// Unit all series below are expressed in
    pub unit: Unit,
    /// Window values in `unit`
    pub values: Vec<f64>,
    /// Box-averaged values
    pub box_smoothed: Vec<f64>,
    /// Zero-phase low-pass values, or why they could not be computed
    pub lowpass: Result<Vec<f64>, AnalysisError>,
    /// Mean of `values`
    pub average: f64,
    /// Bucketed window, when a bucket interval is configured
    pub buckets: Option<Vec<Bucket>>,
}

impl WindowReport<'_> {
    /// `Last hour: 70.08 F`
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.span, self.unit.format(self.average))
    }
}

/// Analysis of every configured span
#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    /// Most recent sample of the input
    pub latest: Sample,
    /// Unit of every value in the report
    pub unit: Unit,
    /// One entry per configured span, in configuration order
    pub windows: Vec<WindowReport<'a>>,
}

impl Report<'_> {
    /// Console summary: the latest sample, then one average per span
    ///
    /// ```text
    /// Last sample: 70.52 F
    /// Last minute: 70.48 F
    /// Last hour: 70.13 F
    /// ```
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.windows.len() + 1);
        lines.push(format!(
            "Last sample: {}",
            self.unit.format(self.unit.value_of(&self.latest))
        ));
        lines.extend(self.windows.iter().map(WindowReport::summary_line));
        lines
    }

    /// Report for `span`, if it was configured
    pub fn window(&self, span: WindowSpan) -> Option<&WindowReport<'_>> {
        self.windows.iter().find(|w| w.span == span)
    }
}

/// Analyze the trailing `span` of `samples`
///
/// Parameter errors (box half-width, filter design, bucket interval)
/// abort the call. A series too short for the low-pass filter does not;
/// see the module docs.
///
/// # Errors
///
/// - [`AnalysisError::EmptyInput`] if `samples` is empty
/// - [`AnalysisError::InvalidFilterParameter`] for out-of-range settings
pub fn analyze_window<'a>(
    samples: &'a [Sample],
    span: WindowSpan,
    config: &AnalysisConfig,
) -> AnalysisResult<WindowReport<'a>> {
    let box_filter = config.box_filter()?;
    let lowpass_filter = config.lowpass.filter()?;

    let window = trailing_span(samples, span)?;
    let unit = config.unit;
    let series = values(window.samples(), unit);

    let box_smoothed = box_filter.smooth(&series)?;
    let lowpass = lowpass_filter.smooth(&series);
    if let Err(_err) = &lowpass {
        log_debug!("{}: low-pass skipped: {}", span, _err);
    }
    let average = average(window.samples(), unit)?;

    let buckets = match config.bucket_interval_ms {
        Some(interval) => Some(bucketize(window.samples(), interval)?),
        None => None,
    };

    Ok(WindowReport {
        span,
        window,
        unit,
        values: series,
        box_smoothed,
        lowpass,
        average,
        buckets,
    })
}

/// Analyze every span in `config.windows`
///
/// # Errors
///
/// As [`analyze_window`].
pub fn analyze<'a>(samples: &'a [Sample], config: &AnalysisConfig) -> AnalysisResult<Report<'a>> {
    let latest = *samples.last().ok_or(AnalysisError::EmptyInput)?;

    let windows = config
        .windows
        .iter()
        .map(|&span| analyze_window(samples, span, config))
        .collect::<AnalysisResult<Vec<_>>>()?;

    Ok(Report {
        latest,
        unit: config.unit,
        windows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LowpassConfig;

    fn steady_with_spike() -> Vec<Sample> {
        (0..120u64)
            .map(|i| {
                let f = if i == 119 { 75.0 } else { 70.0 };
                Sample::new(i * 1000, 17_000, (f - 32.0) / 1.8, f)
            })
            .collect()
    }

    #[test]
    fn minute_report_scenario() {
        let samples = steady_with_spike();
        let report =
            analyze_window(&samples, WindowSpan::Minute, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.window.start_index(), 59);
        assert_eq!(report.values.len(), 61);
        assert_eq!(report.box_smoothed.len(), 61);
        assert_eq!(report.lowpass.as_ref().map(Vec::len), Ok(61));
        assert!((report.average - (60.0 * 70.0 + 75.0) / 61.0).abs() < 1e-9);
        assert!(report.buckets.is_none());
        assert!(!report.window.truncated_by_availability());
    }

    #[test]
    fn short_span_keeps_lowpass_error() {
        let samples: Vec<Sample> = (0..5u64).map(|i| Sample::new(i * 1000, 0, 0.0, 32.0)).collect();
        let report =
            analyze_window(&samples, WindowSpan::Minute, &AnalysisConfig::default()).unwrap();

        assert_eq!(
            report.lowpass,
            Err(AnalysisError::InsufficientData { required: 7, available: 5 })
        );
        assert_eq!(report.box_smoothed, report.values);
        assert!(report.window.truncated_by_availability());
    }

    #[test]
    fn bad_parameters_abort() {
        let samples = steady_with_spike();
        let config = AnalysisConfig {
            lowpass: LowpassConfig { order: 0, cutoff: 0.03 },
            ..Default::default()
        };
        assert!(matches!(
            analyze_window(&samples, WindowSpan::Minute, &config),
            Err(AnalysisError::InvalidFilterParameter { parameter: "order", .. })
        ));
    }

    #[test]
    fn buckets_when_configured() {
        let samples = steady_with_spike();
        let config = AnalysisConfig {
            bucket_interval_ms: Some(20_000),
            ..Default::default()
        };
        let report = analyze_window(&samples, WindowSpan::Minute, &config).unwrap();
        let counts: Vec<usize> = report
            .buckets
            .unwrap()
            .iter()
            .map(Bucket::count)
            .collect();
        assert_eq!(counts, [20, 20, 20, 1]);
    }

    #[test]
    fn full_report_lines() {
        let samples = steady_with_spike();
        let config = AnalysisConfig {
            unit: Unit::Celsius,
            windows: vec![WindowSpan::Minute, WindowSpan::Hour],
            ..Default::default()
        };
        let report = analyze(&samples, &config).unwrap();

        assert_eq!(report.latest, samples[119]);
        assert_eq!(report.windows.len(), 2);
        assert_eq!(report.window(WindowSpan::Hour).unwrap().values.len(), 120);
        assert!(report.window(WindowSpan::Day).is_none());

        let lines = report.summary_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Last sample: 23.89 C");
        assert!(lines[1].starts_with("Last minute: "));
        assert!(lines[2].starts_with("Last hour: 21.1"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            analyze(&[], &AnalysisConfig::default()).unwrap_err(),
            AnalysisError::EmptyInput
        );
    }
}
