//! Reading sample logs and config files from disk

#![cfg(feature = "std")]

mod common;

use std::io::Write;

use tempfile::NamedTempFile;
use thermowatch_core::{
    analyze,
    stream::{collect_samples, CsvSampleStream, Stream, StreamError},
    AnalysisConfig, ConfigError, Unit, WindowSpan,
};

use common::START;

fn write_log(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn csv_log_to_report() {
    let mut rows = vec!["timestamp,raw,celsius,fahrenheit".to_string()];
    for i in 0..180 {
        let f = 68.0 + (i % 3) as f64 * 0.1;
        let c = (f - 32.0) / 1.8;
        rows.push(format!(
            "2023-03-14 00:{:02}:{:02}.000000,{},{:.4},{:.4}",
            i / 60,
            i % 60,
            17_000 + i,
            c,
            f
        ));
    }
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let file = write_log(&refs);

    let mut stream = CsvSampleStream::open(file.path()).unwrap();
    let samples = collect_samples(&mut stream).unwrap();

    assert_eq!(samples.len(), 180);
    assert_eq!(samples[0].timestamp, START);
    assert_eq!(samples[179].timestamp, START + 179_000);
    assert_eq!(stream.stats().header_lines, 1);
    assert_eq!(stream.stats().parse_errors, 0);

    let config = AnalysisConfig {
        windows: vec![WindowSpan::Minute],
        ..Default::default()
    };
    let report = analyze(&samples, &config).unwrap();
    assert_eq!(report.windows[0].values.len(), 61);
    assert_eq!(report.summary_lines()[0], "Last sample: 68.20 F");
}

#[test]
fn messy_log_is_tolerated() {
    let file = write_log(&[
        "timestamp,raw,celsius,fahrenheit",
        "2023-03-14T00:00:00,17342,3.61,38.50",
        "",
        "# logger restarted",
        "2023-03-14T00:00:01,17342,3.61",
        "2023-03-14T00:00:02,17340,3.60,38.48",
        "2023-03-14T00:00:01,17341,3.60,38.49",
    ]);

    let mut stream = CsvSampleStream::open(file.path()).unwrap();
    let samples = collect_samples(&mut stream).unwrap();
    let stats = *stream.stats();

    assert_eq!(samples.len(), 3);
    assert_eq!(stats.lines_read, 7);
    assert_eq!(stats.skipped_lines, 2);
    assert_eq!(stats.parse_errors, 1);
    assert_eq!(stats.out_of_order, 1);
    // Arrival order is kept
    assert_eq!(samples[2].timestamp, START + 1000);
}

#[test]
fn end_of_stream_is_sticky() {
    let file = write_log(&["1000,1,1.0,33.8"]);
    let mut stream = CsvSampleStream::open(file.path()).unwrap();

    assert!(stream.poll_next().is_ok());
    for _ in 0..3 {
        assert!(matches!(
            stream.poll_next(),
            Err(nb::Error::Other(StreamError::EndOfStream))
        ));
    }
}

#[test]
fn missing_log_is_transport_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CsvSampleStream::open(dir.path().join("absent.csv"));
    assert!(matches!(result, Err(StreamError::Transport(_))));
}

#[test]
fn config_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "unit": "raw",
            "box_half_width": 5,
            "lowpass": {{ "order": 3, "cutoff": 0.1 }},
            "bucket_interval_ms": 600000,
            "windows": ["hour", "day"]
        }}"#
    )
    .unwrap();
    file.flush().unwrap();

    let config = AnalysisConfig::from_file(file.path()).unwrap();
    assert_eq!(config.unit, Unit::Raw);
    assert_eq!(config.box_half_width, 5);
    assert_eq!(config.lowpass.order, 3);
    assert_eq!(config.bucket_interval_ms, Some(600_000));
    assert_eq!(config.windows, vec![WindowSpan::Hour, WindowSpan::Day]);

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(AnalysisConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn invalid_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "lowpass": {{ "cutoff": 1.5 }} }}"#).unwrap();
    file.flush().unwrap();

    assert!(matches!(
        AnalysisConfig::from_file(file.path()),
        Err(ConfigError::Invalid { field: "lowpass.cutoff", .. })
    ));
}

#[test]
fn strict_ingest_stops_at_first_bad_row() {
    let file = write_log(&[
        "timestamp,raw,celsius,fahrenheit",
        "2023-03-14T00:00:00,17342,3.61,38.50",
        "2023-03-14T00:00:01,17342,3.61",
        "2023-03-14T00:00:02,17340,3.60,38.48",
    ]);

    let mut stream = CsvSampleStream::open(file.path()).unwrap().with_strict(true);
    let err = collect_samples(&mut stream).unwrap_err();

    assert!(matches!(err, StreamError::Format("expected 4 fields")));
    assert_eq!(err.to_string(), "Format error: expected 4 fields");
    assert_eq!(stream.stats().samples_read, 1);
    assert_eq!(stream.stats().parse_errors, 1);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn huge_box_half_width_from_config() {
    let config = AnalysisConfig::from_json_str(
        r#"{ "box_half_width": 18446744073709551615, "windows": ["minute"] }"#,
    )
    .unwrap();
    assert_eq!(config.box_half_width, usize::MAX);

    let samples: Vec<_> = [68.0, 70.0, 72.0]
        .iter()
        .enumerate()
        .map(|(i, &f)| thermowatch_core::Sample::new(START + i as u64 * 1000, 0, (f - 32.0) / 1.8, f))
        .collect();
    let report = analyze(&samples, &config).unwrap();
    assert_eq!(report.windows[0].box_smoothed, vec![70.0, 70.0, 70.0]);
}
