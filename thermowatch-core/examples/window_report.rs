//! Window report over a CSV temperature log
//!
//! Usage:
//!
//! ```text
//! cargo run --example window_report -- temps.csv [config.json]
//! ```
//!
//! Without arguments a synthetic two-hour log is analyzed instead.

use std::env;
use std::error::Error;

use thermowatch_core::{
    analyze,
    stream::{collect_samples, CsvSampleStream},
    time::format_timestamp,
    AnalysisConfig, Sample, Smoother, WindowSpan,
};

fn synthetic_log() -> Vec<Sample> {
    (0..7200u64)
        .map(|i| {
            let wobble = if i % 2 == 0 { 0.3 } else { -0.3 };
            let f = 67.0 + i as f64 / 7200.0 * 3.0 + wobble;
            Sample::new(
                1_678_752_000_000 + i * 1000,
                17_000 + (f * 10.0) as i32,
                (f - 32.0) / 1.8,
                f,
            )
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let samples = match args.first() {
        Some(path) => {
            let mut stream = CsvSampleStream::open(path)?;
            let samples = collect_samples(&mut stream)?;
            let stats = stream.stats();
            println!(
                "Read {} samples from {} ({} malformed rows, {} out of order)",
                stats.samples_read, path, stats.parse_errors, stats.out_of_order
            );
            samples
        }
        None => {
            println!("No log given, using a synthetic two-hour series");
            synthetic_log()
        }
    };

    let config = match args.get(1) {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig {
            windows: vec![WindowSpan::Minute, WindowSpan::Hour, WindowSpan::Day],
            bucket_interval_ms: Some(15 * 60 * 1000),
            ..Default::default()
        },
    };

    let report = analyze(&samples, &config)?;

    println!();
    for line in report.summary_lines() {
        println!("{}", line);
    }

    let box_label = config.box_filter()?.label();
    let lowpass_label = config.lowpass.filter()?.label();

    for window in &report.windows {
        println!();
        println!(
            "{} ({} samples from {}{})",
            window.span,
            window.window.len(),
            format_timestamp(window.window.first().timestamp).unwrap_or_default(),
            if window.window.truncated_by_availability() {
                ", limited by available data"
            } else {
                ""
            }
        );

        let last = window.values.len() - 1;
        println!("  raw      {}", config.unit.format(window.values[last]));
        println!("  {:<8} {}", box_label, config.unit.format(window.box_smoothed[last]));
        match &window.lowpass {
            Ok(series) => println!("  {:<8} {}", lowpass_label, config.unit.format(series[last])),
            Err(e) => println!("  {:<8} unavailable: {}", lowpass_label, e),
        }

        if let Some(buckets) = &window.buckets {
            for bucket in buckets {
                println!(
                    "  bucket {} x{:<5} {}",
                    format_timestamp(bucket.start).unwrap_or_default(),
                    bucket.count(),
                    config.unit.format(config.unit.value_of(&bucket.sample))
                );
            }
        }
    }

    Ok(())
}
