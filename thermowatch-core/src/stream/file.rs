//! CSV sample logs
//!
//! The acquisition side appends one row per reading:
//!
//! ```csv
//! timestamp,raw,celsius,fahrenheit
//! 2023-03-14 08:15:02.318811,17342,3.6149,38.5068
//! 2023-03-14 08:15:03.319422,17339,3.6103,38.4986
//! ```
//!
//! The timestamp column accepts the ISO-8601 forms understood by
//! [`crate::time::parse_timestamp`] or a plain integer count of
//! milliseconds since the epoch.
//!
//! ## Tolerance
//!
//! Logs written across restarts are messy. The reader:
//! - skips a leading `timestamp,...` header line
//! - skips blank lines and lines starting with `#`
//! - skips rows that do not decode, counting them in
//!   [`IngestStats::parse_errors`] and logging a warning
//! - passes out-of-order timestamps through unchanged, counting them in
//!   [`IngestStats::out_of_order`]
//!
//! Only I/O failures end the stream early.
//!
//! A stream built [`with_strict(true)`](CsvSampleStream::with_strict)
//! instead reports each undecodable row as [`StreamError::Format`]. The row
//! is still counted, and polling again resumes at the next line.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::string::String;

use super::{IngestStats, Stream, StreamError};
use crate::sample::Sample;
use crate::time::{parse_timestamp, Timestamp};

/// Number of columns in a sample row
const CSV_FIELDS: usize = 4;

/// Stream of samples decoded from CSV text
///
/// ```rust,no_run
/// use thermowatch_core::stream::{collect_samples, CsvSampleStream};
///
/// let mut stream = CsvSampleStream::open("temps.csv")?;
/// let samples = collect_samples(&mut stream)?;
/// println!("{} samples, {} bad rows", samples.len(), stream.stats().parse_errors);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct CsvSampleStream<R> {
    /// Buffered source
    reader: BufReader<R>,
    /// Reused line buffer
    line: String,
    /// Source exhausted
    eof: bool,
    /// Timestamp of the last sample handed out
    last_timestamp: Option<Timestamp>,
    /// Counters
    stats: IngestStats,
    /// Report malformed rows instead of skipping them
    strict: bool,
}

impl CsvSampleStream<File> {
    /// Open a CSV log file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StreamError<std::io::Error>> {
        let file = File::open(path).map_err(StreamError::Transport)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> CsvSampleStream<R> {
    /// Read CSV text from any source
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line: String::new(),
            eof: false,
            last_timestamp: None,
            stats: IngestStats::default(),
            strict: false,
        }
    }

    /// Report malformed rows as [`StreamError::Format`] when `strict` is set
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Ingest counters so far
    pub fn stats(&self) -> &IngestStats {
        &self.stats
    }

    /// Classify and decode the line currently in the buffer
    ///
    /// `Ok(None)` means the line carried no sample. Decode failures are
    /// only returned in strict mode.
    fn decode_line(&mut self) -> Result<Option<Sample>, &'static str> {
        let line = self.line.trim();

        if line.is_empty() || line.starts_with('#') {
            self.stats.skipped_lines += 1;
            return Ok(None);
        }

        if self.stats.samples_read == 0
            && self.stats.parse_errors == 0
            && is_header(line)
        {
            self.stats.header_lines += 1;
            return Ok(None);
        }

        match parse_row(line) {
            Ok(sample) => Ok(Some(sample)),
            Err(reason) => {
                self.stats.parse_errors += 1;
                if self.strict {
                    return Err(reason);
                }
                log_warn!(
                    "Skipping malformed row at line {}: {}",
                    self.stats.lines_read,
                    reason
                );
                Ok(None)
            }
        }
    }

    fn accept(&mut self, sample: Sample) -> Sample {
        if let Some(previous) = self.last_timestamp {
            if sample.timestamp < previous {
                self.stats.out_of_order += 1;
                log_warn!(
                    "Out-of-order timestamp at line {}: {} < {}",
                    self.stats.lines_read,
                    sample.timestamp,
                    previous
                );
            }
        }
        self.last_timestamp = Some(sample.timestamp);
        self.stats.samples_read += 1;
        sample
    }
}

impl<R: Read> Stream for CsvSampleStream<R> {
    type Item = Sample;
    type Error = StreamError<std::io::Error>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        loop {
            if self.eof {
                return Err(nb::Error::Other(StreamError::EndOfStream));
            }

            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(|e| nb::Error::Other(StreamError::Transport(e)))?;

            if read == 0 {
                self.eof = true;
                log_debug!("CSV ingest finished: {:?}", self.stats);
                continue;
            }

            self.stats.lines_read += 1;
            match self.decode_line() {
                Ok(Some(sample)) => return Ok(self.accept(sample)),
                Ok(None) => {}
                Err(reason) => return Err(nb::Error::Other(StreamError::Format(reason))),
            }
        }
    }
}

fn is_header(line: &str) -> bool {
    line.split(',')
        .next()
        .map(|first| first.trim().trim_matches('"').eq_ignore_ascii_case("timestamp"))
        .unwrap_or(false)
}

/// Decode `timestamp,raw,celsius,fahrenheit`
fn parse_row(line: &str) -> Result<Sample, &'static str> {
    let mut fields: heapless::Vec<&str, CSV_FIELDS> = heapless::Vec::new();
    for field in line.split(',') {
        fields
            .push(field.trim().trim_matches('"'))
            .map_err(|_| "too many fields")?;
    }

    if fields.len() < CSV_FIELDS {
        return Err("expected 4 fields");
    }

    let timestamp = parse_timestamp(fields[0])
        .or_else(|| fields[0].parse::<Timestamp>().ok())
        .ok_or("invalid timestamp")?;
    let raw = fields[1].parse::<i32>().map_err(|_| "invalid raw count")?;
    let celsius = fields[2].parse::<f64>().map_err(|_| "invalid celsius value")?;
    let fahrenheit = fields[3].parse::<f64>().map_err(|_| "invalid fahrenheit value")?;

    Ok(Sample::new(timestamp, raw, celsius, fahrenheit))
}
