//! Sample ingest
//!
//! Pull-based sources of [`Sample`]s:
//! - `memory` - replay of an in-memory slice
//! - `file` - CSV logs written by the acquisition side (requires `std`)
//!
//! [`collect_samples`] drains any source into the time-ordered `Vec` the
//! analysis functions take.

use alloc::vec::Vec;
use core::fmt;

use crate::sample::Sample;

pub mod memory;

#[cfg(feature = "std")]
pub mod file;

pub use memory::MemoryStream;

#[cfg(feature = "std")]
pub use file::CsvSampleStream;

pub use crate::traits::Stream;

/// Errors that can occur while reading samples
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError<E> {
    /// Transport-level error (e.g., I/O error)
    Transport(E),
    /// A record could not be decoded
    Format(&'static str),
    /// End of stream reached
    EndOfStream,
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::Format(msg) => write!(f, "Format error: {}", msg),
            Self::EndOfStream => write!(f, "End of stream"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug + fmt::Display> std::error::Error for StreamError<E> {}

/// Counters kept while ingesting a log
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Lines read from the source, including skipped ones
    pub lines_read: usize,
    /// Samples handed out
    pub samples_read: usize,
    /// Header lines skipped
    pub header_lines: usize,
    /// Blank and `#` comment lines skipped
    pub skipped_lines: usize,
    /// Malformed rows, skipped or reported
    pub parse_errors: usize,
    /// Samples whose timestamp is earlier than the one before
    pub out_of_order: usize,
}

/// Drain `stream` into a vector, in arrival order
///
/// `WouldBlock` is retried; the first error other than
/// [`StreamError::EndOfStream`] is returned. Samples are not re-sorted.
pub fn collect_samples<S, E>(stream: &mut S) -> Result<Vec<Sample>, StreamError<E>>
where
    S: Stream<Item = Sample, Error = StreamError<E>>,
{
    let (lower, _) = stream.size_hint();
    let mut samples = Vec::with_capacity(lower);

    loop {
        match stream.poll_next() {
            Ok(sample) => samples.push(sample),
            Err(nb::Error::WouldBlock) => continue,
            Err(nb::Error::Other(StreamError::EndOfStream)) => break,
            Err(nb::Error::Other(e)) => return Err(e),
        }
    }

    log_debug!("Collected {} samples", samples.len());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn stream_error_display() {
        let err: StreamError<&str> = StreamError::Transport("port closed");
        assert_eq!(format!("{}", err), "Transport error: port closed");

        let err: StreamError<&str> = StreamError::Format("bad raw count");
        assert_eq!(format!("{}", err), "Format error: bad raw count");

        let err: StreamError<&str> = StreamError::EndOfStream;
        assert_eq!(format!("{}", err), "End of stream");
    }

    #[test]
    fn collect_from_memory() {
        let samples = [Sample::new(0, 1, 1.0, 33.8), Sample::new(1000, 2, 2.0, 35.6)];
        let mut stream = MemoryStream::new(&samples);
        assert_eq!(collect_samples(&mut stream).unwrap(), samples.to_vec());
    }

    /// Yields `WouldBlock` between items
    struct Stuttering {
        pending: Vec<Sample>,
        ready: bool,
    }

    impl Stream for Stuttering {
        type Item = Sample;
        type Error = StreamError<()>;

        fn poll_next(&mut self) -> nb::Result<Sample, StreamError<()>> {
            self.ready = !self.ready;
            if !self.ready {
                return Err(nb::Error::WouldBlock);
            }
            if self.pending.is_empty() {
                return Err(nb::Error::Other(StreamError::EndOfStream));
            }
            Ok(self.pending.remove(0))
        }
    }

    #[test]
    fn collect_retries_would_block() {
        let pending = vec![Sample::new(0, 0, 0.0, 32.0), Sample::new(5, 0, 0.0, 32.0)];
        let mut stream = Stuttering { pending: pending.clone(), ready: false };
        assert_eq!(collect_samples(&mut stream).unwrap(), pending);
    }

    #[test]
    fn collect_propagates_errors() {
        struct Broken;
        impl Stream for Broken {
            type Item = Sample;
            type Error = StreamError<&'static str>;
            fn poll_next(&mut self) -> nb::Result<Sample, Self::Error> {
                Err(nb::Error::Other(StreamError::Transport("unplugged")))
            }
        }
        assert_eq!(
            collect_samples(&mut Broken),
            Err(StreamError::Transport("unplugged"))
        );
    }
}
