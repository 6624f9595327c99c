//! Replay of samples already in memory
//!
//! Useful for tests and for re-running an analysis over a slice that was
//! loaded earlier.

use super::{Stream, StreamError};
use crate::sample::Sample;

/// Stream over a borrowed slice of samples
///
/// ```rust
/// use thermowatch_core::stream::{MemoryStream, Stream};
/// use thermowatch_core::Sample;
///
/// let samples = [Sample::new(1000, 0, 25.0, 77.0)];
/// let mut stream = MemoryStream::new(&samples);
/// assert_eq!(stream.poll_next().ok(), Some(samples[0]));
/// assert!(stream.is_exhausted());
/// ```
pub struct MemoryStream<'a> {
    /// Samples to replay
    samples: &'a [Sample],
    /// Current position
    position: usize,
}

impl<'a> MemoryStream<'a> {
    /// Create a stream positioned at the first sample
    pub fn new(samples: &'a [Sample]) -> Self {
        Self {
            samples,
            position: 0,
        }
    }

    /// Rewind to the first sample
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Index of the next sample
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if every sample has been handed out
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.samples.len()
    }
}

impl<'a> Stream for MemoryStream<'a> {
    type Item = Sample;
    type Error = StreamError<()>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        let sample = self
            .samples
            .get(self.position)
            .copied()
            .ok_or(nb::Error::Other(StreamError::EndOfStream))?;
        self.position += 1;
        Ok(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}
