//! Sample Source Trait
//!
//! Samples reach the engine through a pull-based source built on the `nb`
//! crate. A source hands out one item per call and signals "nothing yet"
//! with `nb::Error::WouldBlock`, so the same trait covers a finished log
//! file and a logger that is still being appended to.
//!
//! ```rust
//! use thermowatch_core::traits::Stream;
//! use thermowatch_core::stream::{MemoryStream, StreamError};
//! use thermowatch_core::Sample;
//!
//! let samples = [Sample::new(0, 0, 20.0, 68.0), Sample::new(1000, 0, 20.5, 68.9)];
//! let mut stream = MemoryStream::new(&samples);
//!
//! let mut warmest = f64::MIN;
//! loop {
//!     match stream.poll_next() {
//!         Ok(sample) => warmest = warmest.max(sample.fahrenheit),
//!         Err(nb::Error::WouldBlock) => continue,
//!         Err(nb::Error::Other(StreamError::EndOfStream)) => break,
//!         Err(nb::Error::Other(e)) => panic!("{:?}", e),
//!     }
//! }
//! assert_eq!(warmest, 68.9);
//! ```

/// Pull-based source of items
///
/// ## Error Handling
///
/// Two levels, as with every `nb` API:
/// - `nb::Error::WouldBlock`: no item available yet, poll again
/// - `nb::Error::Other(E)`: the source failed or ended
///
/// Sources that can end report it through their error type (see
/// [`crate::stream::StreamError::EndOfStream`]) and keep reporting it on
/// every later call.
pub trait Stream {
    /// Type of items produced by the stream
    type Item;

    /// Type of errors that can occur
    type Error;

    /// Attempt to pull the next item
    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error>;

    /// Bounds on the number of remaining items, as `Iterator::size_hint`
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}
