//! Series smoothers
//!
//! Two smoothers operate on a scalar series extracted from a window:
//!
//! | Smoother | Edges | Phase | Minimum length |
//! |----------|-------|-------|----------------|
//! | [`BoxFilter`] | truncated window | zero (symmetric) | none |
//! | [`Butterworth`] | odd reflection | zero (forward-backward) | `3 * (order + 1) + 1` |
//!
//! Both implement [`crate::traits::Smoother`] and are also exposed as plain
//! functions, [`box_average`] and [`lowpass`].

pub mod boxcar;
pub mod butterworth;

pub use boxcar::{box_average, BoxFilter};
pub use butterworth::{lowpass, Butterworth};
