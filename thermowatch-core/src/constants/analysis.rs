//! Analysis Parameters
//!
//! Defaults for the smoothers and limits enforced on caller-supplied
//! filter parameters.

// ===== BOX (MOVING AVERAGE) SMOOTHER =====

/// Default half-width of the box smoother, in samples.
///
/// Charts label this trace "Box 10".
pub const DEFAULT_BOX_HALF_WIDTH: usize = 10;

// ===== LOW-PASS SMOOTHER =====

/// Default Butterworth order.
pub const DEFAULT_LOWPASS_ORDER: usize = 1;

/// Default cutoff as a fraction of the Nyquist frequency.
///
/// At 1 Hz sampling this is 0.015 Hz, i.e. features shorter than roughly
/// a minute are attenuated.
pub const DEFAULT_LOWPASS_CUTOFF: f64 = 0.03;

/// Highest Butterworth order the designer accepts.
///
/// Above this the direct-form polynomial coefficients lose too much
/// precision in `f64` for cutoffs near the low end of the band.
pub const MAX_LOWPASS_ORDER: usize = 8;

/// Number of coefficients of the highest-order filter (`order + 1`).
pub const MAX_LOWPASS_COEFFS: usize = MAX_LOWPASS_ORDER + 1;

/// Edge padding factor of the forward-backward filter.
///
/// The series is extended by `PADDING_FACTOR * (order + 1)` samples of odd
/// reflection on each side before filtering.
pub const PADDING_FACTOR: usize = 3;

// ===== DISPLAY =====

/// Decimal places used when rendering Celsius and Fahrenheit values.
pub const DISPLAY_DECIMALS: usize = 2;
