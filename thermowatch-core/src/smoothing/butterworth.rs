//! Zero-phase Butterworth low-pass
//!
//! ## Design
//!
//! The digital filter is derived from the analog Butterworth prototype by the
//! bilinear transform with frequency pre-warping. The cutoff is given as a
//! fraction of the Nyquist frequency, so `0.5` is a quarter of the sample
//! rate whatever that rate is.
//!
//! ```text
//! analog poles     p_m = -w * exp(i*pi*m / 2N),  m = -N+1, -N+3, .., N-1
//! pre-warped edge  w   = 4 * tan(pi * cutoff / 2)
//! digital poles    z_m = (4 + p_m) / (4 - p_m)
//! zeros            N at z = -1
//! ```
//!
//! The coefficients are kept in direct form: `b` (numerator) and `a`
//! (denominator, `a[0] == 1`), `order + 1` each.
//!
//! ## Zero-phase application
//!
//! [`Butterworth::filtfilt`] runs the filter forward, then backward over the
//! reversed output. Phase shifts cancel, so smoothed features line up with
//! the raw series in time. Edges are handled by:
//!
//! 1. odd reflection of `3 * (order + 1)` samples on each side
//!    (`2*x[0] - x[k]` on the left, `2*x[n-1] - x[n-1-k]` on the right)
//! 2. initial filter state set to the step-response steady state scaled by
//!    the first sample of each pass
//!
//! The padding needs strictly more samples than its own length; shorter
//! series are refused with [`AnalysisError::InsufficientData`].

use alloc::{format, string::String, vec::Vec};
use core::f64::consts::PI;
use core::ops::{Add, Div, Mul, Sub};

use heapless::Vec as BoundedVec;

use crate::{
    constants::analysis::{MAX_LOWPASS_COEFFS, MAX_LOWPASS_ORDER, PADDING_FACTOR},
    errors::{AnalysisError, AnalysisResult},
    traits::Smoother,
};

/// Filter coefficients of the highest supported order fit inline
type Coefficients = BoundedVec<f64, MAX_LOWPASS_COEFFS>;

/// Digital Butterworth low-pass filter
#[derive(Debug, Clone, PartialEq)]
pub struct Butterworth {
    order: usize,
    cutoff: f64,
    b: Coefficients,
    a: Coefficients,
}

impl Butterworth {
    /// Design a low-pass filter of `order` with `cutoff` in `(0, 1)`
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidFilterParameter`] if `order` is zero or above
    /// [`MAX_LOWPASS_ORDER`], or `cutoff` is not strictly between 0 and 1
    /// (NaN included).
    ///
    /// ```rust
    /// use thermowatch_core::smoothing::Butterworth;
    ///
    /// let filter = Butterworth::lowpass(1, 0.5)?;
    /// assert!((filter.b()[0] - 0.5).abs() < 1e-12);
    /// assert!((filter.b()[1] - 0.5).abs() < 1e-12);
    /// # Ok::<(), thermowatch_core::AnalysisError>(())
    /// ```
    pub fn lowpass(order: usize, cutoff: f64) -> AnalysisResult<Self> {
        validate(order, cutoff)?;

        let warped = 4.0 * libm::tan(PI * cutoff / 2.0);
        let n = order as f64;

        // `validate` bounds order by MAX_LOWPASS_ORDER, so every collect below fits
        let analog: BoundedVec<Complex, MAX_LOWPASS_ORDER> = (0..order)
            .map(|k| {
                let m = 2.0 * k as f64 - (n - 1.0);
                let theta = PI * m / (2.0 * n);
                Complex::new(-libm::cos(theta), -libm::sin(theta)).scale(warped)
            })
            .collect();

        let four = Complex::real(4.0);
        let gain_denominator = analog
            .iter()
            .fold(Complex::ONE, |acc, &pole| acc * (four - pole));
        let poles: BoundedVec<Complex, MAX_LOWPASS_ORDER> = analog
            .iter()
            .map(|&pole| (four + pole) / (four - pole))
            .collect();

        let gain = libm::pow(warped, n) / gain_denominator.re;
        let b: Coefficients = (0..=order).map(|j| gain * binomial(order, j)).collect();
        let a = poly_real(&poles);

        log_debug!("Butterworth order {} cutoff {}: b={:?} a={:?}", order, cutoff, b, a);

        Ok(Self { order, cutoff, b, a })
    }

    /// Filter order
    pub fn order(&self) -> usize {
        self.order
    }

    /// Cutoff as a fraction of Nyquist
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Numerator coefficients
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Denominator coefficients, `a[0] == 1`
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Odd-reflection padding applied to each end
    pub fn padding(&self) -> usize {
        PADDING_FACTOR * (self.order + 1)
    }

    /// Shortest series [`Self::filtfilt`] accepts
    pub fn min_len(&self) -> usize {
        self.padding() + 1
    }

    /// Gain at DC (`sum(b) / sum(a)`), 1 for a low-pass design
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }

    /// Apply the filter forward and backward (zero phase)
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InsufficientData`] if `values` has no more samples
    /// than the edge padding.
    pub fn filtfilt(&self, values: &[f64]) -> AnalysisResult<Vec<f64>> {
        let pad = self.padding();
        let len = values.len();

        if len <= pad {
            return Err(AnalysisError::InsufficientData {
                required: self.min_len(),
                available: len,
            });
        }

        let first = values[0];
        let last = values[len - 1];

        let mut extended = Vec::with_capacity(len + 2 * pad);
        extended.extend((1..=pad).rev().map(|k| 2.0 * first - values[k]));
        extended.extend_from_slice(values);
        extended.extend((1..=pad).map(|k| 2.0 * last - values[len - 1 - k]));

        let zi = self.steady_state();

        let forward = self.lfilter(extended.iter().copied(), &zi, extended[0]);
        let tail = forward[forward.len() - 1];
        let mut backward = self.lfilter(forward.iter().rev().copied(), &zi, tail);
        backward.reverse();

        Ok(backward[pad..pad + len].to_vec())
    }

    /// Direct form II transposed, starting from `zi * scale`
    fn lfilter<I>(&self, input: I, zi: &Coefficients, scale: f64) -> Vec<f64>
    where
        I: ExactSizeIterator<Item = f64>,
    {
        let b = &self.b;
        let a = &self.a;
        let taps = self.order;

        let mut state: Coefficients = zi.iter().map(|z| z * scale).collect();
        let mut output = Vec::with_capacity(input.len());

        for x in input {
            let y = b[0] * x + state[0];
            for j in 0..taps - 1 {
                state[j] = b[j + 1] * x + state[j + 1] - a[j + 1] * y;
            }
            state[taps - 1] = b[taps] * x - a[taps] * y;
            output.push(y);
        }

        output
    }

    /// Filter state after settling on a unit step
    ///
    /// With constant input 1 and output `g = sum(b) / sum(a)`, the DF-II-T
    /// recurrences give `zi[i] = sum_{k > i} (b[k] - a[k] * g)`.
    fn steady_state(&self) -> Coefficients {
        let g = self.dc_gain();
        let mut zi: Coefficients = (1..=self.order)
            .map(|k| self.b[k] - self.a[k] * g)
            .collect();

        // Suffix sums, from the last tap back
        for i in (0..self.order - 1).rev() {
            zi[i] += zi[i + 1];
        }
        zi
    }
}

impl Smoother for Butterworth {
    fn smooth(&self, values: &[f64]) -> AnalysisResult<Vec<f64>> {
        self.filtfilt(values)
    }

    fn label(&self) -> String {
        format!("Butter {}, {}", self.order, self.cutoff)
    }
}

/// Zero-phase low-pass of `values`
///
/// Designs a Butterworth filter and applies it with [`Butterworth::filtfilt`].
///
/// # Errors
///
/// - [`AnalysisError::InvalidFilterParameter`] for a bad `order` or `cutoff`
/// - [`AnalysisError::InsufficientData`] if `values.len() <= 3 * (order + 1)`
pub fn lowpass(values: &[f64], order: usize, cutoff: f64) -> AnalysisResult<Vec<f64>> {
    Butterworth::lowpass(order, cutoff)?.filtfilt(values)
}

fn validate(order: usize, cutoff: f64) -> AnalysisResult<()> {
    if order == 0 {
        return Err(AnalysisError::InvalidFilterParameter {
            parameter: "order",
            reason: "must be at least 1",
        });
    }
    if order > MAX_LOWPASS_ORDER {
        return Err(AnalysisError::InvalidFilterParameter {
            parameter: "order",
            reason: "exceeds the maximum supported order of 8",
        });
    }
    // Written so that NaN fails too
    if !(cutoff > 0.0 && cutoff < 1.0) {
        return Err(AnalysisError::InvalidFilterParameter {
            parameter: "cutoff",
            reason: "must lie strictly between 0 and 1 (fraction of Nyquist)",
        });
    }
    Ok(())
}

fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Real part of the monic polynomial with the given roots, highest power first
fn poly_real(roots: &[Complex]) -> Coefficients {
    let mut coeffs: BoundedVec<Complex, MAX_LOWPASS_COEFFS> = core::iter::once(Complex::ONE)
        .chain(roots.iter().map(|_| Complex::ZERO))
        .collect();

    // Multiply in (z - root) one factor at a time
    for (degree, &root) in roots.iter().enumerate() {
        for j in (1..=degree + 1).rev() {
            coeffs[j] = coeffs[j] - root * coeffs[j - 1];
        }
    }

    coeffs.iter().map(|c| c.re).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    fn scale(self, k: f64) -> Self {
        Self::new(self.re * k, self.im * k)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}
