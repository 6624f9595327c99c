//! Shared sample generators for integration tests
//!
//! Series are deterministic: noise comes from a small LCG seeded per
//! generator so failures reproduce.

#![allow(dead_code)]

use thermowatch_core::{time::Timestamp, Sample};

/// 2023-03-14T00:00:00Z
pub const START: Timestamp = 1_678_752_000_000;

/// Raw ADC count for a Celsius value, inverse of the sensor curve used here
pub fn raw_for(celsius: f64) -> i32 {
    (17_000.0 + celsius * 100.0).round() as i32
}

/// Sample with consistent raw / Celsius / Fahrenheit fields
pub fn sample_at(timestamp: Timestamp, fahrenheit: f64) -> Sample {
    let celsius = (fahrenheit - 32.0) / 1.8;
    Sample::new(timestamp, raw_for(celsius), celsius, fahrenheit)
}

/// `values.len()` samples spaced `step_ms` apart starting at [`START`]
pub fn series(values: &[f64], step_ms: u64) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &f)| sample_at(START + i as u64 * step_ms, f))
        .collect()
}

/// Samples at the given offsets from [`START`], all at 70 F
pub fn at_offsets(offsets_ms: &[u64]) -> Vec<Sample> {
    offsets_ms.iter().map(|&t| sample_at(START + t, 70.0)).collect()
}

/// Deterministic pseudo-random noise source
pub struct Noise {
    state: u32,
}

impl Noise {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Uniform value in `[-amplitude, amplitude]`
    pub fn next(&mut self, amplitude: f64) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let unit = f64::from(self.state >> 8) / f64::from(1u32 << 24);
        (unit * 2.0 - 1.0) * amplitude
    }
}

/// A day-like log: slow diurnal swing plus ADC noise, one sample per `step_ms`
pub fn noisy_log(count: usize, step_ms: u64, seed: u32) -> Vec<Sample> {
    let mut noise = Noise::new(seed);
    let values: Vec<f64> = (0..count)
        .map(|i| {
            let phase = i as f64 / count as f64 * core::f64::consts::TAU;
            68.0 + 4.0 * phase.sin() + noise.next(0.5)
        })
        .collect();
    series(&values, step_ms)
}
