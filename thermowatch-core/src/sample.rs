//! Temperature samples and unit selection
//!
//! A [`Sample`] carries every representation the sensor layer produced for
//! one reading: the raw ADC count and the converted Celsius / Fahrenheit
//! values. The three are captured with independent rounding, so the engine
//! never recomputes one from another.
//!
//! [`Unit`] picks which field an analysis run operates on. It is passed
//! explicitly to every call; there is no process-wide "current unit".
//!
//! ```rust
//! use thermowatch_core::{Sample, Unit};
//!
//! let sample = Sample::new(1_678_752_000_000, 17_342, 3.61, 38.5);
//! assert_eq!(Unit::Fahrenheit.value_of(&sample), 38.5);
//! assert_eq!(Unit::Fahrenheit.format(38.5), "38.50 F");
//! assert_eq!(Unit::Raw.format(17_342.9), "17342");
//! ```

use alloc::{format, string::String, vec::Vec};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::analysis::DISPLAY_DECIMALS;
use crate::time::Timestamp;

/// One timestamped temperature reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Acquisition time (ms since epoch)
    pub timestamp: Timestamp,
    /// ADC count in device units
    pub raw: i32,
    /// Temperature in degrees Celsius
    pub celsius: f64,
    /// Temperature in degrees Fahrenheit
    pub fahrenheit: f64,
}

impl Sample {
    /// Create a sample from its four recorded fields
    pub const fn new(timestamp: Timestamp, raw: i32, celsius: f64, fahrenheit: f64) -> Self {
        Self { timestamp, raw, celsius, fahrenheit }
    }

    /// Scalar value of this sample in `unit`
    pub fn value(&self, unit: Unit) -> f64 {
        unit.value_of(self)
    }
}

/// Measurement unit an analysis run operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// ADC count
    Raw,
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    #[default]
    Fahrenheit,
}

impl Unit {
    /// Every supported unit, in declaration order
    pub const ALL: [Unit; 3] = [Unit::Raw, Unit::Celsius, Unit::Fahrenheit];

    /// Select this unit's field of `sample`
    pub fn value_of(self, sample: &Sample) -> f64 {
        match self {
            Unit::Raw => f64::from(sample.raw),
            Unit::Celsius => sample.celsius,
            Unit::Fahrenheit => sample.fahrenheit,
        }
    }

    /// Display suffix, `None` for raw counts
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Unit::Raw => None,
            Unit::Celsius => Some("C"),
            Unit::Fahrenheit => Some("F"),
        }
    }

    /// Short name used in chart axis labels (`Raw`, `C`, `F`)
    pub fn name(self) -> &'static str {
        self.suffix().unwrap_or("Raw")
    }

    /// Render a value in this unit
    ///
    /// Celsius and Fahrenheit use two decimals and a unit suffix
    /// (`"38.50 F"`); raw counts are truncated toward zero and printed
    /// bare (`"17342"`).
    pub fn format(self, value: f64) -> String {
        match self.suffix() {
            Some(suffix) => format!("{:.*} {}", DISPLAY_DECIMALS, value, suffix),
            None => format!("{}", value as i64),
        }
    }

    /// Axis label for charts of this unit, e.g. `Temperature, F`
    pub fn axis_label(self) -> String {
        format!("Temperature, {}", self.name())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a unit name is not recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownUnit;

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown unit, expected raw, celsius or fahrenheit")
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(Unit::Raw),
            "c" | "celsius" => Ok(Unit::Celsius),
            "f" | "fahrenheit" => Ok(Unit::Fahrenheit),
            _ => Err(UnknownUnit),
        }
    }
}

/// Extract the scalar series of `samples` in `unit`
pub fn values(samples: &[Sample], unit: Unit) -> Vec<f64> {
    samples.iter().map(|s| unit.value_of(s)).collect()
}

/// Extract the timestamps of `samples`
pub fn timestamps(samples: &[Sample]) -> Vec<Timestamp> {
    samples.iter().map(|s| s.timestamp).collect()
}
