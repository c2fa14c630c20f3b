//! Physical LED geometry resolution.
//!
//! A marquee board is described by the diameter of each LED and the
//! center-to-center pitch between neighbours on each axis. Markup layout
//! needs whole numbers, so this module finds the largest real-valued unit
//! that evenly measures both inter-LED margins and expresses every cell
//! dimension as an integer count of that unit. The ratios between LED size
//! and spacing survive to within rounding error.
//!
//! # Example
//!
//! ```
//! use marquee::geometry::resolve;
//!
//! let cell = resolve(2.5, 4.0, 4.0).unwrap();
//! assert_eq!(cell.inner_size, 3);
//! assert_eq!((cell.outer_width, cell.outer_height), (5, 5));
//! ```

mod report;

pub use report::GeometryReport;

use log::debug;
use serde::Serialize;
use thiserror::Error;

/// Remainders smaller than this end the GCD reduction.
pub const GCD_EPSILON: f64 = 0.001;

/// Upper bound on reduction steps before the inputs are declared
/// incommensurable.
const MAX_GCD_STEPS: usize = 256;

/// Largest integer dimension a resolved geometry may carry.
const MAX_UNITS: f64 = 1_000_000.0;

/// Reasons a physical LED specification cannot produce a cell geometry.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} ({pitch}) is smaller than the LED size ({led_size})")]
    PitchSmallerThanLed {
        name: &'static str,
        pitch: f64,
        led_size: f64,
    },

    #[error("margins {border_h} and {border_v} have no common unit")]
    NoCommonUnit { border_h: f64, border_v: f64 },

    #[error("common unit {unit} is too small to lay out")]
    UnitTooSmall { unit: f64 },

    #[error("LED size {led_size} rounds to zero units of {unit}")]
    LedVanishes { led_size: f64, unit: f64 },
}

/// Physical dimensions of a marquee board, in any consistent length unit.
///
/// Only constructible through [`PhysicalSpec::new`], which rejects
/// non-finite, non-positive, and overlapping (pitch < size) values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhysicalSpec {
    led_size: f64,
    pitch_h: f64,
    pitch_v: f64,
}

impl PhysicalSpec {
    /// Validates and creates a physical specification.
    pub fn new(led_size: f64, pitch_h: f64, pitch_v: f64) -> Result<Self, GeometryError> {
        for (name, value) in [
            ("led_size", led_size),
            ("pitch_h", pitch_h),
            ("pitch_v", pitch_v),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::NotFinite { name, value });
            }
            if value <= 0.0 {
                return Err(GeometryError::NotPositive { name, value });
            }
        }

        for (name, pitch) in [("pitch_h", pitch_h), ("pitch_v", pitch_v)] {
            if pitch < led_size {
                return Err(GeometryError::PitchSmallerThanLed {
                    name,
                    pitch,
                    led_size,
                });
            }
        }

        Ok(Self {
            led_size,
            pitch_h,
            pitch_v,
        })
    }

    /// Returns the LED diameter (or side length).
    pub fn led_size(&self) -> f64 {
        self.led_size
    }

    /// Returns the horizontal center-to-center spacing.
    pub fn pitch_h(&self) -> f64 {
        self.pitch_h
    }

    /// Returns the vertical center-to-center spacing.
    pub fn pitch_v(&self) -> f64 {
        self.pitch_v
    }

    /// Returns the dark margin on each side of an LED along the horizontal axis.
    pub fn border_h(&self) -> f64 {
        self.pitch_h / 2.0 - self.led_size / 2.0
    }

    /// Returns the dark margin on each side of an LED along the vertical axis.
    pub fn border_v(&self) -> f64 {
        self.pitch_v / 2.0 - self.led_size / 2.0
    }

    /// Resolves this specification into an integer-unit cell geometry.
    pub fn resolve(&self) -> Result<CellGeometry, GeometryError> {
        let border_h = self.border_h();
        let border_v = self.border_v();

        // LEDs touching on both axes leave nothing to measure; size the
        // unit by the LED itself.
        let unit = if border_h < GCD_EPSILON && border_v < GCD_EPSILON {
            self.led_size
        } else {
            approximate_gcd(border_h, border_v)
                .ok_or(GeometryError::NoCommonUnit { border_h, border_v })?
        };

        if !(unit.is_finite() && unit > 0.0) {
            return Err(GeometryError::UnitTooSmall { unit });
        }

        let inner_size = to_units(self.led_size, unit)?;
        if inner_size == 0 {
            return Err(GeometryError::LedVanishes {
                led_size: self.led_size,
                unit,
            });
        }
        let margin_h = to_units(border_h, unit)?;
        let margin_v = to_units(border_v, unit)?;

        let geometry = CellGeometry {
            unit,
            inner_size,
            outer_width: inner_size + 2 * margin_h,
            outer_height: inner_size + 2 * margin_v,
            margin_h,
            margin_v,
        };
        debug!(
            "resolved led {} pitch {}x{} to unit {} ({:?})",
            self.led_size, self.pitch_h, self.pitch_v, unit, geometry
        );
        Ok(geometry)
    }
}

/// Integer-unit dimensions of one LED cell.
///
/// All integer fields count multiples of `unit`, the physical length of one
/// unit. `outer_width == inner_size + 2 * margin_h` and
/// `outer_height == inner_size + 2 * margin_v` always hold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CellGeometry {
    /// Physical length represented by one unit.
    pub unit: f64,
    /// Side length of the lit element.
    pub inner_size: u32,
    /// Width of the whole cell, including horizontal margins.
    pub outer_width: u32,
    /// Height of the whole cell, including vertical margins.
    pub outer_height: u32,
    /// Dark margin left and right of the lit element.
    pub margin_h: u32,
    /// Dark margin above and below the lit element.
    pub margin_v: u32,
}

/// Resolves raw physical parameters into a cell geometry.
///
/// Shorthand for [`PhysicalSpec::new`] followed by [`PhysicalSpec::resolve`].
pub fn resolve(led_size: f64, pitch_h: f64, pitch_v: f64) -> Result<CellGeometry, GeometryError> {
    PhysicalSpec::new(led_size, pitch_h, pitch_v)?.resolve()
}

/// Greatest common measure of two non-negative reals.
///
/// Runs the Euclidean reduction on floats, keeping the larger operand first
/// and stopping once the smaller one drops below [`GCD_EPSILON`]. Returns
/// `None` if the reduction does not settle (e.g. NaN input).
pub fn approximate_gcd(a: f64, b: f64) -> Option<f64> {
    let (mut a, mut b) = (a, b);
    for _ in 0..MAX_GCD_STEPS {
        if a < b {
            std::mem::swap(&mut a, &mut b);
        }
        if b.abs() < GCD_EPSILON {
            return Some(a);
        }
        let remainder = a - (a / b).floor() * b;
        a = b;
        b = remainder;
    }
    None
}

/// Rounds `value / unit` half away from zero.
fn to_units(value: f64, unit: f64) -> Result<u32, GeometryError> {
    let units = (value / unit).round();
    if !units.is_finite() || units > MAX_UNITS {
        return Err(GeometryError::UnitTooSmall { unit });
    }
    Ok(units.max(0.0) as u32)
}
