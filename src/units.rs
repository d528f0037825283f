//! # Physical Units and Lengths
//!
//! The printer's firmware takes integer parameters in device units: character
//! columns at the current pitch, vertical ticks of 1/144 inch, or horizontal
//! dots at the current graphics resolution. Callers think in physical units.
//! This module converts between the two.
//!
//! ## Conversion Rules
//!
//! - 1 inch = 2.54 cm = 25.4 mm; 1 point = 1/72 inch. Conversions between
//!   physical units are exact linear scalings.
//! - Physical-to-device conversions multiply by the per-pitch constant and
//!   **truncate toward zero** - the firmware only understands whole units,
//!   and the manual's worked examples truncate rather than round.
//! - A [`Length`] may also carry a raw integer already in device units, which
//!   passes through every conversion unchanged. Many call sites accept either
//!   form.

use crate::pitch::Pitch;

/// Vertical resolution for line spacing and page length: 144 ticks per inch.
pub const VERTICAL_TICKS_PER_INCH: f64 = 144.0;

/// The printable line is 8 inches wide regardless of pitch.
pub const LINE_WIDTH_INCHES: f64 = 8.0;

/// A physical unit of distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Inches,
    Centimeters,
    Millimeters,
    /// Typographic points, 72 per inch.
    Points,
}

impl Unit {
    /// How many of this unit make up one inch.
    fn per_inch(self) -> f64 {
        match self {
            Unit::Inches => 1.0,
            Unit::Centimeters => 2.54,
            Unit::Millimeters => 25.4,
            Unit::Points => 72.0,
        }
    }
}

/// A physical distance: a value in a declared unit.
///
/// ## Example
///
/// ```
/// use imagewriter::units::{Distance, Unit};
///
/// let d = Distance::inches(1.0).convert_to(Unit::Centimeters);
/// assert!((d.value - 2.54).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    pub value: f64,
    pub unit: Unit,
}

impl Distance {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inches)
    }

    pub fn centimeters(value: f64) -> Self {
        Self::new(value, Unit::Centimeters)
    }

    pub fn millimeters(value: f64) -> Self {
        Self::new(value, Unit::Millimeters)
    }

    pub fn points(value: f64) -> Self {
        Self::new(value, Unit::Points)
    }

    /// The distance expressed in inches.
    pub fn in_inches(&self) -> f64 {
        self.value / self.unit.per_inch()
    }

    /// Convert to another unit. Round trips are lossless to within
    /// floating-point epsilon.
    pub fn convert_to(&self, unit: Unit) -> Distance {
        Distance::new(self.in_inches() * unit.per_inch(), unit)
    }

    /// The distance in vertical ticks of 1/144 inch, truncated.
    pub fn vertical_ticks(&self) -> i32 {
        (self.in_inches() * VERTICAL_TICKS_PER_INCH) as i32
    }

    /// The distance in character columns at the given pitch, truncated.
    pub fn characters(&self, pitch: Pitch) -> i32 {
        (self.in_inches() * pitch.characters_per_inch()) as i32
    }

    /// The distance in horizontal graphics dots at the given pitch, truncated.
    pub fn horizontal_dots(&self, pitch: Pitch) -> i32 {
        (self.in_inches() * f64::from(pitch.horizontal_resolution())) as i32
    }
}

/// Either a physical distance or a raw integer already in device units.
///
/// Command builders that take a `Length` convert distances at the last
/// moment, with the conversion appropriate to the command; raw integers pass
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Distance(Distance),
    Units(i32),
}

impl Length {
    /// Resolve to an integer device unit. `convert` is applied only to the
    /// distance form; raw units are returned as-is.
    pub fn to_units<F>(self, convert: F) -> i32
    where
        F: FnOnce(Distance) -> i32,
    {
        match self {
            Length::Distance(d) => convert(d),
            Length::Units(n) => n,
        }
    }
}

impl From<Distance> for Length {
    fn from(d: Distance) -> Self {
        Length::Distance(d)
    }
}

impl From<i32> for Length {
    fn from(n: i32) -> Self {
        Length::Units(n)
    }
}

// ============================================================================
// TESTS
// ============================================================================
