//! Length units.
//!
//! The canonical scaling unit for this dimension is [`Micrometer`] (`Micrometer::RATIO == 1`). Every other length
//! unit is an exact integer number of micrometres:
//!
//! - **Metric**: millimetre, centimetre, metre, kilometre.
//! - **Imperial**: inch (`25 400 µm`), foot, yard, statute mile.
//! - **Astronomy**: astronomical unit (`1.49597871e11 m`), light-year (`9.4605284e15 m`), parsec
//!   (`3.08567758e16 m`). These are the rounded constants used throughout the converters, not the IAU definitions.
//!
//! Because every ratio is an integer, conversions *into* micrometres never divide.
//!
//! ```rust
//! use unitconv_core::length::{Feet, Mile, Yard};
//!
//! let ft = Feet::try_new(5280).unwrap();
//! assert_eq!(ft.to::<Mile>().value().normalize().to_string(), "1");
//! assert_eq!(ft.to::<Yard>().value(), &unitconv_core::Decimal::from(1760));
//! ```

use crate::{Dimension, Quantity, Unit};
use unitconv_derive::Unit;

/// Dimension tag for length.
#[derive(Debug)]
pub enum Length {}
impl Dimension for Length {
    const NAME: &'static str = "length";
}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Metric
// ─────────────────────────────────────────────────────────────────────────────

/// Micrometre (canonical).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "µm", name = "Micrometers", dimension = Length, ratio = 1)]
pub struct Micrometer;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Micrometer>;

/// Millimetre (`1e3 µm`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "mm", name = "Millimeters", dimension = Length, ratio = "1e3")]
pub struct Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Millimeter>;

/// Centimetre (`1e4 µm`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "cm", name = "Centimeters", dimension = Length, ratio = "1e4")]
pub struct Centimeter;
/// A quantity measured in centimetres.
pub type Centimeters = Quantity<Centimeter>;

/// Metre (`1e6 µm`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "m", name = "Meters", dimension = Length, ratio = "1e6")]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;

/// Kilometre (`1e9 µm`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "km", name = "Kilometers", dimension = Length, ratio = "1e9")]
pub struct Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Kilometer>;

// ─────────────────────────────────────────────────────────────────────────────
// Imperial
// ─────────────────────────────────────────────────────────────────────────────

/// International inch (exactly `25.4 mm`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "in", name = "Inches", dimension = Length, ratio = "25400")]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;

/// International foot (12 in).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "ft", name = "Feet", dimension = Length, ratio = "304800")]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;

/// International yard (3 ft).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "yd", name = "Yards", dimension = Length, ratio = "914400")]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards = Quantity<Yard>;

/// Statute mile (5280 ft).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "mi", name = "Miles", dimension = Length, ratio = "1609344000")]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy
// ─────────────────────────────────────────────────────────────────────────────

/// Astronomical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "AU", name = "Astronomical Units", dimension = Length, ratio = "1.49597871e17")]
pub struct AstronomicalUnit;
/// A quantity measured in astronomical units.
pub type AstronomicalUnits = Quantity<AstronomicalUnit>;

/// Light-year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "ly", name = "Light Years", dimension = Length, ratio = "9.4605284e21")]
pub struct LightYear;
/// A quantity measured in light-years.
pub type LightYears = Quantity<LightYear>;

/// Parsec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "pc", name = "Parsecs", dimension = Length, ratio = "3.08567758e22")]
pub struct Parsec;
/// A quantity measured in parsecs.
pub type Parsecs = Quantity<Parsec>;

crate::impl_unit_conversions!(
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    AstronomicalUnit,
    LightYear,
    Parsec
);
