//! Time units.
//!
//! The canonical scaling unit for this dimension is [`Microsecond`] (`Microsecond::RATIO == 1`).
//!
//! ## Conventions
//!
//! - `1 day = 86 400 s` (leap seconds ignored), `1 week = 7 days`.
//! - [`Year`] is a **365.242-day** year: `31 556 908.8 s`, i.e. `3.15569088e13 µs`. It is neither the Julian year
//!   (365.25 d) nor the Gregorian year (365.2425 d).
//!
//! ```rust
//! use unitconv_core::time::{Minute, Weeks};
//!
//! let wk = Weeks::try_new(1).unwrap();
//! assert_eq!(wk.to::<Minute>().value().to_string(), "10080");
//! ```

use crate::{Dimension, Quantity, Unit};
use unitconv_derive::Unit;

/// Dimension tag for time.
#[derive(Debug)]
pub enum Time {}
impl Dimension for Time {
    const NAME: &'static str = "time";
}

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

/// Microsecond (canonical).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "µs", name = "Microseconds", dimension = Time, ratio = 1)]
pub struct Microsecond;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;

/// Millisecond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "ms", name = "Milliseconds", dimension = Time, ratio = "1e3")]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;

/// SI second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "s", name = "Seconds", dimension = Time, ratio = "1e6")]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "min", name = "Minutes", dimension = Time, ratio = "6e7")]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "h", name = "Hours", dimension = Time, ratio = "3.6e9")]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;

/// Day (`86 400 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "d", name = "Days", dimension = Time, ratio = "8.64e10")]
pub struct Day;
/// A quantity measured in days.
pub type Days = Quantity<Day>;

/// Week (`7 d`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "wk", name = "Weeks", dimension = Time, ratio = "6.048e11")]
pub struct Week;
/// A quantity measured in weeks.
pub type Weeks = Quantity<Week>;

/// Year of 365.242 days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "yr", name = "Years", dimension = Time, ratio = "3.15569088e13")]
pub struct Year;
/// A quantity measured in years.
pub type Years = Quantity<Year>;

crate::impl_unit_conversions!(Microsecond, Millisecond, Second, Minute, Hour, Day, Week, Year);
