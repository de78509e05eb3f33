//! Velocity units.
//!
//! Velocity is its own dimension here, not `Length / Time`: the speed converters fix the per-second denominator and
//! apply a time increment afterwards. The canonical unit is [`MeterPerSecond`].
//!
//! Imperial velocities go through the feet-per-metre constant `3.28084` rather than the exact international foot
//! used by the [`length`](crate::length) table, so `1 ft/s = 1 / 3.28084 m/s` and `1 mi/s = 5280 / 3.28084 m/s`.
//! Both are kept as exact rationals.
//!
//! ```rust
//! use unitconv_core::velocity::{FootPerSecond, MetersPerSecond};
//!
//! let v = MetersPerSecond::try_new(100).unwrap();
//! assert_eq!(v.to::<FootPerSecond>().value().normalize().to_string(), "328.084");
//! ```

use crate::{Dimension, Quantity, Unit};
use unitconv_derive::Unit;

/// Dimension tag for velocity.
#[derive(Debug)]
pub enum Velocity {}
impl Dimension for Velocity {
    const NAME: &'static str = "velocity";
}

/// Marker trait for any [`Unit`] whose dimension is [`Velocity`].
pub trait VelocityUnit: Unit<Dim = Velocity> {}
impl<T: Unit<Dim = Velocity>> VelocityUnit for T {}

/// Metre per second (canonical).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "m/s", name = "Meters per second", dimension = Velocity, ratio = 1)]
pub struct MeterPerSecond;
/// A quantity measured in metres per second.
pub type MetersPerSecond = Quantity<MeterPerSecond>;

/// Kilometre per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "km/s", name = "Kilometers per second", dimension = Velocity, ratio = "1000")]
pub struct KilometerPerSecond;
/// A quantity measured in kilometres per second.
pub type KilometersPerSecond = Quantity<KilometerPerSecond>;

/// Foot per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "ft/s", name = "Feet per second", dimension = Velocity, ratio = "1 / 3.28084")]
pub struct FootPerSecond;
/// A quantity measured in feet per second.
pub type FeetPerSecond = Quantity<FootPerSecond>;

/// Mile per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "mi/s", name = "Miles per second", dimension = Velocity, ratio = "5280 / 3.28084")]
pub struct MilePerSecond;
/// A quantity measured in miles per second.
pub type MilesPerSecond = Quantity<MilePerSecond>;

/// Astronomical unit per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "AU/s", name = "Astronomical Units per second", dimension = Velocity, ratio = "1.49597871e11")]
pub struct AstronomicalUnitPerSecond;
/// A quantity measured in astronomical units per second.
pub type AstronomicalUnitsPerSecond = Quantity<AstronomicalUnitPerSecond>;

/// Light-year per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "ly/s", name = "Light Years per second", dimension = Velocity, ratio = "9.4605284e15")]
pub struct LightYearPerSecond;
/// A quantity measured in light-years per second.
pub type LightYearsPerSecond = Quantity<LightYearPerSecond>;

/// Parsec per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "pc/s", name = "Parsecs per second", dimension = Velocity, ratio = "3.08567758e16")]
pub struct ParsecPerSecond;
/// A quantity measured in parsecs per second.
pub type ParsecsPerSecond = Quantity<ParsecPerSecond>;

crate::impl_unit_conversions!(
    MeterPerSecond,
    KilometerPerSecond,
    FootPerSecond,
    MilePerSecond,
    AstronomicalUnitPerSecond,
    LightYearPerSecond,
    ParsecPerSecond
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Decimal;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn imperial_ratios_are_exact_rationals() {
        assert_eq!(FootPerSecond::RATIO.numer(), 25_000);
        assert_eq!(FootPerSecond::RATIO.denom(), 82_021);
        assert_eq!(MilePerSecond::RATIO.numer(), 132_000_000);
        assert_eq!(MilePerSecond::RATIO.denom(), 82_021);
    }

    #[test]
    fn metres_to_feet_is_exact_multiplication() {
        let v = MetersPerSecond::try_new(1).unwrap();
        assert_eq!(v.to::<FootPerSecond>().value(), &dec("3.28084"));
    }

    #[test]
    fn miles_to_feet_is_5280() {
        let v = MilesPerSecond::try_new(1).unwrap();
        assert_eq!(v.to::<FootPerSecond>().value(), &dec("5280"));
    }

    #[test]
    fn feet_to_metres_divides() {
        let v = FeetPerSecond::try_new("3.28084").unwrap();
        assert_eq!(v.to::<MeterPerSecond>().value(), &dec("1"));
        let v = FeetPerSecond::try_new(1).unwrap();
        assert_relative_eq!(v.to::<MeterPerSecond>().value().to_f64(), 0.3047999902, max_relative = 1e-9);
    }

    #[test]
    fn kilometres_per_second() {
        let v = KilometersPerSecond::try_new("0.5").unwrap();
        assert_eq!(v.to::<MeterPerSecond>().value(), &dec("500"));
    }

    proptest! {
        #[test]
        fn prop_parsec_roundtrip(n in 0u32..1_000_000) {
            let v = ParsecsPerSecond::try_new(n).unwrap();
            prop_assert_eq!(v.to::<MeterPerSecond>().to::<ParsecPerSecond>(), v);
        }
    }
}
