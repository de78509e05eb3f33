//! Mass units.
//!
//! The canonical scaling unit for this dimension is [`Milligram`] (`Milligram::RATIO == 1`). The metric ladder is
//! exact: gram `1e3 mg`, kilogram `1e6 mg`, tonne `1e9 mg`.
//!
//! ```rust
//! use unitconv_core::mass::{Kilograms, Tonne};
//! use unitconv_core::Decimal;
//!
//! let kg = Kilograms::try_new(1500).unwrap();
//! assert_eq!(kg.to::<Tonne>().value(), &"1.5".parse::<Decimal>().unwrap());
//! ```

use crate::{Dimension, Quantity, Unit};
use unitconv_derive::Unit;

/// Dimension tag for mass.
#[derive(Debug)]
pub enum Mass {}
impl Dimension for Mass {
    const NAME: &'static str = "mass";
}

/// Marker trait for any [`Unit`] whose dimension is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

/// Milligram (canonical).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "mg", name = "Milligrams", dimension = Mass, ratio = 1)]
pub struct Milligram;
/// A quantity measured in milligrams.
pub type Milligrams = Quantity<Milligram>;

/// Gram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "g", name = "Grams", dimension = Mass, ratio = "1e3")]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;

/// Kilogram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "kg", name = "Kilograms", dimension = Mass, ratio = "1e6")]
pub struct Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;

/// Metric tonne.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "t", name = "Tonnes", dimension = Mass, ratio = "1e9")]
pub struct Tonne;
/// A quantity measured in tonnes.
pub type Tonnes = Quantity<Tonne>;

crate::impl_unit_conversions!(Milligram, Gram, Kilogram, Tonne);
