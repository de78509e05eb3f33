//! Masses.
//!
//! [`MassConverter`] stores milligrams. Every factory ratio is a power of ten, so construction is exact.
//!
//! ```rust
//! use unitconv::mass::MassConverter;
//!
//! let bag = MassConverter::from_kilograms("2.5").unwrap();
//! assert_eq!(bag.to_grams(), "2500".parse().unwrap());
//! assert_eq!(bag.to_string(), "2.50 kg");
//! ```

use core::fmt;

use crate::format::{auto_scale, Fallback, RenderSettings, ScaleTier};
use crate::units::mass::*;
use crate::{ConversionResult, Decimal, IntoDecimal, MathContext, Quantity};

/// Display ladder, largest first.
pub const LADDER: &[ScaleTier<Mass>] = &[
    ScaleTier::of::<Tonne>("t"),
    ScaleTier::of::<Kilogram>("kg"),
    ScaleTier::of::<Gram>("g"),
];

/// A non-negative mass held in milligrams.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MassConverter {
    milligrams: Milligrams,
}

impl MassConverter {
    fn from_unit<U: MassUnit>(value: impl IntoDecimal) -> ConversionResult<Self> {
        let quantity = Quantity::<U>::non_negative(value)?;
        Ok(Self {
            milligrams: quantity.to::<Milligram>(),
        })
    }

    unit_factories! {
        from_milligrams => Milligram,
        from_grams => Gram,
        from_kilograms => Kilogram,
        from_tonnes => Tonne,
    }

    /// Milligrams, exactly as stored.
    pub fn to_milligrams(&self) -> Decimal {
        self.milligrams.value().clone()
    }

    unit_accessors! {
        to_grams => Gram,
        to_kilograms => Kilogram,
        to_tonnes => Tonne,
    }

    /// The mass in any mass unit at [`MathContext::DEFAULT`].
    pub fn to<U: MassUnit>(&self) -> Quantity<U> {
        self.milligrams.to::<U>()
    }

    /// The mass in any mass unit at an explicit context.
    pub fn to_in<U: MassUnit>(&self, ctx: &MathContext) -> Quantity<U> {
        self.milligrams.to_in::<U>(ctx)
    }

    /// The stored milligram quantity.
    pub fn as_quantity(&self) -> &Milligrams {
        &self.milligrams
    }

    /// Renders in the largest unit reached, or whole milligrams below one gram.
    pub fn render(&self) -> String {
        self.render_with(&RenderSettings::default())
    }

    /// [`MassConverter::render`] with explicit settings.
    pub fn render_with(&self, settings: &RenderSettings) -> String {
        auto_scale(&self.milligrams, LADDER, "mg", Fallback::Integer, settings)
    }
}

impl fmt::Display for MassConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
