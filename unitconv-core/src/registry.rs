//! Runtime lookup of the unit tables.
//!
//! The typed API (`Quantity<U>::to::<T>()`) rejects cross-dimension conversions at compile time. When units are only
//! known at runtime, [`UnitId`] names every unit in the tables, and [`convert`] performs the same exact conversion,
//! failing with [`ConversionError::UnsupportedConversion`] when the dimensions differ.
//!
//! ```rust
//! use unitconv_core::registry::{convert, UnitId};
//! use unitconv_core::{Decimal, MathContext};
//!
//! let kb = convert(&Decimal::from(2048), UnitId::Byte, UnitId::Kilobyte, &MathContext::DEFAULT).unwrap();
//! assert_eq!(kb, Decimal::from(2));
//!
//! assert!(convert(&Decimal::from(1), UnitId::Kilogram, UnitId::Meter, &MathContext::DEFAULT).is_err());
//! ```

use crate::decimal::{Decimal, MathContext};
use crate::dimension::Dimension;
use crate::error::{ConversionError, ConversionResult};
use crate::ratio::UnitRatio;
use crate::unit::Unit;
use crate::units::{length, mass, storage, time, velocity};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static description of one unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitMeta {
    /// Dimension name (`"storage"`, `"length"`, …).
    pub dimension: &'static str,
    /// Exact ratio to the dimension's canonical unit.
    pub ratio: UnitRatio,
    /// Short symbol.
    pub symbol: &'static str,
    /// Long plural name.
    pub name: &'static str,
}

impl UnitMeta {
    /// Metadata of the unit type `U`.
    pub const fn of<U: Unit>() -> Self {
        Self {
            dimension: <U::Dim as Dimension>::NAME,
            ratio: U::RATIO,
            symbol: U::SYMBOL,
            name: U::NAME,
        }
    }
}

macro_rules! unit_registry {
    ($($id:ident => $unit:ty),+ $(,)?) => {
        /// Identifier of every unit in the ratio tables.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum UnitId {
            $(
                #[doc = concat!("The `", stringify!($id), "` unit.")]
                $id,
            )+
        }

        impl UnitId {
            /// Every registered unit, grouped by dimension.
            pub const ALL: &'static [UnitId] = &[$(UnitId::$id),+];

            /// Static metadata for this unit.
            pub const fn meta(self) -> UnitMeta {
                match self {
                    $(UnitId::$id => UnitMeta::of::<$unit>(),)+
                }
            }
        }
    };
}

unit_registry! {
    Byte => storage::Byte,
    Kilobyte => storage::Kilobyte,
    Megabyte => storage::Megabyte,
    Gigabyte => storage::Gigabyte,
    Terabyte => storage::Terabyte,
    Kilobit => storage::Kilobit,
    Megabit => storage::Megabit,
    Gigabit => storage::Gigabit,
    Terabit => storage::Terabit,

    Micrometer => length::Micrometer,
    Millimeter => length::Millimeter,
    Centimeter => length::Centimeter,
    Meter => length::Meter,
    Kilometer => length::Kilometer,
    Inch => length::Inch,
    Foot => length::Foot,
    Yard => length::Yard,
    Mile => length::Mile,
    AstronomicalUnit => length::AstronomicalUnit,
    LightYear => length::LightYear,
    Parsec => length::Parsec,

    Milligram => mass::Milligram,
    Gram => mass::Gram,
    Kilogram => mass::Kilogram,
    Tonne => mass::Tonne,

    Microsecond => time::Microsecond,
    Millisecond => time::Millisecond,
    Second => time::Second,
    Minute => time::Minute,
    Hour => time::Hour,
    Day => time::Day,
    Week => time::Week,
    Year => time::Year,

    MeterPerSecond => velocity::MeterPerSecond,
    KilometerPerSecond => velocity::KilometerPerSecond,
    FootPerSecond => velocity::FootPerSecond,
    MilePerSecond => velocity::MilePerSecond,
    AstronomicalUnitPerSecond => velocity::AstronomicalUnitPerSecond,
    LightYearPerSecond => velocity::LightYearPerSecond,
    ParsecPerSecond => velocity::ParsecPerSecond,
}

impl UnitId {
    /// Short symbol.
    pub const fn symbol(self) -> &'static str {
        self.meta().symbol
    }

    /// Long plural name.
    pub const fn name(self) -> &'static str {
        self.meta().name
    }

    /// Dimension name.
    pub const fn dimension(self) -> &'static str {
        self.meta().dimension
    }

    /// Exact ratio to the canonical unit.
    pub const fn ratio(self) -> UnitRatio {
        self.meta().ratio
    }

    /// Every registered unit of the named dimension.
    pub fn in_dimension(dimension: &str) -> impl Iterator<Item = UnitId> + '_ {
        Self::ALL.iter().copied().filter(move |id| id.dimension() == dimension)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Metadata for `id`.
pub const fn meta(id: UnitId) -> UnitMeta {
    id.meta()
}

/// Converts `value` from one registered unit to another.
///
/// Exact when the combined ratio is an integer; otherwise divided once at `ctx`.
pub fn convert(value: &Decimal, from: UnitId, to: UnitId, ctx: &MathContext) -> ConversionResult<Decimal> {
    let (src, dst) = (from.meta(), to.meta());
    if src.dimension != dst.dimension {
        return Err(ConversionError::UnsupportedConversion {
            from: src.symbol,
            to: dst.symbol,
        });
    }
    Ok(src.ratio.convert(value, &dst.ratio, ctx))
}
