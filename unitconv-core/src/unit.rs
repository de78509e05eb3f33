//! Unit trait.

use crate::dimension::Dimension;
use crate::ratio::UnitRatio;
use core::fmt::Debug;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the exact factor from this unit to the *canonical unit* of its dimension. With bytes canonical for
///   storage (`Byte::RATIO == 1`), kilobytes use `Kilobyte::RATIO == 1024` because `1 KB = 1024 B`.
///
/// * `SYMBOL` is the short printable label (`"KB"`); `NAME` is the long plural label (`"Kilobytes"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`], so only same-dimension conversions type-check.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` is strictly positive (enforced by [`UnitRatio::new`]).
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-canonical conversion factor.
    const RATIO: UnitRatio;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Short symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Long plural name.
    const NAME: &'static str;
}
