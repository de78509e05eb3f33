//! Auto-scale rendering.
//!
//! A *ladder* is a slice of [`ScaleTier`]s ordered from the largest unit down. [`auto_scale`] walks the ladder and
//! renders the quantity in the first unit it reaches (`magnitude >= 1 tier-unit`), falling back to the quantity's
//! own unit when none match.
//!
//! ```rust
//! use unitconv_core::format::{auto_scale, Fallback, RenderSettings, ScaleTier};
//! use unitconv_core::storage::{Bytes, Kilobyte, Megabyte, Storage};
//!
//! const LADDER: &[ScaleTier<Storage>] = &[ScaleTier::of::<Megabyte>("MB"), ScaleTier::of::<Kilobyte>("KB")];
//!
//! let size = Bytes::try_new(1536).unwrap();
//! let text = auto_scale(&size, LADDER, "B", Fallback::Integer, &RenderSettings::default());
//! assert_eq!(text, "1.50 KB");
//! ```

use crate::decimal::{pow10, Decimal, MathContext};
use crate::dimension::Dimension;
use crate::error::{ConversionError, ConversionResult};
use crate::quantity::Quantity;
use crate::ratio::UnitRatio;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of fractional digits in rendered values.
pub const DEFAULT_PRECISION: u32 = 2;

/// Rendering knobs shared by every converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderSettings {
    /// Fractional digits printed for scaled values (half-up).
    pub precision: u32,
}

impl RenderSettings {
    /// Settings with the given precision.
    pub const fn new(precision: u32) -> Self {
        Self { precision }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

/// How the smallest unit is printed when no tier matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Whole count, truncated (`"1023 B"`).
    Integer,
    /// Same precision as the scaled tiers (`"12.00 Inches"`).
    Decimal,
}

/// One rung of a display ladder: a unit ratio and the label printed after the value.
pub struct ScaleTier<D: Dimension> {
    ratio: UnitRatio,
    label: &'static str,
    _dim: PhantomData<fn() -> D>,
}

impl<D: Dimension> ScaleTier<D> {
    /// Tier for unit `U` printed with a custom label.
    pub const fn of<U: Unit<Dim = D>>(label: &'static str) -> Self {
        Self {
            ratio: U::RATIO,
            label,
            _dim: PhantomData,
        }
    }

    /// Tier for unit `U` printed with its long name.
    pub const fn named<U: Unit<Dim = D>>() -> Self {
        Self::of::<U>(U::NAME)
    }

    /// Ratio of the tier's unit to the canonical unit.
    pub const fn ratio(&self) -> UnitRatio {
        self.ratio
    }

    /// Printed label.
    pub const fn label(&self) -> &'static str {
        self.label
    }
}

impl<D: Dimension> Clone for ScaleTier<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for ScaleTier<D> {}

impl<D: Dimension> fmt::Debug for ScaleTier<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleTier")
            .field("dimension", &D::NAME)
            .field("ratio", &self.ratio)
            .field("label", &self.label)
            .finish()
    }
}

fn cmp_ratio(a: &UnitRatio, b: &UnitRatio) -> Ordering {
    let lhs = BigInt::from(a.numer()) * BigInt::from(b.denom());
    let rhs = BigInt::from(b.numer()) * BigInt::from(a.denom());
    lhs.cmp(&rhs)
}

/// `value [base] >= 1 [tier]`, decided by exact cross-multiplication.
fn reaches(value: &Decimal, base: &UnitRatio, tier: &UnitRatio) -> bool {
    // m · 10^-s · bn/bd >= tn/td  <=>  m · bn · td >= tn · bd · 10^s
    let lhs = value.mantissa() * BigInt::from(base.numer()) * BigInt::from(tier.denom());
    let rhs = BigInt::from(tier.numer()) * BigInt::from(base.denom()) * pow10(value.scale());
    lhs >= rhs
}

/// Checks that a ladder is strictly descending.
///
/// Returns [`ConversionError::UnorderedLadder`] with the index of the first tier that is not smaller than the one
/// before it.
pub fn validate_ladder<D: Dimension>(tiers: &[ScaleTier<D>]) -> ConversionResult<()> {
    for (index, pair) in tiers.windows(2).enumerate() {
        if cmp_ratio(&pair[1].ratio, &pair[0].ratio) != Ordering::Less {
            return Err(ConversionError::UnorderedLadder { index: index + 1 });
        }
    }
    Ok(())
}

/// Renders `quantity` in the largest tier it reaches.
///
/// Scaled values are converted at [`MathContext::DEFAULT`] and printed with `settings.precision` fractional digits,
/// rounded half-up. When no tier matches, the value is printed in the quantity's own unit with `fallback_label`.
pub fn auto_scale<B: Unit>(
    quantity: &Quantity<B>,
    tiers: &[ScaleTier<B::Dim>],
    fallback_label: &str,
    fallback: Fallback,
    settings: &RenderSettings,
) -> String {
    let precision = settings.precision as usize;

    if let Some(tier) = tiers.iter().find(|t| reaches(quantity.value(), &B::RATIO, &t.ratio)) {
        log::trace!(
            "{} {} ({}) rendered in tier {}",
            quantity.value(),
            B::SYMBOL,
            <B::Dim as Dimension>::NAME,
            tier.label
        );
        let scaled = quantity.to_ratio(&tier.ratio, &MathContext::DEFAULT);
        return format!("{:.*} {}", precision, scaled, tier.label);
    }

    log::trace!("{} {} below every tier, using fallback", quantity.value(), B::SYMBOL);
    match fallback {
        Fallback::Integer => format!("{} {}", quantity.value().trunc_to_bigint(), fallback_label),
        Fallback::Decimal => format!("{:.*} {}", precision, quantity.value(), fallback_label),
    }
}
