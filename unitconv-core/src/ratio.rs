//! Exact unit ratios.

use crate::decimal::{Decimal, MathContext};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

/// Exact, strictly positive rational `numer / denom` relating a unit to the canonical unit of its dimension.
///
/// Ratios are produced at compile time by `#[derive(Unit)]`, so every table entry is plain `const` data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitRatio {
    numer: u128,
    denom: u128,
}

impl UnitRatio {
    /// The canonical unit itself.
    pub const ONE: Self = Self::new(1, 1);

    /// Creates a ratio.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if either part is zero.
    pub const fn new(numer: u128, denom: u128) -> Self {
        assert!(numer != 0 && denom != 0, "unit ratio parts must be non-zero");
        Self { numer, denom }
    }

    /// Numerator.
    pub const fn numer(&self) -> u128 {
        self.numer
    }

    /// Denominator.
    pub const fn denom(&self) -> u128 {
        self.denom
    }

    /// True when the ratio is a whole number.
    pub const fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// The ratio as a decimal, dividing at `ctx` when it does not terminate.
    pub fn to_decimal(&self, ctx: &MathContext) -> Decimal {
        let numer = Decimal::from(self.numer);
        if self.is_integer() {
            numer
        } else {
            numer.div_integer(&BigInt::from(self.denom), ctx)
        }
    }

    /// Reduced factor `(n, d)` such that `x [self] = x · n / d [target]`.
    pub(crate) fn factor_to(&self, target: &UnitRatio) -> (BigInt, BigInt) {
        let n = BigInt::from(self.numer) * BigInt::from(target.denom);
        let d = BigInt::from(self.denom) * BigInt::from(target.numer);
        let g = n.gcd(&d);
        (n / &g, d / g)
    }

    /// Rescales `value` from this unit to `target`.
    ///
    /// Exact when the combined factor has denominator one; otherwise a single division at `ctx`.
    pub fn convert(&self, value: &Decimal, target: &UnitRatio, ctx: &MathContext) -> Decimal {
        let (n, d) = self.factor_to(target);
        let scaled = value.mul_integer(&n);
        if d.is_one() {
            scaled
        } else {
            scaled.div_integer(&d, ctx)
        }
    }
}
