//! Arbitrary-precision decimal numbers.
//!
//! A [`Decimal`] is an unbounded integer mantissa paired with a base-10 scale:
//! `value = mantissa × 10^-scale`. Addition, subtraction and multiplication are exact. Division always takes an
//! explicit [`MathContext`] (target scale + [`RoundingMode`]) so non-terminating quotients are rounded instead of
//! failing.
//!
//! Equality, ordering and hashing are numeric: `1.50`, `1.5` and `1.500` compare equal.

use crate::error::{ConversionError, ConversionResult};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scale used by [`MathContext::DEFAULT`].
pub const DEFAULT_SCALE: u32 = 100;

/// Largest absolute exponent accepted when parsing decimal text.
const MAX_EXPONENT: i64 = 10_000;

pub(crate) fn pow10(exp: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

// ─────────────────────────────────────────────────────────────────────────────
// Rounding policy
// ─────────────────────────────────────────────────────────────────────────────

/// Rounding rule applied whenever digits are discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// To nearest; ties away from zero.
    #[default]
    HalfUp,
    /// To nearest; ties towards zero.
    HalfDown,
    /// To nearest; ties to the even neighbour.
    HalfEven,
}

/// Target scale and rounding rule for division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MathContext {
    /// Number of fractional digits kept in a quotient.
    pub scale: u32,
    /// Rounding rule for the discarded digits.
    pub rounding: RoundingMode,
}

impl MathContext {
    /// 100 fractional digits, half-up.
    pub const DEFAULT: Self = Self {
        scale: DEFAULT_SCALE,
        rounding: RoundingMode::HalfUp,
    };

    /// Creates a context with the given scale and rounding rule.
    pub const fn new(scale: u32, rounding: RoundingMode) -> Self {
        Self { scale, rounding }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Divides `n` by the non-zero `d`, rounding the integer quotient with `mode`.
fn round_div(n: &BigInt, d: &BigInt, mode: RoundingMode) -> BigInt {
    let negative = n.sign() != Sign::NoSign && (n.sign() == Sign::Minus) != (d.sign() == Sign::Minus);
    let d_abs = d.abs();
    let (q, r) = n.abs().div_rem(&d_abs);

    if r.is_zero() {
        return if negative { -q } else { q };
    }

    let twice_r = &r << 1usize;
    let increment = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp => twice_r >= d_abs,
        RoundingMode::HalfDown => twice_r > d_abs,
        RoundingMode::HalfEven => match twice_r.cmp(&d_abs) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => q.is_odd(),
        },
    };

    let q = if increment { q + 1u8 } else { q };
    if negative {
        -q
    } else {
        q
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decimal
// ─────────────────────────────────────────────────────────────────────────────

/// Arbitrary-precision signed decimal.
#[derive(Clone, Debug)]
pub struct Decimal {
    mantissa: BigInt,
    scale: u32,
}

impl Decimal {
    /// Builds a decimal from its raw parts: `mantissa × 10^-scale`.
    ///
    /// ```rust
    /// use unitconv_core::Decimal;
    /// let d = Decimal::new(12345.into(), 2);
    /// assert_eq!(d.to_string(), "123.45");
    /// ```
    pub fn new(mantissa: BigInt, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Zero with scale 0.
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// One with scale 0.
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// Converts an `f64` through its shortest round-tripping decimal text, so `1.34` becomes exactly `1.34`.
    ///
    /// Fails with [`ConversionError::InvalidFormat`] for NaN and infinities.
    pub fn from_f64(value: f64) -> ConversionResult<Self> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidFormat(value.to_string()));
        }
        value.to_string().parse()
    }

    /// Same as [`Decimal::from_f64`], using the `f32` shortest representation.
    pub fn from_f32(value: f32) -> ConversionResult<Self> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidFormat(value.to_string()));
        }
        value.to_string().parse()
    }

    /// Unscaled integer mantissa.
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of fractional digits in the stored representation.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        match self.mantissa.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// True for any representation of zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// True when strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.mantissa.abs(), self.scale)
    }

    fn aligned(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            self.mantissa.clone()
        } else {
            &self.mantissa * pow10(scale - self.scale)
        }
    }

    /// Divides by `rhs`, keeping `ctx.scale` fractional digits.
    ///
    /// ```rust
    /// use unitconv_core::{Decimal, MathContext, RoundingMode};
    /// let two_thirds = Decimal::from(2)
    ///     .div(&Decimal::from(3), &MathContext::new(4, RoundingMode::HalfUp))
    ///     .unwrap();
    /// assert_eq!(two_thirds.to_string(), "0.6667");
    /// ```
    pub fn div(&self, rhs: &Decimal, ctx: &MathContext) -> ConversionResult<Decimal> {
        if rhs.is_zero() {
            return Err(ConversionError::DivisionByZero);
        }

        // q × 10^s = a_m × 10^(s + b_s - a_s) / b_m
        let shift = i64::from(ctx.scale) + i64::from(rhs.scale) - i64::from(self.scale);
        let (numer, denom) = if shift >= 0 {
            (&self.mantissa * pow10(shift as u32), rhs.mantissa.clone())
        } else {
            (self.mantissa.clone(), &rhs.mantissa * pow10((-shift) as u32))
        };

        Ok(Self::new(round_div(&numer, &denom, ctx.rounding), ctx.scale))
    }

    /// Divides by a non-zero integer. Callers guarantee `divisor != 0`.
    pub(crate) fn div_integer(&self, divisor: &BigInt, ctx: &MathContext) -> Decimal {
        debug_assert!(!divisor.is_zero());
        let (numer, denom) = if ctx.scale >= self.scale {
            (&self.mantissa * pow10(ctx.scale - self.scale), divisor.clone())
        } else {
            (self.mantissa.clone(), divisor * pow10(self.scale - ctx.scale))
        };
        Self::new(round_div(&numer, &denom, ctx.rounding), ctx.scale)
    }

    /// Multiplies by an integer (exact).
    pub(crate) fn mul_integer(&self, factor: &BigInt) -> Decimal {
        Self::new(&self.mantissa * factor, self.scale)
    }

    /// Rescales to exactly `scale` fractional digits, rounding with `mode` if digits are dropped.
    pub fn with_scale(&self, scale: u32, mode: RoundingMode) -> Decimal {
        if scale >= self.scale {
            Self::new(self.aligned(scale), scale)
        } else {
            let divisor = pow10(self.scale - scale);
            Self::new(round_div(&self.mantissa, &divisor, mode), scale)
        }
    }

    /// Rounds half-up to `dp` fractional digits.
    pub fn round_dp(&self, dp: u32) -> Decimal {
        self.with_scale(dp, RoundingMode::HalfUp)
    }

    /// Strips trailing fractional zeros.
    ///
    /// ```rust
    /// use unitconv_core::Decimal;
    /// let d: Decimal = "2.5000".parse().unwrap();
    /// assert_eq!(d.normalize().to_string(), "2.5");
    /// ```
    pub fn normalize(&self) -> Decimal {
        if self.mantissa.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u8);
        let mut mantissa = self.mantissa.clone();
        let mut scale = self.scale;
        while scale > 0 {
            let (q, r) = mantissa.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            mantissa = q;
            scale -= 1;
        }
        Self::new(mantissa, scale)
    }

    /// Integer part, truncated towards zero.
    pub fn trunc_to_bigint(&self) -> BigInt {
        if self.scale == 0 {
            self.mantissa.clone()
        } else {
            &self.mantissa / pow10(self.scale)
        }
    }

    /// Nearest `f64` (lossy).
    pub fn to_f64(&self) -> f64 {
        self.to_plain_string().parse().unwrap_or(f64::NAN)
    }

    fn to_plain_string(&self) -> String {
        let digits = self.mantissa.abs().to_string();
        let mut out = String::with_capacity(digits.len() + 3);
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&Self::place_point(&digits, self.scale));
        out
    }

    fn place_point(digits: &str, scale: u32) -> String {
        let scale = scale as usize;
        if scale == 0 {
            return digits.to_string();
        }
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            format!("{}.{}", int, frac)
        } else {
            format!("0.{}{}", "0".repeat(scale - digits.len()), digits)
        }
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing and display
// ─────────────────────────────────────────────────────────────────────────────

impl FromStr for Decimal {
    type Err = ConversionError;

    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`; at least one digit is required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConversionError::InvalidFormat(s.to_string());

        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(invalid()),
        };

        let (body, exponent) = match unsigned.find(['e', 'E']) {
            Some(pos) => {
                let exp: i64 = unsigned[pos + 1..].parse().map_err(|_| invalid())?;
                if exp.abs() > MAX_EXPONENT {
                    return Err(invalid());
                }
                (&unsigned[..pos], exp)
            }
            None => (unsigned, 0),
        };

        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let mut mantissa: BigInt = digits.parse().map_err(|_| invalid())?;
        if negative {
            mantissa = -mantissa;
        }

        let scale = frac_part.len() as i64 - exponent;
        if scale >= 0 {
            Ok(Self::new(mantissa, scale as u32))
        } else {
            Ok(Self::new(mantissa * pow10((-scale) as u32), 0))
        }
    }
}

impl fmt::Display for Decimal {
    /// Plain notation honouring the stored scale. A precision (`{:.2}`) rounds half-up first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = match f.precision() {
            Some(p) => self.round_dp(p as u32),
            None => self.clone(),
        };
        let digits = Self::place_point(&shown.mantissa.abs().to_string(), shown.scale);
        f.pad_integral(!shown.is_negative(), "", &digits)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric equality and ordering
// ─────────────────────────────────────────────────────────────────────────────

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.aligned(scale).cmp(&other.aligned(scale))
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.mantissa.hash(state);
        n.scale.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

impl Add<&Decimal> for &Decimal {
    type Output = Decimal;
    fn add(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal::new(self.aligned(scale) + rhs.aligned(scale), scale)
    }
}

impl Sub<&Decimal> for &Decimal {
    type Output = Decimal;
    fn sub(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal::new(self.aligned(scale) - rhs.aligned(scale), scale)
    }
}

impl Mul<&Decimal> for &Decimal {
    type Output = Decimal;
    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal::new(&self.mantissa * &rhs.mantissa, self.scale + rhs.scale)
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident :: $method:ident),+ $(,)?) => {
        $(
            impl $trait for Decimal {
                type Output = Decimal;
                fn $method(self, rhs: Decimal) -> Decimal {
                    (&self).$method(&rhs)
                }
            }

            impl $trait<&Decimal> for Decimal {
                type Output = Decimal;
                fn $method(self, rhs: &Decimal) -> Decimal {
                    (&self).$method(rhs)
                }
            }
        )+
    };
}

forward_owned_binop!(Add::add, Sub::sub, Mul::mul);

impl Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal::new(-self.mantissa, self.scale)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal::new(-&self.mantissa, self.scale)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions into Decimal
// ─────────────────────────────────────────────────────────────────────────────

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Loss-free conversion of caller input into a [`Decimal`].
///
/// Implemented for every primitive integer, `f32`/`f64` (via shortest decimal text), decimal strings, [`BigInt`]
/// and [`Decimal`] itself. Converter factories accept `impl IntoDecimal`.
pub trait IntoDecimal {
    /// Performs the conversion.
    fn into_decimal(self) -> ConversionResult<Decimal>;
}

macro_rules! impl_into_decimal_integer {
    ($($t:ty),+) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> ConversionResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )+
    };
}

impl_into_decimal_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoDecimal for f64 {
    fn into_decimal(self) -> ConversionResult<Decimal> {
        Decimal::from_f64(self)
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self) -> ConversionResult<Decimal> {
        Decimal::from_f32(self)
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> ConversionResult<Decimal> {
        self.parse()
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> ConversionResult<Decimal> {
        self.parse()
    }
}

impl IntoDecimal for BigInt {
    fn into_decimal(self) -> ConversionResult<Decimal> {
        Ok(Decimal::from(self))
    }
}

impl IntoDecimal for Decimal {
    fn into_decimal(self) -> ConversionResult<Decimal> {
        Ok(self)
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self) -> ConversionResult<Decimal> {
        Ok(self.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serialized as its plain decimal string so no precision is lost.
#[cfg(feature = "serde")]
impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Accepts a decimal string, an integer or a float.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct DecimalVisitor;

        impl Visitor<'_> for DecimalVisitor {
            type Value = Decimal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal number or decimal string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
                v.parse().map_err(de::Error::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
                Ok(Decimal::from(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
                Ok(Decimal::from(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
                Decimal::from_f64(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(DecimalVisitor)
    }
}
