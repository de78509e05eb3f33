//! Quantity type and its implementations.

use crate::decimal::{Decimal, IntoDecimal, MathContext};
use crate::error::ConversionResult;
use crate::ratio::UnitRatio;
use crate::unit::Unit;
use crate::validate;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U>` wraps an exact [`Decimal`] together with phantom type information about its unit `U`. Converting
/// between two units of the same dimension is checked at compile time; converting across dimensions does not
/// type-check.
///
/// # Examples
///
/// ```rust
/// use unitconv_core::storage::{Bytes, Kilobyte};
///
/// let size = Bytes::try_new(2048).unwrap();
/// let kb = size.to::<Kilobyte>();
/// assert_eq!(kb.value().normalize().to_string(), "2");
/// ```
#[derive(Clone, Debug)]
pub struct Quantity<U: Unit>(Decimal, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity with the given value. No sign check is made.
    ///
    /// ```rust
    /// use unitconv_core::length::Meters;
    /// use unitconv_core::Decimal;
    /// let d = Meters::new(Decimal::from(3));
    /// assert_eq!(d.value(), &Decimal::from(3));
    /// ```
    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value, PhantomData)
    }

    /// Creates a quantity from any [`IntoDecimal`] input.
    ///
    /// Fails only when the input is not a number (bad text, NaN, infinity).
    pub fn try_new(value: impl IntoDecimal) -> ConversionResult<Self> {
        Ok(Self::new(value.into_decimal()?))
    }

    /// Creates a quantity, rejecting values below zero.
    ///
    /// ```rust
    /// use unitconv_core::mass::Kilograms;
    /// assert!(Kilograms::non_negative(-1).is_err());
    /// assert!(Kilograms::non_negative(0).is_ok());
    /// ```
    pub fn non_negative(value: impl IntoDecimal) -> ConversionResult<Self> {
        let value = value.into_decimal()?;
        validate::non_negative(&value)?;
        Ok(Self::new(value))
    }

    /// Zero in this unit.
    pub fn zero() -> Self {
        Self::new(Decimal::zero())
    }

    /// Borrows the raw numeric value.
    #[inline]
    pub fn value(&self) -> &Decimal {
        &self.0
    }

    /// Consumes the quantity and returns its value.
    #[inline]
    pub fn into_value(self) -> Decimal {
        self.0
    }

    /// True when strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.0.abs())
    }

    /// Converts this quantity to another unit of the same dimension using [`MathContext::DEFAULT`].
    ///
    /// ```rust
    /// use unitconv_core::length::{Inch, Miles};
    /// let mi = Miles::try_new(1).unwrap();
    /// assert_eq!(mi.to::<Inch>().value().to_string(), "63360");
    /// ```
    #[inline]
    pub fn to<T: Unit<Dim = U::Dim>>(&self) -> Quantity<T> {
        self.to_in::<T>(&MathContext::DEFAULT)
    }

    /// Same as [`Quantity::to`] with an explicit division context.
    pub fn to_in<T: Unit<Dim = U::Dim>>(&self, ctx: &MathContext) -> Quantity<T> {
        Quantity::new(self.to_ratio(&T::RATIO, ctx))
    }

    /// Raw value of this quantity expressed in a unit with the given ratio.
    ///
    /// The caller is responsible for the target ratio belonging to the same dimension.
    pub fn to_ratio(&self, target: &UnitRatio, ctx: &MathContext) -> Decimal {
        U::RATIO.convert(&self.0, target, ctx)
    }

    /// Adds a quantity of any unit in the same dimension, returning the sum in `U`.
    ///
    /// ```rust
    /// use unitconv_core::storage::{Bytes, Kilobytes};
    /// let total = Bytes::try_new(1000)
    ///     .unwrap()
    ///     .plus(&Kilobytes::try_new(1).unwrap());
    /// assert_eq!(total.value().to_string(), "2024");
    /// ```
    pub fn plus<T: Unit<Dim = U::Dim>>(&self, other: &Quantity<T>) -> Self {
        Self::new(&self.0 + &other.to::<U>().0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Equality, ordering, hashing (numeric, unit-local)
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Unit> Eq for Quantity<U> {}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Unit> Ord for Quantity<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::zero()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> Add<&Quantity<U>> for &Quantity<U> {
    type Output = Quantity<U>;
    #[inline]
    fn add(self, rhs: &Quantity<U>) -> Quantity<U> {
        Quantity::new(&self.0 + &rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = &self.0 + &rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> Sub<&Quantity<U>> for &Quantity<U> {
    type Output = Quantity<U>;
    #[inline]
    fn sub(self, rhs: &Quantity<U>) -> Quantity<U> {
        Quantity::new(&self.0 - &rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = &self.0 - &rhs.0;
    }
}

impl<U: Unit> Mul<&Decimal> for &Quantity<U> {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: &Decimal) -> Quantity<U> {
        Quantity::new(&self.0 * rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> From<Decimal> for Quantity<U> {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Decimal::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit symbol next to the value.
///
/// # Examples
///
/// ```rust
/// use unitconv_core::length::Kilometers;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Leg {
///     #[serde(with = "unitconv_core::serde_with_unit")]
///     distance: Kilometers,  // {"value": "12.5", "unit": "km"}
///
///     detour: Kilometers,    // "0.3"
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<U>` as a struct with `value` and `unit` fields.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<U>` from a struct with `value` and an optional `unit` field.
    ///
    /// A `unit` that differs from `U::SYMBOL` is rejected.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<Decimal> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(ref unit_str) = unit {
                    if unit_str != U::SYMBOL {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            U::SYMBOL,
                            unit_str
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}
