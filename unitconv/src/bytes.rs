//! Storage sizes.
//!
//! [`ByteConverter`] stores a byte count exactly. Every byte and bit ratio is an integer number of bytes, so
//! construction never rounds; only the `to_*` accessors above one byte divide.
//!
//! ```rust
//! use unitconv::bytes::ByteConverter;
//!
//! let mut size = ByteConverter::from_bytes(1000).unwrap();
//! size.add_kilobytes(1).unwrap();
//! assert_eq!(size.to_bytes(), unitconv::BigInt::from(2024));
//! assert_eq!(size.to_string(), "1.98 KB");
//! ```

use core::fmt;
use num_bigint::BigInt;

use crate::format::{auto_scale, Fallback, RenderSettings, ScaleTier};
use crate::units::storage::*;
use crate::{validate, ConversionResult, IntoDecimal, MathContext, Quantity};

/// Display ladder, largest first.
pub const LADDER: &[ScaleTier<Storage>] = &[
    ScaleTier::of::<Terabyte>("TB"),
    ScaleTier::of::<Gigabyte>("GB"),
    ScaleTier::of::<Megabyte>("MB"),
    ScaleTier::of::<Kilobyte>("KB"),
];

/// A non-negative storage size held in bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteConverter {
    bytes: Bytes,
}

impl ByteConverter {
    fn from_unit<U: StorageUnit>(value: impl IntoDecimal) -> ConversionResult<Self> {
        let quantity = Quantity::<U>::non_negative(value)?;
        Ok(Self {
            bytes: quantity.to::<Byte>(),
        })
    }

    unit_factories! {
        from_bytes => Byte,
        from_kilobytes => Kilobyte,
        from_megabytes => Megabyte,
        from_gigabytes => Gigabyte,
        from_terabytes => Terabyte,
        from_kilobits => Kilobit,
        from_megabits => Megabit,
        from_gigabits => Gigabit,
        from_terabits => Terabit,
    }

    /// Adds `delta` (which may be negative) expressed in unit `U`.
    ///
    /// A sum below zero fails with [`ConversionError::NegativeMagnitude`](crate::ConversionError::NegativeMagnitude)
    /// and leaves the stored size unchanged.
    pub fn add<U: StorageUnit>(&mut self, delta: impl IntoDecimal) -> ConversionResult<&mut Self> {
        let delta = Quantity::<U>::try_new(delta)?.to::<Byte>();
        let next = validate::checked_sum(self.bytes.value(), delta.value())?;
        self.bytes = Bytes::new(next);
        Ok(self)
    }

    /// Adds bytes. See [`ByteConverter::add`].
    pub fn add_bytes(&mut self, delta: impl IntoDecimal) -> ConversionResult<&mut Self> {
        self.add::<Byte>(delta)
    }

    /// Adds kilobytes. See [`ByteConverter::add`].
    pub fn add_kilobytes(&mut self, delta: impl IntoDecimal) -> ConversionResult<&mut Self> {
        self.add::<Kilobyte>(delta)
    }

    /// Adds megabytes. See [`ByteConverter::add`].
    pub fn add_megabytes(&mut self, delta: impl IntoDecimal) -> ConversionResult<&mut Self> {
        self.add::<Megabyte>(delta)
    }

    /// Adds gigabytes. See [`ByteConverter::add`].
    pub fn add_gigabytes(&mut self, delta: impl IntoDecimal) -> ConversionResult<&mut Self> {
        self.add::<Gigabyte>(delta)
    }

    /// Adds terabytes. See [`ByteConverter::add`].
    pub fn add_terabytes(&mut self, delta: impl IntoDecimal) -> ConversionResult<&mut Self> {
        self.add::<Terabyte>(delta)
    }

    /// Whole bytes, truncating any fraction left by a fractional factory input.
    pub fn to_bytes(&self) -> BigInt {
        self.bytes.value().trunc_to_bigint()
    }

    unit_accessors! {
        to_kilobytes => Kilobyte,
        to_megabytes => Megabyte,
        to_gigabytes => Gigabyte,
        to_terabytes => Terabyte,
        to_kilobits => Kilobit,
        to_megabits => Megabit,
        to_gigabits => Gigabit,
        to_terabits => Terabit,
    }

    /// The size in any storage unit at [`MathContext::DEFAULT`].
    pub fn to<U: StorageUnit>(&self) -> Quantity<U> {
        self.bytes.to::<U>()
    }

    /// The size in any storage unit at an explicit context.
    pub fn to_in<U: StorageUnit>(&self, ctx: &MathContext) -> Quantity<U> {
        self.bytes.to_in::<U>(ctx)
    }

    /// The stored byte quantity, including any fraction.
    pub fn as_quantity(&self) -> &Bytes {
        &self.bytes
    }

    /// Renders in the largest unit reached: `"1.50 KB"`, or `"1023 B"` below one kilobyte.
    pub fn render(&self) -> String {
        self.render_with(&RenderSettings::default())
    }

    /// [`ByteConverter::render`] with explicit settings.
    pub fn render_with(&self, settings: &RenderSettings) -> String {
        auto_scale(&self.bytes, LADDER, "B", Fallback::Integer, settings)
    }
}

impl fmt::Display for ByteConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::validate_ladder;
    use crate::{ConversionError, Decimal};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Factories
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_bytes_roundtrip() {
        assert_eq!(ByteConverter::from_bytes(1_264_978).unwrap().to_bytes(), BigInt::from(1_264_978));
    }

    #[test]
    fn fractional_factories_are_exact() {
        assert_eq!(ByteConverter::from_kilobytes(1.5).unwrap().to_bytes(), BigInt::from(1536));
        assert_eq!(ByteConverter::from_megabits("0.5").unwrap().to_bytes(), BigInt::from(65_536));
        assert_eq!(
            ByteConverter::from_terabytes(2).unwrap().to_bytes(),
            BigInt::from(2u64 * 1024u64.pow(4))
        );
    }

    #[test]
    fn negative_input_is_rejected() {
        let err = ByteConverter::from_bytes(-1).unwrap_err();
        assert_eq!(err, ConversionError::NegativeMagnitude { value: dec("-1") });
        assert!(ByteConverter::from_gigabits(-0.1).is_err());
    }

    #[test]
    fn to_bytes_truncates() {
        let c = ByteConverter::from_kilobits("0.01").unwrap();
        assert_eq!(c.as_quantity().value(), &dec("1.28"));
        assert_eq!(c.to_bytes(), BigInt::from(1));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_chains() {
        let mut c = ByteConverter::from_bytes(0).unwrap();
        c.add_kilobytes(1).unwrap().add_bytes(24).unwrap().add_megabytes("0.5").unwrap();
        assert_eq!(c.to_bytes(), BigInt::from(1024 + 24 + 524_288));
    }

    #[test]
    fn negative_delta_subtracts() {
        let mut c = ByteConverter::from_kilobytes(2).unwrap();
        c.add_bytes(-48).unwrap();
        assert_eq!(c.to_bytes(), BigInt::from(2000));
        c.add_bytes(-2000).unwrap();
        assert_eq!(c.to_bytes(), BigInt::from(0));
    }

    #[test]
    fn add_below_zero_fails_and_keeps_state() {
        let mut c = ByteConverter::from_bytes(1000).unwrap();
        let err = c.add_kilobytes(-1).unwrap_err();
        assert_eq!(err, ConversionError::NegativeMagnitude { value: dec("-24") });
        assert_eq!(c.to_bytes(), BigInt::from(1000));
    }

    #[test]
    fn add_rejects_bad_input() {
        let mut c = ByteConverter::from_bytes(1).unwrap();
        assert!(matches!(c.add_terabytes(f64::INFINITY), Err(ConversionError::InvalidFormat(_))));
        assert!(c.add_gigabytes("1,5").is_err());
        assert_eq!(c.to_bytes(), BigInt::from(1));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn accessors() {
        let c = ByteConverter::from_gigabytes(1).unwrap();
        assert_eq!(c.to_megabytes(), dec("1024"));
        assert_eq!(c.to_kilobytes(), dec("1048576"));
        assert_eq!(c.to_terabytes(), dec("0.0009765625"));
        assert_eq!(c.to_gigabits(), dec("8"));
        assert_eq!(c.to_megabits(), dec("8192"));
        assert_eq!(c.to_kilobits(), dec("8388608"));
        assert_eq!(c.to_terabits(), dec("0.0078125"));
    }

    #[test]
    fn to_in_uses_given_context() {
        let c = ByteConverter::from_bytes(1000).unwrap();
        let kb = c.to_in::<Kilobyte>(&MathContext::new(2, crate::RoundingMode::Down));
        assert_eq!(kb.value().to_string(), "0.97");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ladder_is_descending() {
        assert!(validate_ladder(LADDER).is_ok());
    }

    #[test]
    fn render_thresholds() {
        assert_eq!(ByteConverter::from_bytes(1023).unwrap().render(), "1023 B");
        assert_eq!(ByteConverter::from_bytes(1024).unwrap().render(), "1.00 KB");
        assert_eq!(ByteConverter::from_megabytes(1).unwrap().render(), "1.00 MB");
        assert_eq!(ByteConverter::from_gigabytes("1.5").unwrap().render(), "1.50 GB");
        assert_eq!(ByteConverter::from_terabytes(3).unwrap().to_string(), "3.00 TB");
    }

    #[test]
    fn render_with_precision() {
        let c = ByteConverter::from_bytes(1_264_978).unwrap();
        assert_eq!(c.render_with(&RenderSettings::new(4)), "1.2064 MB");
    }
}
