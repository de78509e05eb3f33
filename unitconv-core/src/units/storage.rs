//! Storage (data size) units.
//!
//! The canonical scaling unit for this dimension is [`Byte`] (`Byte::RATIO == 1`). Prefixes are binary
//! (`1 KB = 1024 B`), and every bit unit is its byte counterpart divided by eight, so `1 Kbit = 128 B`.
//!
//! ```rust
//! use unitconv_core::storage::{Gigabytes, Megabit};
//!
//! let gb = Gigabytes::try_new(1).unwrap();
//! assert_eq!(gb.to::<Megabit>().value().to_string(), "8192");
//! ```

use crate::{Dimension, Quantity, Unit};
use unitconv_derive::Unit;

/// Dimension tag for storage size.
#[derive(Debug)]
pub enum Storage {}
impl Dimension for Storage {
    const NAME: &'static str = "storage";
}

/// Marker trait for any [`Unit`] whose dimension is [`Storage`].
pub trait StorageUnit: Unit<Dim = Storage> {}
impl<T: Unit<Dim = Storage>> StorageUnit for T {}

/// Byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
#[unit(symbol = "B", name = "Bytes", dimension = Storage, ratio = 1)]
pub struct Byte;
/// A quantity measured in bytes.
pub type Bytes = Quantity<Byte>;

/// Declares a binary-prefixed byte unit together with its bit counterpart.
///
/// `$ratio` and `$bit_ratio` are string literals giving the exact factor to bytes.
macro_rules! binary_prefix {
    (
        $byte:ident, $byte_qty:ident, $byte_sym:literal, $byte_name:literal, $ratio:literal;
        $bit:ident, $bit_qty:ident, $bit_sym:literal, $bit_name:literal, $bit_ratio:literal
    ) => {
        #[doc = concat!("Binary-prefixed byte unit (`1 ", $byte_sym, " = ", $ratio, " B`).")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
        #[unit(symbol = $byte_sym, name = $byte_name, dimension = Storage, ratio = $ratio)]
        pub struct $byte;
        #[doc = concat!("A quantity measured in ", $byte_name, ".")]
        pub type $byte_qty = Quantity<$byte>;

        #[doc = concat!("Binary-prefixed bit unit (`1 ", $bit_sym, " = ", $bit_ratio, " B`).")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Unit)]
        #[unit(symbol = $bit_sym, name = $bit_name, dimension = Storage, ratio = $bit_ratio)]
        pub struct $bit;
        #[doc = concat!("A quantity measured in ", $bit_name, ".")]
        pub type $bit_qty = Quantity<$bit>;
    };
}

binary_prefix!(
    Kilobyte, Kilobytes, "KB", "Kilobytes", "1024";
    Kilobit, Kilobits, "Kbit", "Kilobits", "1024 / 8"
);
binary_prefix!(
    Megabyte, Megabytes, "MB", "Megabytes", "1048576";
    Megabit, Megabits, "Mbit", "Megabits", "1048576 / 8"
);
binary_prefix!(
    Gigabyte, Gigabytes, "GB", "Gigabytes", "1073741824";
    Gigabit, Gigabits, "Gbit", "Gigabits", "1073741824 / 8"
);
binary_prefix!(
    Terabyte, Terabytes, "TB", "Terabytes", "1099511627776";
    Terabit, Terabits, "Tbit", "Terabits", "1099511627776 / 8"
);

crate::impl_unit_conversions!(Byte, Kilobyte, Megabyte, Gigabyte, Terabyte, Kilobit, Megabit, Gigabit, Terabit);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Decimal;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Ratio table
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn byte_ladder_is_binary() {
        assert_eq!(Kilobyte::RATIO.numer(), 1024);
        assert_eq!(Megabyte::RATIO.numer(), 1024 * 1024);
        assert_eq!(Gigabyte::RATIO.numer(), 1024 * 1024 * 1024);
        assert_eq!(Terabyte::RATIO.numer(), 1024u128.pow(4));
        assert!(Terabyte::RATIO.is_integer());
    }

    #[test]
    fn bit_ratio_is_byte_ratio_over_eight() {
        assert_eq!(Kilobit::RATIO.numer(), 128);
        assert!(Kilobit::RATIO.is_integer());
        assert_eq!(Terabit::RATIO.numer(), 1024u128.pow(4) / 8);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilobyte_to_bytes() {
        let kb = Kilobytes::try_new("1.5").unwrap();
        assert_eq!(kb.to::<Byte>().value(), &dec("1536"));
    }

    #[test]
    fn bytes_to_megabytes_divides_at_default_scale() {
        let b = Bytes::try_new(1_264_978).unwrap();
        let mb = b.to::<Megabyte>();
        assert_relative_eq!(mb.value().to_f64(), 1.2063770294189453, max_relative = 1e-12);
        assert_eq!(mb.value(), &dec("1.2063770294189453125"));
    }

    #[test]
    fn one_byte_is_eight_bits() {
        let b = Bytes::try_new(1).unwrap();
        let kbit = b.to::<Kilobit>();
        assert_eq!(kbit.value(), &dec("0.0078125"));
    }

    #[test]
    fn from_impl_converts() {
        let gb = Gigabytes::try_new(2).unwrap();
        let mb: Megabytes = gb.into();
        assert_eq!(mb.value(), &dec("2048"));
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Kilobytes::try_new("2.50").unwrap().to_string(), "2.50 KB");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_bytes_roundtrip_through_terabits(n in 0u64..u64::MAX) {
            let b = Bytes::try_new(n).unwrap();
            let back = b.to::<Terabit>().to::<Byte>();
            prop_assert_eq!(back.value(), &Decimal::from(n));
        }
    }
}
