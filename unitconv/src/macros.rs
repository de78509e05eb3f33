//! Macros shared by the converter families.

/// Generates `from_<unit>` factories that delegate to `Self::from_unit::<U>`.
macro_rules! unit_factories {
    ($($name:ident => $unit:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Creates a converter from a value in [`", stringify!($unit), "`]s.")]
            ///
            /// Fails with [`ConversionError::NegativeMagnitude`](crate::ConversionError::NegativeMagnitude) below zero.
            pub fn $name(value: impl $crate::IntoDecimal) -> $crate::ConversionResult<Self> {
                Self::from_unit::<$unit>(value)
            }
        )+
    };
}

/// Generates `to_<unit>` accessors returning the stored magnitude in unit `U` at the default context.
macro_rules! unit_accessors {
    ($($name:ident => $unit:ty),+ $(,)?) => {
        $(
            #[doc = concat!("The magnitude in [`", stringify!($unit), "`]s.")]
            pub fn $name(&self) -> $crate::Decimal {
                self.to::<$unit>().into_value()
            }
        )+
    };
}
