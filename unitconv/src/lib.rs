//! Exact unit converters.
//!
//! `unitconv` is the user-facing crate in this workspace. It hosts one converter per domain and re-exports the exact
//! arithmetic they are built on from `unitconv-core`.
//!
//! | Module          | Converter                                   | Stored as          |
//! |-----------------|---------------------------------------------|--------------------|
//! | [`bytes`]       | [`ByteConverter`]                           | bytes              |
//! | [`distance`]    | [`MetricDistance`], [`ImperialDistance`]    | micrometres, inches|
//! | [`mass`]        | [`MassConverter`]                           | milligrams         |
//! | [`time`]        | [`TimeConverter`]                           | microseconds       |
//! | [`speed`]       | [`MetricSpeed`], [`ImperialSpeed`]          | m/s, ft/s          |
//! | [`temperature`] | [`TemperatureConverter`]                    | degrees + scale    |
//!
//! Every converter is an immutable value (the byte converter's `add_*` methods being the one exception). Factories
//! take anything implementing [`IntoDecimal`] (integers, floats, decimal strings, [`Decimal`]) and reject negative
//! magnitudes, except for temperatures. Accessors return a [`Decimal`]; conversions that need a division round to
//! [`MathContext::DEFAULT`] (100 fractional digits, half-up).
//!
//! # Quick start
//!
//! ```rust
//! use unitconv::{ByteConverter, DistanceUnits, ImperialDistance, TemperatureConverter};
//!
//! let mut upload = ByteConverter::from_megabytes("1.5").unwrap();
//! upload.add_kilobytes(512).unwrap();
//! assert_eq!(upload.to_string(), "2.00 MB");
//!
//! let marathon = ImperialDistance::from_miles("26.2").unwrap();
//! assert_eq!(marathon.to_kilometers(), "42.1648128".parse().unwrap());
//!
//! let body = TemperatureConverter::from_celsius(37).unwrap();
//! assert_eq!(body.to_fahrenheit(), "98.6".parse().unwrap());
//! ```
//!
//! # Incorrect usage (type error)
//!
//! Typed quantities from different dimensions never mix:
//!
//! ```compile_fail
//! use unitconv::units::length::Meters;
//! use unitconv::units::time::Seconds;
//!
//! let d = Meters::try_new(1).unwrap();
//! let t = Seconds::try_new(1).unwrap();
//! let _ = d + t;
//! ```
//!
//! Units only known at runtime go through [`registry::convert`], which reports the mismatch instead.
//!
//! # Configuration
//!
//! [`ConverterConfig`] reads a [`MathContext`] and [`format::RenderSettings`] from TOML for callers that want a
//! different scale, rounding or display precision; pass them to the `to_in` and `render_with` variants.
//!
//! # Panics and errors
//!
//! Fallible operations return [`ConversionResult`]. Nothing in this crate logs an error; errors are returned to the
//! caller unchanged.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod bytes;
pub mod config;
pub mod distance;
pub mod mass;
pub mod speed;
pub mod temperature;
pub mod time;

pub use unitconv_core::{
    format, registry, serde_with_unit, validate, ConversionError, ConversionResult, Decimal, Dimension, IntoDecimal,
    MathContext, Quantity, RoundingMode, Unit, UnitRatio, DEFAULT_SCALE,
};

pub use num_bigint::BigInt;

/// Typed unit markers and quantity aliases, grouped by dimension.
pub mod units {
    pub use unitconv_core::units::*;
}

pub use bytes::ByteConverter;
pub use config::ConverterConfig;
pub use distance::{DistanceConverter, DistanceUnits, ImperialDistance, MetricDistance};
pub use mass::MassConverter;
pub use speed::{ImperialSpeed, MetricSpeed, SpeedConverter, SpeedUnits, TimeIncrement};
pub use temperature::{TemperatureConverter, TemperatureScale};
pub use time::TimeConverter;
