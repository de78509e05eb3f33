//! Exact core for unit conversion.
//!
//! `unitconv-core` provides the pieces every converter in `unitconv` is built from:
//!
//! - [`Decimal`]: an arbitrary-precision decimal with exact `+ - *` and context-driven division ([`MathContext`]).
//! - A *unit* is a zero-sized marker type implementing [`Unit`], carrying an exact [`UnitRatio`] to the canonical
//!   unit of its [`Dimension`].
//! - A value tagged with a unit is a [`Quantity<U>`]; conversion is an explicit, type-checked rescaling via
//!   [`Quantity::to`].
//! - [`format::auto_scale`] renders a quantity in the largest unit of a ladder that it reaches.
//! - [`registry`] exposes the same tables by runtime identifier.
//!
//! Most users should depend on `unitconv` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Exact conversions: ratios are integer rationals, so multiply-only conversions never lose digits, and every
//!   division goes through one explicit scale and rounding rule (100 digits, half-up by default).
//! - Compile-time separation of dimensions (storage vs length vs time, …).
//! - Zero runtime overhead for unit tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Parsing units from free text.
//! - Dimensional analysis across quantities: velocity is its own dimension, not `length / time`.
//! - Affine scales (temperature); see the `unitconv` facade.
//!
//! # Quick start
//!
//! ```rust
//! use unitconv_core::length::{Feet, Meter};
//!
//! let ft = Feet::try_new(1000).unwrap();
//! let m = ft.to::<Meter>();
//! assert_eq!(m.value().normalize().to_string(), "304.8");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Decimal`] (as a decimal string), [`Quantity<U>`] (its value only),
//!   [`MathContext`], [`format::RenderSettings`] and [`registry::UnitId`], plus the [`serde_with_unit`] helper.
//!
//! # Panics and errors
//!
//! Fallible operations return [`ConversionResult`]. [`UnitRatio::new`] panics on a zero part; built-in ratios are
//! constants, so that can only happen at compile time.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod decimal;
mod dimension;
mod error;
mod macros;
mod quantity;
mod ratio;
mod unit;

pub mod format;
pub mod registry;
pub mod validate;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use decimal::{Decimal, IntoDecimal, MathContext, RoundingMode, DEFAULT_SCALE};
pub use dimension::Dimension;
pub use error::{ConversionError, ConversionResult};
pub use quantity::Quantity;
pub use ratio::UnitRatio;
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `unitconv-core` so they can implement formatting and conversion traits without running
/// into Rust's orphan rules.
pub mod units;

pub use units::length;
pub use units::mass;
pub use units::storage;
pub use units::time;
pub use units::velocity;
