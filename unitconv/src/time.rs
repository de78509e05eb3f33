//! Durations.
//!
//! [`TimeConverter`] stores microseconds. A year is 365.242 days, see [`crate::units::time::Year`].
//!
//! ```rust
//! use unitconv::time::TimeConverter;
//!
//! let sprint = TimeConverter::from_weeks(1).unwrap();
//! assert_eq!(sprint.to_minutes(), "10080".parse().unwrap());
//! assert_eq!(sprint.to_string(), "1.00 wk");
//! ```

use core::fmt;
use num_bigint::BigInt;

use crate::format::{auto_scale, Fallback, RenderSettings, ScaleTier};
use crate::units::time::*;
use crate::{ConversionResult, IntoDecimal, MathContext, Quantity};

/// Display ladder, largest first.
pub const LADDER: &[ScaleTier<Time>] = &[
    ScaleTier::of::<Year>("yr"),
    ScaleTier::of::<Week>("wk"),
    ScaleTier::of::<Day>("d"),
    ScaleTier::of::<Hour>("h"),
    ScaleTier::of::<Minute>("min"),
    ScaleTier::of::<Second>("s"),
    ScaleTier::of::<Millisecond>("ms"),
];

/// A non-negative duration held in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeConverter {
    microseconds: Microseconds,
}

impl TimeConverter {
    fn from_unit<U: TimeUnit>(value: impl IntoDecimal) -> ConversionResult<Self> {
        let quantity = Quantity::<U>::non_negative(value)?;
        Ok(Self {
            microseconds: quantity.to::<Microsecond>(),
        })
    }

    unit_factories! {
        from_microseconds => Microsecond,
        from_milliseconds => Millisecond,
        from_seconds => Second,
        from_minutes => Minute,
        from_hours => Hour,
        from_days => Day,
        from_weeks => Week,
        from_years => Year,
    }

    /// Whole microseconds, truncating any fraction.
    pub fn to_microseconds(&self) -> BigInt {
        self.microseconds.value().trunc_to_bigint()
    }

    unit_accessors! {
        to_milliseconds => Millisecond,
        to_seconds => Second,
        to_minutes => Minute,
        to_hours => Hour,
        to_days => Day,
        to_weeks => Week,
        to_years => Year,
    }

    /// The duration in any time unit at [`MathContext::DEFAULT`].
    pub fn to<U: TimeUnit>(&self) -> Quantity<U> {
        self.microseconds.to::<U>()
    }

    /// The duration in any time unit at an explicit context.
    pub fn to_in<U: TimeUnit>(&self, ctx: &MathContext) -> Quantity<U> {
        self.microseconds.to_in::<U>(ctx)
    }

    /// The stored microsecond quantity.
    pub fn as_quantity(&self) -> &Microseconds {
        &self.microseconds
    }

    /// Renders in the largest unit reached, or whole microseconds below one millisecond.
    pub fn render(&self) -> String {
        self.render_with(&RenderSettings::default())
    }

    /// [`TimeConverter::render`] with explicit settings.
    pub fn render_with(&self, settings: &RenderSettings) -> String {
        auto_scale(&self.microseconds, LADDER, "µs", Fallback::Integer, settings)
    }
}

impl fmt::Display for TimeConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
