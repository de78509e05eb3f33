//! Speeds.
//!
//! A speed is a distance per [`TimeIncrement`]. Factories normalise their input to a per-second magnitude and the
//! `to_*_per` accessors scale it back up to the requested increment. Round trips through any increment are exact
//! at the default scale.
//!
//! - [`MetricSpeed`] stores metres per second.
//! - [`ImperialSpeed`] stores feet per second.
//!
//! The two families meet through the `3.28084` feet-per-metre constant carried by
//! [`FootPerSecond`](crate::units::velocity::FootPerSecond).
//!
//! ```rust
//! use unitconv::speed::{MetricSpeed, SpeedUnits, TimeIncrement};
//!
//! let car = MetricSpeed::from_kilometers_per(36, TimeIncrement::Hour).unwrap();
//! assert_eq!(car.to_meters_per(TimeIncrement::Second), "10".parse().unwrap());
//! assert_eq!(car.to_string(), "10.00 m/s");
//! ```

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::format::{auto_scale, Fallback, RenderSettings};
use crate::units::time::{Day, Hour, Minute, Second, TimeUnit, Week, Year};
use crate::units::velocity::*;
use crate::{ConversionResult, Decimal, IntoDecimal, MathContext, Quantity, DEFAULT_SCALE};

/// Time axis of a speed: "per second", "per hour", …
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeIncrement {
    /// 1 s.
    Second,
    /// 60 s.
    Minute,
    /// 3600 s.
    Hour,
    /// 86 400 s.
    Day,
    /// 604 800 s.
    Week,
    /// 31 556 908.8 s.
    Year,
}

impl TimeIncrement {
    /// Every increment, shortest first.
    pub const ALL: [TimeIncrement; 6] = [
        TimeIncrement::Second,
        TimeIncrement::Minute,
        TimeIncrement::Hour,
        TimeIncrement::Day,
        TimeIncrement::Week,
        TimeIncrement::Year,
    ];

    /// Length of the increment in seconds, taken from the time table.
    pub fn seconds(self) -> Decimal {
        match self {
            TimeIncrement::Second => Decimal::one(),
            TimeIncrement::Minute => in_seconds::<Minute>(),
            TimeIncrement::Hour => in_seconds::<Hour>(),
            TimeIncrement::Day => in_seconds::<Day>(),
            TimeIncrement::Week => in_seconds::<Week>(),
            TimeIncrement::Year => in_seconds::<Year>(),
        }
    }

    /// Symbol of the matching time unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            TimeIncrement::Second => "s",
            TimeIncrement::Minute => "min",
            TimeIncrement::Hour => "h",
            TimeIncrement::Day => "d",
            TimeIncrement::Week => "wk",
            TimeIncrement::Year => "yr",
        }
    }

    /// `value` per increment, expressed per second.
    ///
    /// The quotient keeps [`GUARD_DIGITS`] beyond the default scale so that scaling back up by a year still rounds
    /// to the original value.
    fn per_second(self, value: Decimal) -> ConversionResult<Decimal> {
        match self {
            TimeIncrement::Second => Ok(value),
            _ => {
                let ctx = MathContext::new(DEFAULT_SCALE + GUARD_DIGITS, MathContext::DEFAULT.rounding);
                value.div(&self.seconds(), &ctx)
            }
        }
    }
}

impl fmt::Display for TimeIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Extra fractional digits kept on stored per-second magnitudes. A year is under 10^8 seconds.
const GUARD_DIGITS: u32 = 10;

fn in_seconds<U: TimeUnit>() -> Decimal {
    Quantity::<U>::new(Decimal::one()).to::<Second>().into_value().normalize()
}

/// Conversions every speed variant supports.
///
/// Each accessor multiplies the per-second magnitude by `increment.seconds()`, converts it to the target unit and
/// rounds the result to the context's scale.
pub trait SpeedUnits {
    /// The speed in unit `U` per `increment`, dividing at `ctx` when the ratio requires it.
    fn to_unit_per_in<U: VelocityUnit>(&self, increment: TimeIncrement, ctx: &MathContext) -> Decimal;

    /// Renders the per-second magnitude with the variant's base symbol.
    fn render_with(&self, settings: &RenderSettings) -> String;

    /// The speed in unit `U` per `increment` at the default context.
    fn to_unit_per<U: VelocityUnit>(&self, increment: TimeIncrement) -> Decimal {
        self.to_unit_per_in::<U>(increment, &MathContext::DEFAULT)
    }

    /// [`SpeedUnits::render_with`] at default settings.
    fn render(&self) -> String {
        self.render_with(&RenderSettings::default())
    }

    /// Metres per `increment`.
    fn to_meters_per(&self, increment: TimeIncrement) -> Decimal {
        self.to_unit_per::<MeterPerSecond>(increment)
    }

    /// Feet per `increment`.
    fn to_feet_per(&self, increment: TimeIncrement) -> Decimal {
        self.to_unit_per::<FootPerSecond>(increment)
    }

    /// Kilometres per `increment`.
    fn to_kilometers_per(&self, increment: TimeIncrement) -> Decimal {
        self.to_unit_per::<KilometerPerSecond>(increment)
    }

    /// Miles per `increment`.
    fn to_miles_per(&self, increment: TimeIncrement) -> Decimal {
        self.to_unit_per::<MilePerSecond>(increment)
    }

    /// Astronomical units per `increment`.
    fn to_astronomical_units_per(&self, increment: TimeIncrement) -> Decimal {
        self.to_unit_per::<AstronomicalUnitPerSecond>(increment)
    }

    /// Light-years per `increment`.
    fn to_light_years_per(&self, increment: TimeIncrement) -> Decimal {
        self.to_unit_per::<LightYearPerSecond>(increment)
    }

    /// Parsecs per `increment`.
    fn to_parsecs_per(&self, increment: TimeIncrement) -> Decimal {
        self.to_unit_per::<ParsecPerSecond>(increment)
    }
}

fn scaled<B: VelocityUnit, U: VelocityUnit>(
    base: &Quantity<B>,
    increment: TimeIncrement,
    ctx: &MathContext,
) -> Decimal {
    let per_increment = match increment {
        TimeIncrement::Second => base.value().clone(),
        _ => base.value() * &increment.seconds(),
    };
    let value = Quantity::<B>::new(per_increment).to_in::<U>(ctx).into_value();
    if value.scale() > ctx.scale {
        value.with_scale(ctx.scale, ctx.rounding)
    } else {
        value
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metric
// ─────────────────────────────────────────────────────────────────────────────

/// A non-negative speed held in metres per second.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricSpeed {
    meters_per_second: MetersPerSecond,
}

impl MetricSpeed {
    fn from_unit_per<U: VelocityUnit>(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        let quantity = Quantity::<U>::non_negative(value)?.to::<MeterPerSecond>();
        let per_second = increment.per_second(quantity.into_value())?;
        Ok(Self {
            meters_per_second: MetersPerSecond::new(per_second),
        })
    }

    /// Metres per `increment`.
    pub fn from_meters_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        Self::from_unit_per::<MeterPerSecond>(value, increment)
    }

    /// Kilometres per `increment`.
    pub fn from_kilometers_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        Self::from_unit_per::<KilometerPerSecond>(value, increment)
    }

    /// Astronomical units per `increment`.
    pub fn from_astronomical_units_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        Self::from_unit_per::<AstronomicalUnitPerSecond>(value, increment)
    }

    /// Light-years per `increment`.
    pub fn from_light_years_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        Self::from_unit_per::<LightYearPerSecond>(value, increment)
    }

    /// Parsecs per `increment`.
    pub fn from_parsecs_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        Self::from_unit_per::<ParsecPerSecond>(value, increment)
    }

    /// The stored per-second quantity.
    pub fn as_quantity(&self) -> &MetersPerSecond {
        &self.meters_per_second
    }
}

impl SpeedUnits for MetricSpeed {
    fn to_unit_per_in<U: VelocityUnit>(&self, increment: TimeIncrement, ctx: &MathContext) -> Decimal {
        scaled::<_, U>(&self.meters_per_second, increment, ctx)
    }

    fn render_with(&self, settings: &RenderSettings) -> String {
        auto_scale(&self.meters_per_second, &[], "m/s", Fallback::Decimal, settings)
    }
}

impl fmt::Display for MetricSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Imperial
// ─────────────────────────────────────────────────────────────────────────────

/// A non-negative speed held in feet per second.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImperialSpeed {
    feet_per_second: FeetPerSecond,
}

impl ImperialSpeed {
    fn from_unit_per<U: VelocityUnit>(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        let quantity = Quantity::<U>::non_negative(value)?.to::<FootPerSecond>();
        let per_second = increment.per_second(quantity.into_value())?;
        Ok(Self {
            feet_per_second: FeetPerSecond::new(per_second),
        })
    }

    /// Feet per `increment`.
    pub fn from_feet_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        Self::from_unit_per::<FootPerSecond>(value, increment)
    }

    /// Miles per `increment`.
    pub fn from_miles_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        Self::from_unit_per::<MilePerSecond>(value, increment)
    }

    /// The stored per-second quantity.
    pub fn as_quantity(&self) -> &FeetPerSecond {
        &self.feet_per_second
    }
}

impl SpeedUnits for ImperialSpeed {
    fn to_unit_per_in<U: VelocityUnit>(&self, increment: TimeIncrement, ctx: &MathContext) -> Decimal {
        scaled::<_, U>(&self.feet_per_second, increment, ctx)
    }

    fn render_with(&self, settings: &RenderSettings) -> String {
        auto_scale(&self.feet_per_second, &[], "ft/s", Fallback::Decimal, settings)
    }
}

impl fmt::Display for ImperialSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Either variant
// ─────────────────────────────────────────────────────────────────────────────

/// A speed in whichever variant its factory selected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpeedConverter {
    /// Metres-per-second based.
    Metric(MetricSpeed),
    /// Feet-per-second based.
    Imperial(ImperialSpeed),
}

impl SpeedConverter {
    /// Metric variant from metres per `increment`.
    pub fn from_meters_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        MetricSpeed::from_meters_per(value, increment).map(Self::Metric)
    }

    /// Metric variant from kilometres per `increment`.
    pub fn from_kilometers_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        MetricSpeed::from_kilometers_per(value, increment).map(Self::Metric)
    }

    /// Metric variant from astronomical units per `increment`.
    pub fn from_astronomical_units_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        MetricSpeed::from_astronomical_units_per(value, increment).map(Self::Metric)
    }

    /// Metric variant from light-years per `increment`.
    pub fn from_light_years_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        MetricSpeed::from_light_years_per(value, increment).map(Self::Metric)
    }

    /// Metric variant from parsecs per `increment`.
    pub fn from_parsecs_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        MetricSpeed::from_parsecs_per(value, increment).map(Self::Metric)
    }

    /// Imperial variant from feet per `increment`.
    pub fn from_feet_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        ImperialSpeed::from_feet_per(value, increment).map(Self::Imperial)
    }

    /// Imperial variant from miles per `increment`.
    pub fn from_miles_per(value: impl IntoDecimal, increment: TimeIncrement) -> ConversionResult<Self> {
        ImperialSpeed::from_miles_per(value, increment).map(Self::Imperial)
    }

    /// True for the metre-based variant.
    pub fn is_metric(&self) -> bool {
        matches!(self, Self::Metric(_))
    }
}

impl SpeedUnits for SpeedConverter {
    fn to_unit_per_in<U: VelocityUnit>(&self, increment: TimeIncrement, ctx: &MathContext) -> Decimal {
        match self {
            Self::Metric(s) => s.to_unit_per_in::<U>(increment, ctx),
            Self::Imperial(s) => s.to_unit_per_in::<U>(increment, ctx),
        }
    }

    fn render_with(&self, settings: &RenderSettings) -> String {
        match self {
            Self::Metric(s) => s.render_with(settings),
            Self::Imperial(s) => s.render_with(settings),
        }
    }
}

impl From<MetricSpeed> for SpeedConverter {
    fn from(value: MetricSpeed) -> Self {
        Self::Metric(value)
    }
}

impl From<ImperialSpeed> for SpeedConverter {
    fn from(value: ImperialSpeed) -> Self {
        Self::Imperial(value)
    }
}

impl fmt::Display for SpeedConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConversionError;
    use approx::assert_relative_eq;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // TimeIncrement
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn increment_seconds() {
        let expected = ["1", "60", "3600", "86400", "604800", "31556908.8"];
        for (inc, secs) in TimeIncrement::ALL.iter().zip(expected) {
            assert_eq!(inc.seconds(), dec(secs), "{inc}");
        }
    }

    #[test]
    fn increment_serde() {
        assert_eq!(serde_json::to_string(&TimeIncrement::Hour).unwrap(), "\"hour\"");
        let back: TimeIncrement = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(back, TimeIncrement::Year);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Metric
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn metric_normalises_to_per_second() {
        let s = MetricSpeed::from_kilometers_per(36, TimeIncrement::Hour).unwrap();
        assert_eq!(s.as_quantity().value(), &dec("10"));
        assert_eq!(s.to_kilometers_per(TimeIncrement::Hour), dec("36"));
        assert_eq!(s.to_meters_per(TimeIncrement::Minute), dec("600"));
    }

    #[test]
    fn year_increment() {
        let s = MetricSpeed::from_meters_per("31556908.8", TimeIncrement::Year).unwrap();
        assert_eq!(s.to_meters_per(TimeIncrement::Second), dec("1"));
        assert_eq!(s.to_meters_per(TimeIncrement::Year), dec("31556908.8"));
    }

    #[test]
    fn metric_to_imperial() {
        let s = MetricSpeed::from_meters_per(1, TimeIncrement::Second).unwrap();
        assert_eq!(s.to_feet_per(TimeIncrement::Second), dec("3.28084"));
        assert_relative_eq!(
            s.to_miles_per(TimeIncrement::Hour).to_f64(),
            3.28084 * 3600.0 / 5280.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn astronomical_speeds() {
        let s = MetricSpeed::from_light_years_per(1, TimeIncrement::Second).unwrap();
        assert_eq!(s.to_meters_per(TimeIncrement::Second), dec("9460528400000000"));
        assert_eq!(s.to_light_years_per(TimeIncrement::Day), dec("86400"));
        let au = MetricSpeed::from_astronomical_units_per(1, TimeIncrement::Day).unwrap();
        assert_relative_eq!(au.to_kilometers_per(TimeIncrement::Second).to_f64(), 1731.4568, max_relative = 1e-6);
        let pc = MetricSpeed::from_parsecs_per(1, TimeIncrement::Year).unwrap();
        assert_eq!(pc.to_parsecs_per(TimeIncrement::Year), dec("1"));
    }

    #[test]
    fn yearly_round_trip_holds_at_default_scale() {
        let s = MetricSpeed::from_meters_per(1, TimeIncrement::Year).unwrap();
        let back = s.to_meters_per(TimeIncrement::Year);
        assert_eq!(back, dec("1"));
        assert!(back.scale() <= crate::DEFAULT_SCALE);

        let s = ImperialSpeed::from_miles_per(5, TimeIncrement::Year).unwrap();
        assert_eq!(s.to_miles_per(TimeIncrement::Year), dec("5"));
    }

    #[test]
    fn per_second_magnitude_keeps_guard_digits() {
        let s = MetricSpeed::from_meters_per(1, TimeIncrement::Year).unwrap();
        assert_eq!(s.as_quantity().value().scale(), DEFAULT_SCALE + GUARD_DIGITS);
        assert_eq!(s.to_meters_per(TimeIncrement::Second).scale(), DEFAULT_SCALE);
    }

    #[test]
    fn negative_speed_is_rejected() {
        assert_eq!(
            MetricSpeed::from_meters_per(-3, TimeIncrement::Hour).unwrap_err(),
            ConversionError::NegativeMagnitude { value: dec("-3") }
        );
        assert!(ImperialSpeed::from_miles_per("-0.1", TimeIncrement::Second).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Imperial
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn imperial_normalises_to_per_second() {
        let s = ImperialSpeed::from_miles_per(60, TimeIncrement::Hour).unwrap();
        assert_eq!(s.as_quantity().value(), &dec("88"));
        assert_eq!(s.to_feet_per(TimeIncrement::Minute), dec("5280"));
        assert_relative_eq!(s.to_miles_per(TimeIncrement::Hour).to_f64(), 60.0, max_relative = 1e-12);
    }

    #[test]
    fn imperial_to_metric() {
        let s = ImperialSpeed::from_feet_per("3.28084", TimeIncrement::Second).unwrap();
        assert_eq!(s.to_meters_per(TimeIncrement::Second), dec("1"));
        assert_eq!(s.to_kilometers_per(TimeIncrement::Hour), dec("3.6"));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rendering and dispatch
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn render() {
        let metric = SpeedConverter::from_kilometers_per(100, TimeIncrement::Hour).unwrap();
        assert_eq!(metric.to_string(), "27.78 m/s");
        let imperial = SpeedConverter::from_miles_per(60, TimeIncrement::Hour).unwrap();
        assert_eq!(imperial.render(), "88.00 ft/s");
        assert_eq!(imperial.render_with(&RenderSettings::new(0)), "88 ft/s");
    }

    #[test]
    fn variants_agree() {
        let metric = SpeedConverter::from_meters_per(1, TimeIncrement::Second).unwrap();
        let imperial = SpeedConverter::from_feet_per("3.28084", TimeIncrement::Second).unwrap();
        assert!(metric.is_metric() && !imperial.is_metric());
        for inc in TimeIncrement::ALL {
            assert_eq!(metric.to_meters_per(inc), imperial.to_meters_per(inc));
            assert_eq!(metric.to_feet_per(inc), imperial.to_feet_per(inc));
            assert_eq!(metric.to_parsecs_per(inc), imperial.to_parsecs_per(inc));
        }
    }
}
