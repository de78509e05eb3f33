//! Distances.
//!
//! Two variants share the [`DistanceUnits`] capability set:
//!
//! - [`MetricDistance`] stores micrometres and is built from metric or astronomical units.
//! - [`ImperialDistance`] stores inches and is built from inches, feet, yards or miles.
//!
//! Both answer every one of the twelve `to_*` accessors through their own base unit. [`DistanceConverter`] wraps
//! either variant when the caller does not care which one it holds.
//!
//! ```rust
//! use unitconv::distance::{DistanceUnits, ImperialDistance, MetricDistance};
//!
//! let run = MetricDistance::from_kilometers(5).unwrap();
//! assert_eq!(run.to_string(), "5.00 Kilometers");
//!
//! let mile = ImperialDistance::from_miles(1).unwrap();
//! assert_eq!(mile.to_meters(), "1609.344".parse().unwrap());
//! ```

use core::fmt;

use crate::format::{auto_scale, Fallback, RenderSettings, ScaleTier};
use crate::units::length::*;
use crate::{ConversionResult, Decimal, IntoDecimal, MathContext, Quantity, Unit};

/// Metric display ladder, largest first.
pub const METRIC_LADDER: &[ScaleTier<Length>] = &[
    ScaleTier::named::<Parsec>(),
    ScaleTier::named::<LightYear>(),
    ScaleTier::named::<AstronomicalUnit>(),
    ScaleTier::named::<Kilometer>(),
    ScaleTier::named::<Meter>(),
    ScaleTier::named::<Centimeter>(),
    ScaleTier::named::<Millimeter>(),
];

/// Imperial display ladder, largest first.
pub const IMPERIAL_LADDER: &[ScaleTier<Length>] = &[
    ScaleTier::named::<Parsec>(),
    ScaleTier::named::<LightYear>(),
    ScaleTier::named::<AstronomicalUnit>(),
    ScaleTier::named::<Mile>(),
    ScaleTier::named::<Yard>(),
    ScaleTier::named::<Foot>(),
];

/// Conversions every distance variant supports.
///
/// Implementors provide [`DistanceUnits::to_unit_in`]; the named accessors convert at [`MathContext::DEFAULT`].
pub trait DistanceUnits {
    /// The distance in unit `U`, dividing at `ctx` when the ratio requires it.
    fn to_unit_in<U: LengthUnit>(&self, ctx: &MathContext) -> Decimal;

    /// Renders in the largest unit of the variant's ladder.
    fn render_with(&self, settings: &RenderSettings) -> String;

    /// The distance in unit `U` at the default context.
    fn to_unit<U: LengthUnit>(&self) -> Decimal {
        self.to_unit_in::<U>(&MathContext::DEFAULT)
    }

    /// [`DistanceUnits::render_with`] at default settings.
    fn render(&self) -> String {
        self.render_with(&RenderSettings::default())
    }

    /// Micrometres.
    fn to_micrometers(&self) -> Decimal {
        self.to_unit::<Micrometer>()
    }

    /// Millimetres.
    fn to_millimeters(&self) -> Decimal {
        self.to_unit::<Millimeter>()
    }

    /// Centimetres.
    fn to_centimeters(&self) -> Decimal {
        self.to_unit::<Centimeter>()
    }

    /// Metres.
    fn to_meters(&self) -> Decimal {
        self.to_unit::<Meter>()
    }

    /// Kilometres.
    fn to_kilometers(&self) -> Decimal {
        self.to_unit::<Kilometer>()
    }

    /// Inches.
    fn to_inches(&self) -> Decimal {
        self.to_unit::<Inch>()
    }

    /// Feet.
    fn to_feet(&self) -> Decimal {
        self.to_unit::<Foot>()
    }

    /// Yards.
    fn to_yards(&self) -> Decimal {
        self.to_unit::<Yard>()
    }

    /// Miles.
    fn to_miles(&self) -> Decimal {
        self.to_unit::<Mile>()
    }

    /// Astronomical units.
    fn to_astronomical_units(&self) -> Decimal {
        self.to_unit::<AstronomicalUnit>()
    }

    /// Light-years.
    fn to_light_years(&self) -> Decimal {
        self.to_unit::<LightYear>()
    }

    /// Parsecs.
    fn to_parsecs(&self) -> Decimal {
        self.to_unit::<Parsec>()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metric
// ─────────────────────────────────────────────────────────────────────────────

/// A non-negative distance held in micrometres.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricDistance {
    micrometers: Micrometers,
}

impl MetricDistance {
    fn from_unit<U: LengthUnit>(value: impl IntoDecimal) -> ConversionResult<Self> {
        let quantity = Quantity::<U>::non_negative(value)?;
        Ok(Self {
            micrometers: quantity.to::<Micrometer>(),
        })
    }

    unit_factories! {
        from_micrometers => Micrometer,
        from_millimeters => Millimeter,
        from_centimeters => Centimeter,
        from_meters => Meter,
        from_kilometers => Kilometer,
        from_astronomical_units => AstronomicalUnit,
        from_light_years => LightYear,
        from_parsecs => Parsec,
    }

    /// The stored micrometre quantity.
    pub fn as_quantity(&self) -> &Micrometers {
        &self.micrometers
    }
}

impl DistanceUnits for MetricDistance {
    fn to_unit_in<U: LengthUnit>(&self, ctx: &MathContext) -> Decimal {
        self.micrometers.to_in::<U>(ctx).into_value()
    }

    fn render_with(&self, settings: &RenderSettings) -> String {
        auto_scale(&self.micrometers, METRIC_LADDER, Micrometer::NAME, Fallback::Decimal, settings)
    }
}

impl fmt::Display for MetricDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Imperial
// ─────────────────────────────────────────────────────────────────────────────

/// A non-negative distance held in inches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImperialDistance {
    inches: Inches,
}

impl ImperialDistance {
    fn from_unit<U: LengthUnit>(value: impl IntoDecimal) -> ConversionResult<Self> {
        let quantity = Quantity::<U>::non_negative(value)?;
        Ok(Self {
            inches: quantity.to::<Inch>(),
        })
    }

    unit_factories! {
        from_inches => Inch,
        from_feet => Foot,
        from_yards => Yard,
        from_miles => Mile,
    }

    /// The stored inch quantity.
    pub fn as_quantity(&self) -> &Inches {
        &self.inches
    }
}

impl DistanceUnits for ImperialDistance {
    fn to_unit_in<U: LengthUnit>(&self, ctx: &MathContext) -> Decimal {
        self.inches.to_in::<U>(ctx).into_value()
    }

    fn render_with(&self, settings: &RenderSettings) -> String {
        auto_scale(&self.inches, IMPERIAL_LADDER, Inch::NAME, Fallback::Decimal, settings)
    }
}

impl fmt::Display for ImperialDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Either variant
// ─────────────────────────────────────────────────────────────────────────────

/// A distance in whichever variant its factory selected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DistanceConverter {
    /// Micrometre-based.
    Metric(MetricDistance),
    /// Inch-based.
    Imperial(ImperialDistance),
}

impl DistanceConverter {
    /// Metric variant from micrometres.
    pub fn from_micrometers(value: impl IntoDecimal) -> ConversionResult<Self> {
        MetricDistance::from_micrometers(value).map(Self::Metric)
    }

    /// Metric variant from millimetres.
    pub fn from_millimeters(value: impl IntoDecimal) -> ConversionResult<Self> {
        MetricDistance::from_millimeters(value).map(Self::Metric)
    }

    /// Metric variant from centimetres.
    pub fn from_centimeters(value: impl IntoDecimal) -> ConversionResult<Self> {
        MetricDistance::from_centimeters(value).map(Self::Metric)
    }

    /// Metric variant from metres.
    pub fn from_meters(value: impl IntoDecimal) -> ConversionResult<Self> {
        MetricDistance::from_meters(value).map(Self::Metric)
    }

    /// Metric variant from kilometres.
    pub fn from_kilometers(value: impl IntoDecimal) -> ConversionResult<Self> {
        MetricDistance::from_kilometers(value).map(Self::Metric)
    }

    /// Metric variant from astronomical units.
    pub fn from_astronomical_units(value: impl IntoDecimal) -> ConversionResult<Self> {
        MetricDistance::from_astronomical_units(value).map(Self::Metric)
    }

    /// Metric variant from light-years.
    pub fn from_light_years(value: impl IntoDecimal) -> ConversionResult<Self> {
        MetricDistance::from_light_years(value).map(Self::Metric)
    }

    /// Metric variant from parsecs.
    pub fn from_parsecs(value: impl IntoDecimal) -> ConversionResult<Self> {
        MetricDistance::from_parsecs(value).map(Self::Metric)
    }

    /// Imperial variant from inches.
    pub fn from_inches(value: impl IntoDecimal) -> ConversionResult<Self> {
        ImperialDistance::from_inches(value).map(Self::Imperial)
    }

    /// Imperial variant from feet.
    pub fn from_feet(value: impl IntoDecimal) -> ConversionResult<Self> {
        ImperialDistance::from_feet(value).map(Self::Imperial)
    }

    /// Imperial variant from yards.
    pub fn from_yards(value: impl IntoDecimal) -> ConversionResult<Self> {
        ImperialDistance::from_yards(value).map(Self::Imperial)
    }

    /// Imperial variant from miles.
    pub fn from_miles(value: impl IntoDecimal) -> ConversionResult<Self> {
        ImperialDistance::from_miles(value).map(Self::Imperial)
    }

    /// True for the micrometre-based variant.
    pub fn is_metric(&self) -> bool {
        matches!(self, Self::Metric(_))
    }
}

impl DistanceUnits for DistanceConverter {
    fn to_unit_in<U: LengthUnit>(&self, ctx: &MathContext) -> Decimal {
        match self {
            Self::Metric(d) => d.to_unit_in::<U>(ctx),
            Self::Imperial(d) => d.to_unit_in::<U>(ctx),
        }
    }

    fn render_with(&self, settings: &RenderSettings) -> String {
        match self {
            Self::Metric(d) => d.render_with(settings),
            Self::Imperial(d) => d.render_with(settings),
        }
    }
}

impl From<MetricDistance> for DistanceConverter {
    fn from(value: MetricDistance) -> Self {
        Self::Metric(value)
    }
}

impl From<ImperialDistance> for DistanceConverter {
    fn from(value: ImperialDistance) -> Self {
        Self::Imperial(value)
    }
}

impl fmt::Display for DistanceConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::validate_ladder;
    use crate::ConversionError;
    use approx::assert_relative_eq;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Metric
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn metric_factories_store_micrometres() {
        assert_eq!(MetricDistance::from_millimeters(1).unwrap().to_micrometers(), dec("1000"));
        assert_eq!(MetricDistance::from_centimeters("2.5").unwrap().to_micrometers(), dec("25000"));
        assert_eq!(MetricDistance::from_kilometers(1).unwrap().to_meters(), dec("1000"));
        assert_eq!(
            MetricDistance::from_astronomical_units(1).unwrap().to_kilometers(),
            dec("149597871")
        );
    }

    #[test]
    fn metric_answers_imperial_accessors() {
        let d = MetricDistance::from_meters("0.9144").unwrap();
        assert_eq!(d.to_yards(), dec("1"));
        assert_eq!(d.to_feet(), dec("3"));
        assert_eq!(d.to_inches(), dec("36"));
    }

    #[test]
    fn astronomical_accessors() {
        let d = MetricDistance::from_parsecs(1).unwrap();
        assert_eq!(d.to_parsecs(), dec("1"));
        assert_relative_eq!(d.to_light_years().to_f64(), 3.2616, max_relative = 1e-4);
        assert_relative_eq!(d.to_astronomical_units().to_f64(), 206_264.8, max_relative = 1e-5);
    }

    #[test]
    fn metric_rejects_negative() {
        assert_eq!(
            MetricDistance::from_meters(-2).unwrap_err(),
            ConversionError::NegativeMagnitude { value: dec("-2") }
        );
    }

    #[test]
    fn metric_render() {
        assert_eq!(MetricDistance::from_micrometers(999).unwrap().render(), "999.00 Micrometers");
        assert_eq!(MetricDistance::from_millimeters(1).unwrap().render(), "1.00 Millimeters");
        assert_eq!(MetricDistance::from_centimeters(150).unwrap().render(), "1.50 Meters");
        assert_eq!(MetricDistance::from_meters(999).unwrap().render(), "999.00 Meters");
        assert_eq!(MetricDistance::from_astronomical_units(2).unwrap().render(), "2.00 Astronomical Units");
        assert_eq!(MetricDistance::from_light_years(1).unwrap().render(), "1.00 Light Years");
        assert_eq!(MetricDistance::from_parsecs(10).unwrap().render(), "10.00 Parsecs");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Imperial
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn imperial_factories_store_inches() {
        assert_eq!(ImperialDistance::from_feet(1).unwrap().to_inches(), dec("12"));
        assert_eq!(ImperialDistance::from_yards(1).unwrap().to_inches(), dec("36"));
        assert_eq!(ImperialDistance::from_miles(1).unwrap().to_inches(), dec("63360"));
        assert_eq!(ImperialDistance::from_miles(1).unwrap().to_feet(), dec("5280"));
    }

    #[test]
    fn imperial_answers_metric_accessors() {
        let d = ImperialDistance::from_inches(1).unwrap();
        assert_eq!(d.to_micrometers(), dec("25400"));
        assert_eq!(d.to_millimeters(), dec("25.4"));
        assert_eq!(d.to_centimeters(), dec("2.54"));
        assert_eq!(ImperialDistance::from_miles(1).unwrap().to_kilometers(), dec("1.609344"));
    }

    #[test]
    fn imperial_render() {
        assert_eq!(ImperialDistance::from_inches(11).unwrap().render(), "11.00 Inches");
        assert_eq!(ImperialDistance::from_inches(12).unwrap().render(), "1.00 Feet");
        assert_eq!(ImperialDistance::from_feet(4).unwrap().render(), "1.33 Yards");
        assert_eq!(ImperialDistance::from_yards(1760).unwrap().render(), "1.00 Miles");
        assert_eq!(ImperialDistance::from_miles(100_000_000).unwrap().render(), "1.08 Astronomical Units");
    }

    #[test]
    fn ladders_are_descending() {
        assert!(validate_ladder(METRIC_LADDER).is_ok());
        assert!(validate_ladder(IMPERIAL_LADDER).is_ok());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Either variant
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn enum_dispatch() {
        let metric = DistanceConverter::from_meters(1).unwrap();
        let imperial = DistanceConverter::from_feet(1).unwrap();
        assert!(metric.is_metric());
        assert!(!imperial.is_metric());
        assert_eq!(imperial.to_meters(), dec("0.3048"));
        assert_eq!(metric.to_string(), "1.00 Meters");
        assert_eq!(imperial.to_string(), "1.00 Feet");
    }

    #[test]
    fn variants_agree_on_the_same_length() {
        let metric = DistanceConverter::from(MetricDistance::from_kilometers("1.609344").unwrap());
        let imperial = DistanceConverter::from(ImperialDistance::from_miles(1).unwrap());
        assert_eq!(metric.to_miles(), imperial.to_miles());
        assert_eq!(metric.to_micrometers(), imperial.to_micrometers());
        assert_eq!(metric.to_parsecs(), imperial.to_parsecs());
    }

    #[test]
    fn to_unit_in_honours_context() {
        let d = MetricDistance::from_meters(1).unwrap();
        let ft = d.to_unit_in::<Foot>(&MathContext::new(4, crate::RoundingMode::HalfUp));
        assert_eq!(ft.to_string(), "3.2808");
    }
}
