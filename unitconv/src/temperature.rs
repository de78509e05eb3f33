//! Temperatures.
//!
//! Temperature scales are affine, so there is no single base unit to multiply through. A [`TemperatureConverter`]
//! keeps the degrees as given together with the [`TemperatureScale`] they were given in, and each `to_*` accessor
//! applies the formula for that pair:
//!
//! | from \ to  | Celsius                | Fahrenheit       | Kelvin                 |
//! |------------|------------------------|------------------|------------------------|
//! | Celsius    | `C`                    | `C × 9/5 + 32`   | `C + 273.15`           |
//! | Fahrenheit | `(F − 32) × 5/9`       | `F`              | via Celsius, 1 digit   |
//! | Kelvin     | `K − 273.15`, 1 digit  | via Celsius      | `K`                    |
//!
//! "1 digit" results are truncated toward zero to one fractional digit. Kelvin to Fahrenheit goes through the exact
//! Celsius value, so absolute zero is `-459.67 °F`.
//!
//! Negative degrees are accepted on every scale.
//!
//! ```rust
//! use unitconv::temperature::TemperatureConverter;
//!
//! let freezing = TemperatureConverter::from_fahrenheit(32).unwrap();
//! assert!(freezing.to_celsius().is_zero());
//! assert_eq!(freezing.to_string(), "32.00 °F");
//! ```

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::format::RenderSettings;
use crate::{ConversionResult, Decimal, IntoDecimal, MathContext, RoundingMode, UnitRatio};

/// Fahrenheit degrees per Celsius degree.
const NINE_FIFTHS: UnitRatio = UnitRatio::new(9, 5);
const FIVE_NINTHS: UnitRatio = UnitRatio::new(5, 9);

/// Scale a temperature was expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureScale {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl TemperatureScale {
    /// `"°C"`, `"°F"` or `"K"`.
    pub const fn symbol(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn absolute_zero_offset() -> Decimal {
    Decimal::new(27315.into(), 2)
}

fn truncate_one_digit(value: &Decimal) -> Decimal {
    value.with_scale(1, RoundingMode::Down)
}

/// Degrees tagged with the scale they were given in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TemperatureConverter {
    degrees: Decimal,
    scale: TemperatureScale,
}

impl TemperatureConverter {
    fn on_scale(value: impl IntoDecimal, scale: TemperatureScale) -> ConversionResult<Self> {
        Ok(Self {
            degrees: value.into_decimal()?,
            scale,
        })
    }

    /// Degrees Celsius.
    pub fn from_celsius(value: impl IntoDecimal) -> ConversionResult<Self> {
        Self::on_scale(value, TemperatureScale::Celsius)
    }

    /// Degrees Fahrenheit.
    pub fn from_fahrenheit(value: impl IntoDecimal) -> ConversionResult<Self> {
        Self::on_scale(value, TemperatureScale::Fahrenheit)
    }

    /// Kelvin.
    pub fn from_kelvin(value: impl IntoDecimal) -> ConversionResult<Self> {
        Self::on_scale(value, TemperatureScale::Kelvin)
    }

    /// The scale the degrees were given in.
    pub fn scale(&self) -> TemperatureScale {
        self.scale
    }

    /// The degrees as given.
    pub fn degrees(&self) -> &Decimal {
        &self.degrees
    }

    /// The temperature on `target`, dividing at `ctx` where a formula requires it.
    pub fn convert_to(&self, target: TemperatureScale, ctx: &MathContext) -> Decimal {
        use TemperatureScale::*;

        match (self.scale, target) {
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => self.degrees.clone(),
            (Celsius, Fahrenheit) => celsius_to_fahrenheit(&self.degrees, ctx),
            (Celsius, Kelvin) => &self.degrees + &absolute_zero_offset(),
            (Fahrenheit, Celsius) => fahrenheit_to_celsius(&self.degrees, ctx),
            (Fahrenheit, Kelvin) => {
                let celsius = fahrenheit_to_celsius(&self.degrees, ctx);
                truncate_one_digit(&(&celsius + &absolute_zero_offset()))
            }
            (Kelvin, Celsius) => truncate_one_digit(&kelvin_to_celsius(&self.degrees)),
            (Kelvin, Fahrenheit) => celsius_to_fahrenheit(&kelvin_to_celsius(&self.degrees), ctx),
        }
    }

    /// Degrees Celsius.
    pub fn to_celsius(&self) -> Decimal {
        self.convert_to(TemperatureScale::Celsius, &MathContext::DEFAULT)
    }

    /// Degrees Fahrenheit.
    pub fn to_fahrenheit(&self) -> Decimal {
        self.convert_to(TemperatureScale::Fahrenheit, &MathContext::DEFAULT)
    }

    /// Kelvin.
    pub fn to_kelvin(&self) -> Decimal {
        self.convert_to(TemperatureScale::Kelvin, &MathContext::DEFAULT)
    }

    /// `"<degrees> <symbol>"` on the scale the temperature was given in.
    pub fn render(&self) -> String {
        self.render_with(&RenderSettings::default())
    }

    /// [`TemperatureConverter::render`] with explicit settings.
    pub fn render_with(&self, settings: &RenderSettings) -> String {
        format!("{:.*} {}", settings.precision as usize, self.degrees, self.scale.symbol())
    }
}

fn celsius_to_fahrenheit(celsius: &Decimal, ctx: &MathContext) -> Decimal {
    let scaled = NINE_FIFTHS.convert(celsius, &UnitRatio::ONE, ctx);
    &scaled + &Decimal::from(32)
}

fn fahrenheit_to_celsius(fahrenheit: &Decimal, ctx: &MathContext) -> Decimal {
    let shifted = fahrenheit - &Decimal::from(32);
    FIVE_NINTHS.convert(&shifted, &UnitRatio::ONE, ctx)
}

fn kelvin_to_celsius(kelvin: &Decimal) -> Decimal {
    kelvin - &absolute_zero_offset()
}

impl fmt::Display for TemperatureConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
