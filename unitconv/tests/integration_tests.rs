//! Integration-level tests for the `unitconv` facade crate.

use unitconv::registry::{self, UnitId};
use unitconv::*;

use approx::assert_relative_eq;
use proptest::prelude::*;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round trips
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bytes_round_trip() {
    assert_eq!(ByteConverter::from_bytes(1_264_978).unwrap().to_bytes(), BigInt::from(1_264_978));
    assert_eq!(ByteConverter::from_kilobytes(7).unwrap().to_kilobytes(), dec("7"));
    assert_eq!(ByteConverter::from_megabytes(7).unwrap().to_megabytes(), dec("7"));
    assert_eq!(ByteConverter::from_gigabytes(7).unwrap().to_gigabytes(), dec("7"));
    assert_eq!(ByteConverter::from_terabytes(7).unwrap().to_terabytes(), dec("7"));
    assert_eq!(ByteConverter::from_kilobits(7).unwrap().to_kilobits(), dec("7"));
    assert_eq!(ByteConverter::from_megabits(7).unwrap().to_megabits(), dec("7"));
    assert_eq!(ByteConverter::from_gigabits(7).unwrap().to_gigabits(), dec("7"));
    assert_eq!(ByteConverter::from_terabits(7).unwrap().to_terabits(), dec("7"));
}

#[test]
fn distance_round_trip() {
    let x = dec("42");
    assert_eq!(MetricDistance::from_micrometers(&x).unwrap().to_micrometers(), x);
    assert_eq!(MetricDistance::from_millimeters(&x).unwrap().to_millimeters(), x);
    assert_eq!(MetricDistance::from_centimeters(&x).unwrap().to_centimeters(), x);
    assert_eq!(MetricDistance::from_meters(&x).unwrap().to_meters(), x);
    assert_eq!(MetricDistance::from_kilometers(&x).unwrap().to_kilometers(), x);
    assert_eq!(MetricDistance::from_astronomical_units(&x).unwrap().to_astronomical_units(), x);
    assert_eq!(MetricDistance::from_light_years(&x).unwrap().to_light_years(), x);
    assert_eq!(MetricDistance::from_parsecs(&x).unwrap().to_parsecs(), x);
    assert_eq!(ImperialDistance::from_inches(&x).unwrap().to_inches(), x);
    assert_eq!(ImperialDistance::from_feet(&x).unwrap().to_feet(), x);
    assert_eq!(ImperialDistance::from_yards(&x).unwrap().to_yards(), x);
    assert_eq!(ImperialDistance::from_miles(&x).unwrap().to_miles(), x);
}

#[test]
fn mass_and_time_round_trip() {
    assert_eq!(MassConverter::from_milligrams(9).unwrap().to_milligrams(), dec("9"));
    assert_eq!(MassConverter::from_milligrams("12.9").unwrap().to_milligrams(), dec("12.9"));
    assert_eq!(MassConverter::from_grams(9).unwrap().to_grams(), dec("9"));
    assert_eq!(MassConverter::from_kilograms(9).unwrap().to_kilograms(), dec("9"));
    assert_eq!(MassConverter::from_tonnes(9).unwrap().to_tonnes(), dec("9"));

    assert_eq!(TimeConverter::from_microseconds(9).unwrap().to_microseconds(), BigInt::from(9));
    assert_eq!(TimeConverter::from_milliseconds(9).unwrap().to_milliseconds(), dec("9"));
    assert_eq!(TimeConverter::from_seconds(9).unwrap().to_seconds(), dec("9"));
    assert_eq!(TimeConverter::from_minutes(9).unwrap().to_minutes(), dec("9"));
    assert_eq!(TimeConverter::from_hours(9).unwrap().to_hours(), dec("9"));
    assert_eq!(TimeConverter::from_days(9).unwrap().to_days(), dec("9"));
    assert_eq!(TimeConverter::from_weeks(9).unwrap().to_weeks(), dec("9"));
    assert_eq!(TimeConverter::from_years(9).unwrap().to_years(), dec("9"));
}

#[test]
fn speed_round_trip() {
    let per_second = TimeIncrement::Second;
    assert_eq!(MetricSpeed::from_meters_per(5, per_second).unwrap().to_meters_per(per_second), dec("5"));
    assert_eq!(ImperialSpeed::from_miles_per(5, per_second).unwrap().to_miles_per(per_second), dec("5"));

    for inc in TimeIncrement::ALL {
        let metric = MetricSpeed::from_kilometers_per(5, inc).unwrap();
        let imperial = ImperialSpeed::from_feet_per(5, inc).unwrap();
        assert_eq!(metric.to_kilometers_per(inc), dec("5"), "{inc}");
        assert_eq!(imperial.to_feet_per(inc), dec("5"), "{inc}");
        assert_eq!(MetricSpeed::from_meters_per(1, inc).unwrap().to_meters_per(inc), dec("1"), "{inc}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Exact cross-unit arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bytes_plus_kilobyte() {
    let mut c = ByteConverter::from_bytes(1000).unwrap();
    c.add_kilobytes(1).unwrap();
    assert_eq!(c.to_bytes(), BigInt::from(2024));
}

#[test]
fn week_is_10080_minutes() {
    assert_eq!(TimeConverter::from_weeks(1).unwrap().to_minutes(), dec("10080"));
}

#[test]
fn temperature_fixed_points() {
    assert_eq!(TemperatureConverter::from_fahrenheit(32.0).unwrap().to_celsius(), dec("0"));
    assert_eq!(TemperatureConverter::from_celsius(0).unwrap().to_fahrenheit(), dec("32"));
    assert_eq!(TemperatureConverter::from_kelvin(273.15).unwrap().to_celsius(), dec("0"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering thresholds
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn threshold_selects_larger_unit() {
    assert_eq!(ByteConverter::from_bytes(1024).unwrap().to_string(), "1.00 KB");
    assert_eq!(ByteConverter::from_bytes(1023).unwrap().to_string(), "1023 B");
    assert_eq!(MassConverter::from_grams(1000).unwrap().to_string(), "1.00 kg");
    assert_eq!(TimeConverter::from_seconds(60).unwrap().to_string(), "1.00 min");
    assert_eq!(ImperialDistance::from_feet(3).unwrap().to_string(), "1.00 Yards");
    assert_eq!(MetricDistance::from_millimeters(10).unwrap().to_string(), "1.00 Centimeters");
}

#[test]
fn render_precision_from_config() {
    let config = ConverterConfig::from_toml_str("[render]\nprecision = 4\n").unwrap();
    let c = ByteConverter::from_bytes(1_264_978).unwrap();
    assert_eq!(c.render_with(&config.render), "1.2064 MB");
    assert_eq!(c.render(), "1.21 MB");
}

// ─────────────────────────────────────────────────────────────────────────────
// Negative rejection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_non_temperature_domain_rejects_negatives() {
    let is_negative = |e: ConversionError| matches!(e, ConversionError::NegativeMagnitude { .. });

    assert!(is_negative(ByteConverter::from_bytes(-1).unwrap_err()));
    assert!(is_negative(MetricDistance::from_meters(-1).unwrap_err()));
    assert!(is_negative(ImperialDistance::from_miles(-1).unwrap_err()));
    assert!(is_negative(MassConverter::from_grams(-1).unwrap_err()));
    assert!(is_negative(TimeConverter::from_days(-1).unwrap_err()));
    assert!(is_negative(MetricSpeed::from_meters_per(-1, TimeIncrement::Second).unwrap_err()));
    assert!(is_negative(ImperialSpeed::from_feet_per(-1, TimeIncrement::Hour).unwrap_err()));

    assert!(TemperatureConverter::from_celsius(-1).is_ok());
}

#[test]
fn failed_add_keeps_state() {
    let mut c = ByteConverter::from_kilobytes(1).unwrap();
    assert!(c.add_kilobytes(-2).is_err());
    assert_eq!(c.to_bytes(), BigInt::from(1024));
}

// ─────────────────────────────────────────────────────────────────────────────
// Metric / imperial symmetry
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn distance_variants_agree() {
    let metric = DistanceConverter::from_meters("1609.344").unwrap();
    let imperial = DistanceConverter::from_miles(1).unwrap();

    assert_eq!(metric.to_micrometers(), imperial.to_micrometers());
    assert_eq!(metric.to_millimeters(), imperial.to_millimeters());
    assert_eq!(metric.to_centimeters(), imperial.to_centimeters());
    assert_eq!(metric.to_meters(), imperial.to_meters());
    assert_eq!(metric.to_kilometers(), imperial.to_kilometers());
    assert_eq!(metric.to_inches(), imperial.to_inches());
    assert_eq!(metric.to_feet(), imperial.to_feet());
    assert_eq!(metric.to_yards(), imperial.to_yards());
    assert_eq!(metric.to_miles(), imperial.to_miles());
    assert_eq!(metric.to_astronomical_units(), imperial.to_astronomical_units());
    assert_eq!(metric.to_light_years(), imperial.to_light_years());
    assert_eq!(metric.to_parsecs(), imperial.to_parsecs());
}

#[test]
fn speed_variants_agree() {
    let metric = SpeedConverter::from_kilometers_per("1.609344", TimeIncrement::Hour).unwrap();
    let imperial = SpeedConverter::from_miles_per(1, TimeIncrement::Hour).unwrap();

    for inc in TimeIncrement::ALL {
        let pairs = [
            (metric.to_meters_per(inc), imperial.to_meters_per(inc)),
            (metric.to_feet_per(inc), imperial.to_feet_per(inc)),
            (metric.to_kilometers_per(inc), imperial.to_kilometers_per(inc)),
            (metric.to_miles_per(inc), imperial.to_miles_per(inc)),
            (metric.to_astronomical_units_per(inc), imperial.to_astronomical_units_per(inc)),
            (metric.to_light_years_per(inc), imperial.to_light_years_per(inc)),
            (metric.to_parsecs_per(inc), imperial.to_parsecs_per(inc)),
        ];
        for (m, i) in pairs {
            assert_relative_eq!(m.to_f64(), i.to_f64(), max_relative = 1e-5);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime registry
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn registry_agrees_with_converters() {
    let kb = registry::convert(&dec("2048"), UnitId::Byte, UnitId::Kilobyte, &MathContext::DEFAULT).unwrap();
    assert_eq!(kb, ByteConverter::from_bytes(2048).unwrap().to_kilobytes());

    let err = registry::convert(&dec("1"), UnitId::Hour, UnitId::Gram, &MathContext::DEFAULT).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert h to g: different dimensions");
}

#[test]
fn config_context_drives_to_in() {
    let config = ConverterConfig::from_toml_str("[math]\nscale = 3\nrounding = \"down\"\n").unwrap();
    let c = ByteConverter::from_bytes(1000).unwrap();
    let kb = c.to_in::<units::storage::Kilobyte>(&config.math);
    assert_eq!(kb.value().to_string(), "0.976");
}

// ─────────────────────────────────────────────────────────────────────────────
// Monotonicity
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_bytes_monotonic(a in 0u64..1u64 << 50, b in 0u64..1u64 << 50) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = ByteConverter::from_bytes(lo).unwrap();
        let hi = ByteConverter::from_bytes(hi).unwrap();
        prop_assert!(lo.to_megabytes() <= hi.to_megabytes());
        prop_assert!(lo.to_terabits() <= hi.to_terabits());
    }

    #[test]
    fn prop_distance_monotonic(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = ImperialDistance::from_feet(lo).unwrap();
        let hi = ImperialDistance::from_feet(hi).unwrap();
        prop_assert!(lo.to_meters() <= hi.to_meters());
        prop_assert!(lo.to_light_years() <= hi.to_light_years());
    }

    #[test]
    fn prop_time_monotonic(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = TimeConverter::from_seconds(lo).unwrap();
        let hi = TimeConverter::from_seconds(hi).unwrap();
        prop_assert!(lo.to_years() <= hi.to_years());
    }

    #[test]
    fn prop_speed_monotonic(a in 0u32..100_000, b in 0u32..100_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = MetricSpeed::from_kilometers_per(lo, TimeIncrement::Hour).unwrap();
        let hi = MetricSpeed::from_kilometers_per(hi, TimeIncrement::Hour).unwrap();
        prop_assert!(lo.to_miles_per(TimeIncrement::Hour) <= hi.to_miles_per(TimeIncrement::Hour));
    }
}
