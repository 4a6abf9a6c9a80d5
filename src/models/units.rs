//! Unit enums and conversions for display settings.
//!
//! Conversions are split into a compute half (numeric value in the target
//! unit) and a format half (display string). Chart consumers use the numeric
//! half; UI labels use the formatted one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kilometers per nautical mile.
pub const NM_TO_KM: f64 = 1.852;
/// Statute miles per nautical mile.
pub const NM_TO_MI: f64 = 1.150_779_448;
/// Meters per second per knot.
pub const KN_TO_MS: f64 = 0.514_444_444;
/// Inches of mercury per hectopascal.
pub const HPA_TO_INHG: f64 = 0.029_529_983;
/// Millimeters of mercury per hectopascal.
pub const HPA_TO_MMHG: f64 = 0.750_061_683;

/// Distance display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[serde(rename = "nm")]
    NauticalMiles,
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

/// Speed display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    #[serde(rename = "kn")]
    Knots,
    #[serde(rename = "kmh")]
    KilometersPerHour,
    #[serde(rename = "mph")]
    MilesPerHour,
    #[serde(rename = "ms")]
    MetersPerSecond,
}

/// Temperature display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[serde(rename = "c")]
    Celsius,
    #[serde(rename = "f")]
    Fahrenheit,
}

/// Barometric pressure display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    #[serde(rename = "hpa")]
    Hectopascals,
    #[serde(rename = "inhg")]
    InchesOfMercury,
    #[serde(rename = "mmhg")]
    MillimetersOfMercury,
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nm" => Ok(Self::NauticalMiles),
            "km" => Ok(Self::Kilometers),
            "mi" => Ok(Self::Miles),
            _ => Err(format!("Unknown distance unit: {}", s)),
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kn" | "kt" | "kts" => Ok(Self::Knots),
            "kmh" | "km/h" => Ok(Self::KilometersPerHour),
            "mph" => Ok(Self::MilesPerHour),
            "ms" | "m/s" => Ok(Self::MetersPerSecond),
            _ => Err(format!("Unknown speed unit: {}", s)),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            _ => Err(format!("Unknown temperature unit: {}", s)),
        }
    }
}

impl FromStr for PressureUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hpa" | "mbar" => Ok(Self::Hectopascals),
            "inhg" => Ok(Self::InchesOfMercury),
            "mmhg" => Ok(Self::MillimetersOfMercury),
            _ => Err(format!("Unknown pressure unit: {}", s)),
        }
    }
}

impl DistanceUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NauticalMiles => "nm",
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }
}

impl SpeedUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Knots => "kn",
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
            Self::MetersPerSecond => "m/s",
        }
    }
}

impl TemperatureUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl PressureUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hectopascals => "hPa",
            Self::InchesOfMercury => "inHg",
            Self::MillimetersOfMercury => "mmHg",
        }
    }
}

/// Convert a distance between display units.
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    let nm = match from {
        DistanceUnit::NauticalMiles => value,
        DistanceUnit::Kilometers => value / NM_TO_KM,
        DistanceUnit::Miles => value / NM_TO_MI,
    };
    match to {
        DistanceUnit::NauticalMiles => nm,
        DistanceUnit::Kilometers => nm * NM_TO_KM,
        DistanceUnit::Miles => nm * NM_TO_MI,
    }
}

/// Convert a speed between display units.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    let knots = match from {
        SpeedUnit::Knots => value,
        SpeedUnit::KilometersPerHour => value / NM_TO_KM,
        SpeedUnit::MilesPerHour => value / NM_TO_MI,
        SpeedUnit::MetersPerSecond => value / KN_TO_MS,
    };
    match to {
        SpeedUnit::Knots => knots,
        SpeedUnit::KilometersPerHour => knots * NM_TO_KM,
        SpeedUnit::MilesPerHour => knots * NM_TO_MI,
        SpeedUnit::MetersPerSecond => knots * KN_TO_MS,
    }
}

/// Convert a temperature between display units.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let celsius = match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    };
    match to {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Convert a barometric pressure between display units.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let hpa = match from {
        PressureUnit::Hectopascals => value,
        PressureUnit::InchesOfMercury => value / HPA_TO_INHG,
        PressureUnit::MillimetersOfMercury => value / HPA_TO_MMHG,
    };
    match to {
        PressureUnit::Hectopascals => hpa,
        PressureUnit::InchesOfMercury => hpa * HPA_TO_INHG,
        PressureUnit::MillimetersOfMercury => hpa * HPA_TO_MMHG,
    }
}

/// Render a distance for UI labels, e.g. `"12.4 nm"`.
pub fn format_distance(value: f64, unit: DistanceUnit) -> String {
    format!("{:.1} {}", value, unit.label())
}

/// Render a speed for UI labels, e.g. `"6.3 kn"`.
pub fn format_speed(value: f64, unit: SpeedUnit) -> String {
    format!("{:.1} {}", value, unit.label())
}

/// Render a temperature for UI labels, e.g. `"18.5 °C"`.
pub fn format_temperature(value: f64, unit: TemperatureUnit) -> String {
    format!("{:.1} {}", value, unit.label())
}

/// Render a pressure for UI labels. Inches of mercury get two decimals, the
/// other units one.
pub fn format_pressure(value: f64, unit: PressureUnit) -> String {
    match unit {
        PressureUnit::InchesOfMercury => format!("{:.2} {}", value, unit.label()),
        _ => format!("{:.1} {}", value, unit.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_nm_to_km() {
        let km = convert_distance(10.0, DistanceUnit::NauticalMiles, DistanceUnit::Kilometers);
        assert!((km - 18.52).abs() < 1e-9);
    }

    #[test]
    fn test_distance_identity() {
        let nm = convert_distance(7.5, DistanceUnit::NauticalMiles, DistanceUnit::NauticalMiles);
        assert_eq!(nm, 7.5);
    }

    #[test]
    fn test_distance_roundtrip() {
        let mi = convert_distance(42.0, DistanceUnit::NauticalMiles, DistanceUnit::Miles);
        let nm = convert_distance(mi, DistanceUnit::Miles, DistanceUnit::NauticalMiles);
        assert!((nm - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_knots_to_ms() {
        let ms = convert_speed(10.0, SpeedUnit::Knots, SpeedUnit::MetersPerSecond);
        assert!((ms - 5.14444444).abs() < 1e-6);
    }

    #[test]
    fn test_temperature_freezing_point() {
        let f = convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert!((f - 32.0).abs() < 1e-9);

        let c = convert_temperature(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius);
        assert!((c - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_standard_atmosphere() {
        let inhg = convert_pressure(
            1013.25,
            PressureUnit::Hectopascals,
            PressureUnit::InchesOfMercury,
        );
        assert!((inhg - 29.92).abs() < 0.01);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("nm".parse::<DistanceUnit>().unwrap(), DistanceUnit::NauticalMiles);
        assert_eq!("KM".parse::<DistanceUnit>().unwrap(), DistanceUnit::Kilometers);
        assert_eq!("kts".parse::<SpeedUnit>().unwrap(), SpeedUnit::Knots);
        assert_eq!("m/s".parse::<SpeedUnit>().unwrap(), SpeedUnit::MetersPerSecond);
        assert_eq!("f".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("mbar".parse::<PressureUnit>().unwrap(), PressureUnit::Hectopascals);
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn test_format_halves_are_separate() {
        // The compute half returns a number; the format half renders it.
        let km = convert_distance(1.0, DistanceUnit::NauticalMiles, DistanceUnit::Kilometers);
        assert_eq!(format_distance(km, DistanceUnit::Kilometers), "1.9 km");
        assert_eq!(format_speed(6.25, SpeedUnit::Knots), "6.2 kn");
        assert_eq!(format_temperature(18.46, TemperatureUnit::Celsius), "18.5 °C");
        assert_eq!(
            format_pressure(29.921, PressureUnit::InchesOfMercury),
            "29.92 inHg"
        );
    }
}
