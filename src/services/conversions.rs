//! Unit conversion service: dispatches a conversion request to the right
//! unit family and returns both the numeric and the formatted halves.

use crate::api::{ConversionKind, ConversionResult};
use crate::models::units::{
    convert_distance, convert_pressure, convert_speed, convert_temperature, format_distance,
    format_pressure, format_speed, format_temperature, DistanceUnit, PressureUnit, SpeedUnit,
    TemperatureUnit,
};

/// Convert `value` between two units of the given kind.
///
/// `from` and `to` are the short unit labels the settings screens store
/// ("nm", "kmh", "f", "hpa", ...). Unknown labels are an error; the numeric
/// value itself is not validated.
pub fn convert_units(
    kind: ConversionKind,
    from: &str,
    to: &str,
    value: f64,
) -> Result<ConversionResult, String> {
    let (converted, formatted) = match kind {
        ConversionKind::Distance => {
            let from_unit: DistanceUnit = from.parse()?;
            let to_unit: DistanceUnit = to.parse()?;
            let converted = convert_distance(value, from_unit, to_unit);
            (converted, format_distance(converted, to_unit))
        }
        ConversionKind::Speed => {
            let from_unit: SpeedUnit = from.parse()?;
            let to_unit: SpeedUnit = to.parse()?;
            let converted = convert_speed(value, from_unit, to_unit);
            (converted, format_speed(converted, to_unit))
        }
        ConversionKind::Temperature => {
            let from_unit: TemperatureUnit = from.parse()?;
            let to_unit: TemperatureUnit = to.parse()?;
            let converted = convert_temperature(value, from_unit, to_unit);
            (converted, format_temperature(converted, to_unit))
        }
        ConversionKind::Pressure => {
            let from_unit: PressureUnit = from.parse()?;
            let to_unit: PressureUnit = to.parse()?;
            let converted = convert_pressure(value, from_unit, to_unit);
            (converted, format_pressure(converted, to_unit))
        }
    };

    Ok(ConversionResult {
        kind,
        from_unit: from.to_string(),
        to_unit: to.to_string(),
        input_value: value,
        value: converted,
        formatted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_conversion() {
        let result = convert_units(ConversionKind::Distance, "nm", "km", 10.0).unwrap();
        assert!((result.value - 18.52).abs() < 1e-9);
        assert_eq!(result.formatted, "18.5 km");
        assert_eq!(result.input_value, 10.0);
    }

    #[test]
    fn test_speed_conversion() {
        let result = convert_units(ConversionKind::Speed, "kn", "kmh", 10.0).unwrap();
        assert!((result.value - 18.52).abs() < 1e-9);
        assert_eq!(result.formatted, "18.5 km/h");
    }

    #[test]
    fn test_temperature_conversion() {
        let result = convert_units(ConversionKind::Temperature, "c", "f", 100.0).unwrap();
        assert!((result.value - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_conversion() {
        let result = convert_units(ConversionKind::Pressure, "hpa", "inhg", 1013.25).unwrap();
        assert!((result.value - 29.92).abs() < 0.01);
        assert_eq!(result.formatted, "29.92 inHg");
    }

    #[test]
    fn test_unknown_unit_is_error() {
        assert!(convert_units(ConversionKind::Distance, "nm", "furlongs", 1.0).is_err());
        assert!(convert_units(ConversionKind::Speed, "warp", "kn", 1.0).is_err());
    }

    #[test]
    fn test_mismatched_family_is_error() {
        // "kn" is not a distance unit.
        assert!(convert_units(ConversionKind::Distance, "kn", "km", 1.0).is_err());
    }
}
