use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =========================================================
// Unit conversion types
// =========================================================

/// Which family of units a conversion request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionKind {
    Distance,
    Speed,
    Temperature,
    Pressure,
}

impl FromStr for ConversionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "speed" => Ok(Self::Speed),
            "temperature" => Ok(Self::Temperature),
            "pressure" => Ok(Self::Pressure),
            _ => Err(format!("Unknown conversion kind: {}", s)),
        }
    }
}

/// Result of a unit conversion: the numeric value in the target unit plus
/// the rendered display string. The statistics DTOs stay numeric-only; this
/// endpoint is the one place formatted strings cross the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub kind: ConversionKind,
    pub from_unit: String,
    pub to_unit: String,
    pub input_value: f64,
    pub value: f64,
    pub formatted: String,
}

/// Route function name constant for conversions
pub const CONVERT_UNITS: &str = "convert_units";
