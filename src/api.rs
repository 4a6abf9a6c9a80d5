//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier newtypes, shared value types and the
//! DTO types for the HTTP API. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::routes::conversions::ConversionKind;
pub use crate::routes::conversions::ConversionResult;
pub use crate::routes::distribution::DistributionData;
pub use crate::routes::distribution::DistributionStats;
pub use crate::routes::landing::TripInfo;
pub use crate::routes::landing::VesselInfo;
pub use crate::routes::statistics::MonthlyActivity;
pub use crate::routes::statistics::SailingStats;
pub use crate::routes::statistics::TimeOfDayActivity;
pub use crate::routes::statistics::WeatherSummary;
pub use crate::routes::trips::TripStats;
pub use crate::routes::trips::TripSummary;

use serde::{Deserialize, Serialize};

/// Vessel identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VesselId(pub i64);

/// Trip identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TripId(pub i64);

/// Crew member identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrewMemberId(pub i64);

impl VesselId {
    pub fn new(value: i64) -> Self {
        VesselId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TripId {
    pub fn new(value: i64) -> Self {
        TripId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl CrewMemberId {
    pub fn new(value: i64) -> Self {
        CrewMemberId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for VesselId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for CrewMemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<VesselId> for i64 {
    fn from(id: VesselId) -> Self {
        id.0
    }
}

impl From<TripId> for i64 {
    fn from(id: TripId) -> Self {
        id.0
    }
}

/// Geographic position (latitude, longitude) in decimal degrees.
///
/// A pure value with no identity. Coordinates are trusted as supplied by the
/// recording device: latitude in [-90, 90], longitude in [-180, 180]. Values
/// outside those ranges (or NaN) are carried through the analytics unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
