//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most statistics DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Conversions
    ConversionKind, ConversionResult,
    // Distribution
    DistributionData, DistributionStats,
    // Landing
    TripInfo, VesselInfo,
    // Statistics
    MonthlyActivity, SailingStats, TimeOfDayActivity, WeatherSummary,
    // Trips
    TripStats, TripSummary,
};

/// Request body for registering a new vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVesselRequest {
    /// Display name
    pub name: String,
    /// Free-form vessel type
    #[serde(default)]
    pub vessel_type: String,
    #[serde(default)]
    pub sail_number: Option<String>,
    #[serde(default)]
    pub home_port: Option<String>,
}

/// Response for vessel registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVesselResponse {
    /// Assigned vessel ID
    pub vessel_id: i64,
    /// Message about the operation
    pub message: String,
}

/// Response for trip upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTripResponse {
    /// Assigned trip ID
    pub trip_id: i64,
    /// Message about the operation
    pub message: String,
}

/// Request body for closing an open trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseTripRequest {
    /// End time as recorded on the device (RFC 3339)
    pub end_time: DateTime<FixedOffset>,
}

/// Query parameters for the unit conversion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionQuery {
    /// Value in the source unit
    pub value: f64,
    /// Unit family ("distance", "speed", "temperature", "pressure")
    pub kind: String,
    /// Source unit label
    pub from: String,
    /// Target unit label
    pub to: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Vessel list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselListResponse {
    /// List of vessels
    pub vessels: Vec<VesselInfo>,
    /// Total count
    pub total: usize,
}

/// Trip list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripListResponse {
    /// List of trips
    pub trips: Vec<TripInfo>,
    /// Total count
    pub total: usize,
}
