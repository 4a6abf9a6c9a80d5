use serde::{Deserialize, Serialize};

use crate::api::{TripId, VesselId};

// =========================================================
// Landing types (vessel and trip listings)
// =========================================================

/// Lightweight vessel listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselInfo {
    pub vessel_id: VesselId,
    pub vessel_name: String,
    pub vessel_type: String,
}

/// Lightweight trip listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripInfo {
    pub trip_id: TripId,
    pub vessel_id: VesselId,
    pub trip_name: String,
    /// RFC 3339 start time as recorded
    pub start_time: String,
    /// Whether the trip is still being recorded
    pub open: bool,
}

/// Route function name constants for the landing endpoints
pub const LIST_VESSELS: &str = "list_vessels";
pub const POST_VESSEL: &str = "store_vessel";
pub const LIST_TRIPS: &str = "list_trips";
