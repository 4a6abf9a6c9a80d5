use serde::{Deserialize, Serialize};

use crate::api::{TripId, VesselId};

// =========================================================
// Per-trip stats types
// =========================================================

/// Scalar metrics reduced from a single trip's route and times.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TripStats {
    /// Sum of consecutive great-circle segment lengths, not displacement
    pub distance_nm: f64,
    /// Zero while the trip is open
    pub duration_minutes: f64,
    pub average_speed_knots: f64,
    /// Maximum over route samples that carried a speed; zero if none did
    pub max_speed_knots: f64,
}

/// A trip together with its computed stats, for listing screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    pub trip_id: TripId,
    pub vessel_id: VesselId,
    pub trip_name: String,
    /// RFC 3339 start time as recorded
    pub start_time: String,
    /// RFC 3339 end time, absent while the trip is open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub stats: TripStats,
    pub route_points: usize,
    pub weather_observations: usize,
    pub crew_count: usize,
}

/// Route function name constant for trip summaries
pub const GET_TRIP_SUMMARY: &str = "get_trip_summary";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_stats_default() {
        let stats = TripStats::default();
        assert_eq!(stats.distance_nm, 0.0);
        assert_eq!(stats.duration_minutes, 0.0);
        assert_eq!(stats.average_speed_knots, 0.0);
        assert_eq!(stats.max_speed_knots, 0.0);
    }

    #[test]
    fn test_trip_summary_debug() {
        let summary = TripSummary {
            trip_id: TripId::new(1),
            vessel_id: VesselId::new(2),
            trip_name: "Around the island".to_string(),
            start_time: "2024-06-01T09:00:00+02:00".to_string(),
            end_time: Some("2024-06-01T15:00:00+02:00".to_string()),
            stats: TripStats::default(),
            route_points: 120,
            weather_observations: 3,
            crew_count: 4,
        };
        let debug_str = format!("{:?}", summary);
        assert!(debug_str.contains("TripSummary"));
    }

    #[test]
    fn test_open_trip_summary_omits_end_time() {
        let summary = TripSummary {
            trip_id: TripId::new(1),
            vessel_id: VesselId::new(2),
            trip_name: "Night watch".to_string(),
            start_time: "2024-06-01T23:00:00+02:00".to_string(),
            end_time: None,
            stats: TripStats::default(),
            route_points: 0,
            weather_observations: 0,
            crew_count: 1,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("end_time").is_none());
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_TRIP_SUMMARY, "get_trip_summary");
    }
}
