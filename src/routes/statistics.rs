use serde::{Deserialize, Serialize};

// =========================================================
// Sailing statistics types
// =========================================================

/// Activity bucket for one calendar month, keyed `"YYYY-MM"`.
///
/// Buckets are kept in first-seen order so that "last N months" slices taken
/// by the calling screens line up with the order trips were supplied in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyActivity {
    pub month: String,
    pub trip_count: usize,
    pub distance_nm: f64,
    pub duration_minutes: f64,
}

/// Trip counts by start hour of day, using the hour as recorded on the
/// device: morning [6,12), afternoon [12,18), evening [18,24), night [0,6).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeOfDayActivity {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
    pub night: usize,
}

/// Weather roll-up across all observations in the aggregated trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub observation_count: usize,
    pub average_wind_speed_knots: f64,
    pub average_wind_direction_deg: f64,
    pub average_temperature_c: f64,
    pub max_wind_speed_knots: f64,
}

/// Aggregate statistics over a collection of trips.
///
/// All fields are numeric; formatting for display is the caller's concern.
/// `max_speed_knots` is the maximum vessel speed over ground seen in any
/// route sample; the maximum observed wind speed lives in
/// [`WeatherSummary::max_wind_speed_knots`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SailingStats {
    pub total_trips: usize,
    pub total_distance_nm: f64,
    pub total_duration_minutes: f64,
    pub average_speed_knots: f64,
    pub average_trip_length_nm: f64,
    pub max_speed_knots: f64,
    pub monthly_activity: Vec<MonthlyActivity>,
    pub time_of_day: TimeOfDayActivity,
    pub weather: WeatherSummary,
}

/// Route function name constant for statistics
pub const GET_SAILING_STATS: &str = "get_sailing_stats";
