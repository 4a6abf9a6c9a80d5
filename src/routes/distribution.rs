use serde::{Deserialize, Serialize};

// =========================================================
// Distribution types
// =========================================================

/// Descriptive statistics for a set of per-trip values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributionStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

/// Complete distribution dataset for the charts screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionData {
    pub distance_stats: DistributionStats,
    pub duration_stats: DistributionStats,
    pub speed_stats: DistributionStats,
    pub trip_count: usize,
    /// Trips still being recorded; they contribute distance but no duration
    pub open_trip_count: usize,
}

/// Route function name constant for distributions
pub const GET_DISTRIBUTION_DATA: &str = "get_distribution_data";
