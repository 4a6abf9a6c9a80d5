//! Descriptive statistics over per-trip metrics for the charts screens.

use crate::api::{DistributionData, DistributionStats};
use crate::models::Trip;
use crate::services::trip_stats::compute_trip_stats;

/// Compute statistics for a set of values.
/// This is a helper function that calculates mean, median, std dev, min, max, and sum.
fn compute_stats(values: &[f64]) -> DistributionStats {
    if values.is_empty() {
        return DistributionStats::default();
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    // Compute median
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    // Compute standard deviation
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;
    let std_dev = variance.sqrt();

    let min = sorted.first().copied().unwrap_or(0.0);
    let max = sorted.last().copied().unwrap_or(0.0);

    DistributionStats {
        count,
        mean,
        median,
        std_dev,
        min,
        max,
        sum,
    }
}

/// Compute distribution data over the per-trip metrics of a trip collection.
///
/// Open trips are counted separately; their zero durations and average speeds
/// are excluded from the duration and speed distributions so a fleet with
/// many trips in progress does not drag those charts to zero.
pub fn compute_distribution_data(trips: &[Trip]) -> DistributionData {
    let trip_count = trips.len();
    let open_trip_count = trips.iter().filter(|t| t.is_open()).count();

    let mut distances = Vec::with_capacity(trip_count);
    let mut durations = Vec::new();
    let mut speeds = Vec::new();

    for trip in trips {
        let stats = compute_trip_stats(trip);
        distances.push(stats.distance_nm);
        if !trip.is_open() {
            durations.push(stats.duration_minutes);
            speeds.push(stats.average_speed_knots);
        }
    }

    DistributionData {
        distance_stats: compute_stats(&distances),
        duration_stats: compute_stats(&durations),
        speed_stats: compute_stats(&speeds),
        trip_count,
        open_trip_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GeoPoint, VesselId};
    use crate::models::RoutePoint;
    use chrono::{DateTime, FixedOffset};

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_compute_stats() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = compute_stats(&values);

        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.sum, 15.0);
        assert!((stats.std_dev - std::f64::consts::SQRT_2).abs() < 0.001);
    }

    #[test]
    fn test_compute_stats_empty() {
        let values = vec![];
        let stats = compute_stats(&values);

        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
    }

    #[test]
    fn test_compute_stats_median_even() {
        let values = vec![2.0, 8.0, 4.0, 6.0];
        let stats = compute_stats(&values);
        assert_eq!(stats.median, 5.0); // (4.0 + 6.0) / 2
    }

    #[test]
    fn test_distribution_over_trips() {
        let mut closed = Trip::new(
            VesselId::new(1),
            "closed".to_string(),
            ts("2024-06-01T10:00:00Z"),
        );
        closed.end_time = Some(ts("2024-06-01T11:00:00Z"));
        closed.route = vec![
            RoutePoint::new(GeoPoint::new(0.0, 0.0), ts("2024-06-01T10:00:00Z")),
            RoutePoint::new(GeoPoint::new(0.0, 0.5), ts("2024-06-01T11:00:00Z")),
        ];

        let open = Trip::new(
            VesselId::new(1),
            "open".to_string(),
            ts("2024-06-02T10:00:00Z"),
        );

        let data = compute_distribution_data(&[closed, open]);

        assert_eq!(data.trip_count, 2);
        assert_eq!(data.open_trip_count, 1);
        // Both trips appear in the distance distribution...
        assert_eq!(data.distance_stats.count, 2);
        // ...but only the closed one in duration and speed.
        assert_eq!(data.duration_stats.count, 1);
        assert_eq!(data.duration_stats.mean, 60.0);
        assert_eq!(data.speed_stats.count, 1);
    }

    #[test]
    fn test_distribution_empty() {
        let data = compute_distribution_data(&[]);
        assert_eq!(data.trip_count, 0);
        assert_eq!(data.open_trip_count, 0);
        assert_eq!(data.distance_stats.count, 0);
    }
}
