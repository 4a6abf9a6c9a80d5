//! Per-trip reduction of a GPS route to scalar metrics.

use crate::algorithms::haversine_distance_nm;
use crate::api::TripStats;
use crate::models::{RoutePoint, Trip};

/// Total route length in nautical miles: the sum of consecutive great-circle
/// segments. Empty and single-point routes measure zero.
pub fn route_distance_nm(route: &[RoutePoint]) -> f64 {
    route
        .windows(2)
        .map(|pair| haversine_distance_nm(pair[0].position, pair[1].position))
        .sum()
}

/// Reduce a trip to its scalar metrics.
///
/// Open trips (no `end_time`) report zero duration and zero average speed.
/// An `end_time` before `start_time` is a caller error; the negative duration
/// passes through unmodified so aggregation over a fleet never aborts on one
/// bad trip, and the average speed falls back to zero.
pub fn compute_trip_stats(trip: &Trip) -> TripStats {
    let distance_nm = route_distance_nm(&trip.route);

    let duration_minutes = match trip.end_time {
        Some(end) => (end - trip.start_time).num_milliseconds() as f64 / 60_000.0,
        None => 0.0,
    };

    let max_speed_knots = trip
        .route
        .iter()
        .filter_map(|point| point.speed_knots)
        .fold(0.0, f64::max);

    let average_speed_knots = if duration_minutes > 0.0 {
        distance_nm / (duration_minutes / 60.0)
    } else {
        0.0
    };

    TripStats {
        distance_nm,
        duration_minutes,
        average_speed_knots,
        max_speed_knots,
    }
}
