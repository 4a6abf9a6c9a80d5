//! Property-style tests for the pure analytics core: geodesic distance,
//! per-trip stats, Beaufort classification and fleet aggregation.

use chrono::{DateTime, FixedOffset};

use saillog_rust::algorithms::haversine_distance_nm;
use saillog_rust::api::{GeoPoint, VesselId};
use saillog_rust::models::wind::beaufort_force;
use saillog_rust::models::{RoutePoint, Trip};
use saillog_rust::services::{aggregate_trips, compute_trip_stats};

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn distance_to_self_is_zero_everywhere() {
    let points = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(89.9, 179.9),
        GeoPoint::new(-45.0, -90.0),
        GeoPoint::new(54.321, 10.135),
    ];
    for p in points {
        assert!(haversine_distance_nm(p, p).abs() < 1e-9);
    }
}

#[test]
fn distance_commutes() {
    let pairs = [
        (GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 10.0)),
        (GeoPoint::new(-30.0, 60.0), GeoPoint::new(45.0, -120.0)),
        (GeoPoint::new(54.3, 10.1), GeoPoint::new(55.7, 12.6)),
    ];
    for (a, b) in pairs {
        assert_eq!(haversine_distance_nm(a, b), haversine_distance_nm(b, a));
    }
}

#[test]
fn triangle_inequality_for_collinear_points() {
    // Three points in order along the equator.
    let a = GeoPoint::new(0.0, 0.0);
    let b = GeoPoint::new(0.0, 2.0);
    let c = GeoPoint::new(0.0, 5.0);
    let direct = haversine_distance_nm(a, c);
    let via = haversine_distance_nm(a, b) + haversine_distance_nm(b, c);
    assert!(direct <= via + 1e-9);
}

#[test]
fn one_degree_of_longitude_at_equator() {
    let d = haversine_distance_nm(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
    assert!((d - 60.04).abs() < 0.5, "expected ~60.04 nm, got {}", d);
}

#[test]
fn short_routes_measure_zero() {
    let mut trip = Trip::new(VesselId::new(1), "stub".to_string(), ts("2024-06-01T10:00:00Z"));
    let stats = compute_trip_stats(&trip);
    assert_eq!(stats.distance_nm, 0.0);
    assert_eq!(stats.max_speed_knots, 0.0);

    trip.route = vec![RoutePoint::new(
        GeoPoint::new(10.0, 10.0),
        ts("2024-06-01T10:00:00Z"),
    )];
    let stats = compute_trip_stats(&trip);
    assert_eq!(stats.distance_nm, 0.0);
    assert_eq!(stats.max_speed_knots, 0.0);
}

#[test]
fn concrete_one_hour_equator_trip() {
    let mut trip = Trip::new(
        VesselId::new(1),
        "one degree east".to_string(),
        ts("2024-06-01T10:00:00Z"),
    );
    trip.end_time = Some(ts("2024-06-01T11:00:00Z"));
    trip.route = vec![
        RoutePoint::new(GeoPoint::new(0.0, 0.0), ts("2024-06-01T10:00:00Z")),
        RoutePoint::new(GeoPoint::new(0.0, 1.0), ts("2024-06-01T11:00:00Z")),
    ];

    let stats = compute_trip_stats(&trip);
    assert_eq!(stats.duration_minutes, 60.0);
    assert!((stats.distance_nm - 60.04).abs() < 0.5);
    assert!((stats.average_speed_knots - 60.04).abs() < 0.5);
    assert_eq!(stats.max_speed_knots, 0.0);
}

#[test]
fn empty_aggregate_is_all_zero() {
    let stats = aggregate_trips(&[]);
    assert_eq!(stats.total_trips, 0);
    assert_eq!(stats.total_distance_nm, 0.0);
    assert_eq!(stats.average_speed_knots, 0.0);
    assert_eq!(stats.average_trip_length_nm, 0.0);
    assert!(!stats.average_speed_knots.is_nan());
}

#[test]
fn beaufort_boundary_cases() {
    assert_eq!(beaufort_force(0.0).force, 0);
    assert_eq!(beaufort_force(3.9).force, 0);
    assert_eq!(beaufort_force(4.0).force, 1);
    assert_eq!(beaufort_force(100.0).force, 12);
}

#[test]
fn aggregation_is_idempotent() {
    let mut trip = Trip::new(
        VesselId::new(1),
        "repeatable".to_string(),
        ts("2024-06-01T10:00:00Z"),
    );
    trip.end_time = Some(ts("2024-06-01T12:00:00Z"));
    trip.route = vec![
        RoutePoint::new(GeoPoint::new(0.0, 0.0), ts("2024-06-01T10:00:00Z")).with_speed(5.5),
        RoutePoint::new(GeoPoint::new(0.5, 0.5), ts("2024-06-01T11:00:00Z")).with_speed(6.5),
        RoutePoint::new(GeoPoint::new(1.0, 1.0), ts("2024-06-01T12:00:00Z")),
    ];
    let trips = vec![trip];

    let first = serde_json::to_string(&aggregate_trips(&trips)).unwrap();
    let second = serde_json::to_string(&aggregate_trips(&trips)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn monthly_buckets_follow_chronological_first_seen_order() {
    let mut trips = Vec::new();
    for (month, day) in [("01", 5), ("01", 20), ("02", 3), ("04", 11)] {
        let start = format!("2024-{}-{:02}T10:00:00Z", month, day);
        let end = format!("2024-{}-{:02}T11:00:00Z", month, day);
        let mut trip = Trip::new(VesselId::new(1), "leg".to_string(), ts(&start));
        trip.end_time = Some(ts(&end));
        trips.push(trip);
    }

    let stats = aggregate_trips(&trips);
    let months: Vec<&str> = stats
        .monthly_activity
        .iter()
        .map(|b| b.month.as_str())
        .collect();
    assert_eq!(months, vec!["2024-01", "2024-02", "2024-04"]);
}

#[test]
fn malformed_trips_do_not_poison_the_fleet() {
    // A trip with a NaN coordinate produces a NaN distance, but the
    // aggregation itself must still complete and count every trip.
    let mut bad = Trip::new(VesselId::new(1), "bad".to_string(), ts("2024-06-01T10:00:00Z"));
    bad.end_time = Some(ts("2024-06-01T11:00:00Z"));
    bad.route = vec![
        RoutePoint::new(GeoPoint::new(f64::NAN, 0.0), ts("2024-06-01T10:00:00Z")),
        RoutePoint::new(GeoPoint::new(0.0, 1.0), ts("2024-06-01T11:00:00Z")),
    ];

    let mut good = Trip::new(VesselId::new(1), "good".to_string(), ts("2024-07-01T10:00:00Z"));
    good.end_time = Some(ts("2024-07-01T11:00:00Z"));

    let stats = aggregate_trips(&[bad, good]);
    assert_eq!(stats.total_trips, 2);
    assert!(stats.total_distance_nm.is_nan());
    assert_eq!(stats.monthly_activity.len(), 2);
}
