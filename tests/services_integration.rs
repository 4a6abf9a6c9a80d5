use chrono::{DateTime, FixedOffset};

use saillog_rust::api::{GeoPoint, VesselId};
use saillog_rust::db::repositories::LocalRepository;
use saillog_rust::db::services::{
    close_trip, fleet_statistics, get_vessel, health_check, list_trips, list_vessels,
    record_route_point, record_weather_observation, store_trip, store_vessel, trip_summary,
    trips_for_vessel, vessel_distributions, vessel_statistics,
};
use saillog_rust::models::{RoutePoint, Trip, Vessel, WeatherObservation};

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn create_vessel(name: &str) -> Vessel {
    Vessel::new(name.to_string(), "sloop".to_string())
}

fn create_closed_trip(vessel_id: VesselId, name: &str, start: &str, end: &str) -> Trip {
    let mut trip = Trip::new(vessel_id, name.to_string(), ts(start));
    trip.end_time = Some(ts(end));
    trip.route = vec![
        RoutePoint::new(GeoPoint::new(0.0, 0.0), ts(start)).with_speed(5.0),
        RoutePoint::new(GeoPoint::new(0.0, 0.5), ts(end)).with_speed(7.0),
    ];
    trip.weather_log = vec![WeatherObservation {
        timestamp: ts(start),
        temperature_c: 18.0,
        wind_speed_knots: 12.0,
        wind_direction_deg: 225.0,
        pressure_hpa: 1015.0,
        notes: None,
    }];
    trip
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    let result = health_check(&repo).await;

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_store_and_list_vessels() {
    let repo = LocalRepository::new();

    let vessel_id = store_vessel(&repo, &create_vessel("Aurora")).await.unwrap();
    assert!(vessel_id.value() > 0);

    let vessels = list_vessels(&repo).await.unwrap();
    assert_eq!(vessels.len(), 1);
    assert_eq!(vessels[0].vessel_name, "Aurora");
}

#[tokio::test]
async fn test_store_and_retrieve_vessel() {
    let repo = LocalRepository::new();

    let mut vessel = create_vessel("Borealis");
    vessel.sail_number = Some("GER 421".to_string());
    let vessel_id = store_vessel(&repo, &vessel).await.unwrap();

    let retrieved = get_vessel(&repo, vessel_id).await.unwrap();
    assert_eq!(retrieved.name, "Borealis");
    assert_eq!(retrieved.sail_number.as_deref(), Some("GER 421"));
}

#[tokio::test]
async fn test_full_recording_and_statistics_flow() {
    let repo = LocalRepository::new();
    let vessel_id = store_vessel(&repo, &create_vessel("Aurora")).await.unwrap();

    // Start an open trip and record as the boat moves.
    let open = Trip::new(vessel_id, "live".to_string(), ts("2024-06-01T10:00:00Z"));
    let trip_id = store_trip(&repo, &open).await.unwrap();

    record_route_point(
        &repo,
        trip_id,
        RoutePoint::new(GeoPoint::new(0.0, 0.0), ts("2024-06-01T10:00:00Z")),
    )
    .await
    .unwrap();
    record_route_point(
        &repo,
        trip_id,
        RoutePoint::new(GeoPoint::new(0.0, 1.0), ts("2024-06-01T11:00:00Z")).with_speed(9.5),
    )
    .await
    .unwrap();
    record_weather_observation(
        &repo,
        trip_id,
        WeatherObservation {
            timestamp: ts("2024-06-01T10:30:00Z"),
            temperature_c: 21.0,
            wind_speed_knots: 15.0,
            wind_direction_deg: 270.0,
            pressure_hpa: 1012.0,
            notes: Some("building breeze".to_string()),
        },
    )
    .await
    .unwrap();

    close_trip(&repo, trip_id, ts("2024-06-01T11:00:00Z"))
        .await
        .unwrap();

    let summary = trip_summary(&repo, trip_id).await.unwrap();
    assert_eq!(summary.stats.duration_minutes, 60.0);
    assert!((summary.stats.distance_nm - 60.04).abs() < 0.5);
    assert_eq!(summary.stats.max_speed_knots, 9.5);
    assert_eq!(summary.weather_observations, 1);

    let stats = vessel_statistics(&repo, vessel_id).await.unwrap();
    assert_eq!(stats.total_trips, 1);
    assert_eq!(stats.max_speed_knots, 9.5);
    assert_eq!(stats.weather.max_wind_speed_knots, 15.0);
    assert_eq!(stats.monthly_activity.len(), 1);
    assert_eq!(stats.monthly_activity[0].month, "2024-06");
}

#[tokio::test]
async fn test_statistics_bucket_across_months() {
    let repo = LocalRepository::new();
    let vessel_id = store_vessel(&repo, &create_vessel("Aurora")).await.unwrap();

    for (name, start, end) in [
        ("april", "2024-04-05T10:00:00Z", "2024-04-05T12:00:00Z"),
        ("may", "2024-05-07T14:00:00Z", "2024-05-07T16:00:00Z"),
        ("april again", "2024-04-25T19:00:00Z", "2024-04-25T21:00:00Z"),
    ] {
        store_trip(&repo, &create_closed_trip(vessel_id, name, start, end))
            .await
            .unwrap();
    }

    let stats = vessel_statistics(&repo, vessel_id).await.unwrap();
    assert_eq!(stats.total_trips, 3);
    let months: Vec<&str> = stats
        .monthly_activity
        .iter()
        .map(|b| b.month.as_str())
        .collect();
    assert_eq!(months, vec!["2024-04", "2024-05"]);
    assert_eq!(stats.monthly_activity[0].trip_count, 2);
    assert_eq!(stats.time_of_day.morning, 1);
    assert_eq!(stats.time_of_day.afternoon, 1);
    assert_eq!(stats.time_of_day.evening, 1);
}

#[tokio::test]
async fn test_fleet_statistics_spans_vessels() {
    let repo = LocalRepository::new();
    let aurora = store_vessel(&repo, &create_vessel("Aurora")).await.unwrap();
    let borealis = store_vessel(&repo, &create_vessel("Borealis")).await.unwrap();

    store_trip(
        &repo,
        &create_closed_trip(aurora, "a", "2024-06-01T10:00:00Z", "2024-06-01T11:00:00Z"),
    )
    .await
    .unwrap();
    store_trip(
        &repo,
        &create_closed_trip(borealis, "b", "2024-06-02T10:00:00Z", "2024-06-02T11:00:00Z"),
    )
    .await
    .unwrap();

    let fleet = fleet_statistics(&repo).await.unwrap();
    assert_eq!(fleet.total_trips, 2);
    assert_eq!(fleet.weather.observation_count, 2);
}

#[tokio::test]
async fn test_distributions_for_vessel() {
    let repo = LocalRepository::new();
    let vessel_id = store_vessel(&repo, &create_vessel("Aurora")).await.unwrap();

    store_trip(
        &repo,
        &create_closed_trip(vessel_id, "one", "2024-06-01T10:00:00Z", "2024-06-01T11:00:00Z"),
    )
    .await
    .unwrap();
    store_trip(
        &repo,
        &create_closed_trip(vessel_id, "two", "2024-06-02T10:00:00Z", "2024-06-02T12:00:00Z"),
    )
    .await
    .unwrap();

    let data = vessel_distributions(&repo, vessel_id).await.unwrap();
    assert_eq!(data.trip_count, 2);
    assert_eq!(data.open_trip_count, 0);
    assert_eq!(data.duration_stats.count, 2);
    assert_eq!(data.duration_stats.mean, 90.0);
}

#[tokio::test]
async fn test_trips_for_unknown_vessel_is_not_found() {
    let repo = LocalRepository::new();
    assert!(trips_for_vessel(&repo, VesselId::new(999)).await.is_err());
    assert!(list_trips(&repo, VesselId::new(999)).await.is_err());
}

#[tokio::test]
async fn test_list_vessels_empty() {
    let repo = LocalRepository::new();
    let result = list_vessels(&repo).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 0);
}
