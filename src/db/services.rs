//! High-level business logic functions over the repository traits.
//!
//! These functions orchestrate repository calls and hand fully-materialized
//! trip snapshots to the pure analytics services. Use these from application
//! code rather than talking to the repositories directly.

use chrono::{DateTime, FixedOffset};

use super::checksum::calculate_checksum;
use super::models::{
    DistributionData, RoutePoint, SailingStats, Trip, TripInfo, TripSummary, Vessel, VesselInfo,
    WeatherObservation,
};
use super::repository::{
    FullRepository, RepositoryError, RepositoryResult, TripRepository, VesselRepository,
};
use crate::api::{TripId, VesselId};
use crate::services::{aggregate_trips, compute_distribution_data, compute_trip_stats};

/// Check that the repository backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Register a vessel and return its assigned ID.
pub async fn store_vessel(repo: &dyn FullRepository, vessel: &Vessel) -> RepositoryResult<VesselId> {
    let vessel_id = repo.store_vessel(vessel).await?;
    log::debug!("Stored vessel {} ({})", vessel_id, vessel.name);
    Ok(vessel_id)
}

/// Fetch a single vessel.
pub async fn get_vessel(repo: &dyn FullRepository, vessel_id: VesselId) -> RepositoryResult<Vessel> {
    repo.fetch_vessel(vessel_id).await
}

/// List all registered vessels as lightweight listing entries.
pub async fn list_vessels(repo: &dyn FullRepository) -> RepositoryResult<Vec<VesselInfo>> {
    let vessels = repo.list_vessels().await?;
    vessels
        .into_iter()
        .map(|vessel| {
            let vessel_id = vessel
                .id
                .ok_or_else(|| RepositoryError::internal("Stored vessel is missing its id"))?;
            Ok(VesselInfo {
                vessel_id,
                vessel_name: vessel.name,
                vessel_type: vessel.vessel_type,
            })
        })
        .collect()
}

/// Store a trip, rejecting payloads that were already uploaded.
///
/// The duplicate check hashes the canonical JSON of the trip (with the `id`
/// field cleared, so re-uploads of the same recording collide regardless of
/// any client-assigned id).
pub async fn store_trip(repo: &dyn FullRepository, trip: &Trip) -> RepositoryResult<TripId> {
    let mut canonical = trip.clone();
    canonical.id = None;
    let payload = serde_json::to_string(&canonical)
        .map_err(|e| RepositoryError::internal(format!("Serialize trip failed: {}", e)))?;
    let checksum = calculate_checksum(&payload);

    if let Some(existing) = repo.find_trip_by_checksum(&checksum).await? {
        return Err(RepositoryError::validation(format!(
            "Trip already uploaded as {}",
            existing
        )));
    }

    let trip_id = repo.store_trip(trip, &checksum).await?;
    log::debug!("Stored trip {} for vessel {}", trip_id, trip.vessel_id);
    Ok(trip_id)
}

/// Fetch a single trip with its full route, weather log and crew.
pub async fn get_trip(repo: &dyn FullRepository, trip_id: TripId) -> RepositoryResult<Trip> {
    repo.fetch_trip(trip_id).await
}

/// Fetch all trips recorded for one vessel, oldest first.
pub async fn trips_for_vessel(
    repo: &dyn FullRepository,
    vessel_id: VesselId,
) -> RepositoryResult<Vec<Trip>> {
    // Surface a NotFound for unknown vessels instead of an empty list.
    repo.fetch_vessel(vessel_id).await?;
    repo.fetch_trips_for_vessel(vessel_id).await
}

/// List one vessel's trips as lightweight listing entries.
pub async fn list_trips(
    repo: &dyn FullRepository,
    vessel_id: VesselId,
) -> RepositoryResult<Vec<TripInfo>> {
    let trips = trips_for_vessel(repo, vessel_id).await?;
    trips
        .into_iter()
        .map(|trip| {
            let trip_id = trip
                .id
                .ok_or_else(|| RepositoryError::internal("Stored trip is missing its id"))?;
            Ok(TripInfo {
                trip_id,
                vessel_id: trip.vessel_id,
                trip_name: trip.name,
                start_time: trip.start_time.to_rfc3339(),
                open: trip.end_time.is_none(),
            })
        })
        .collect()
}

/// Append a GPS fix to an open trip.
pub async fn record_route_point(
    repo: &dyn FullRepository,
    trip_id: TripId,
    point: RoutePoint,
) -> RepositoryResult<()> {
    repo.append_route_point(trip_id, point).await
}

/// Append a weather observation to an open trip.
pub async fn record_weather_observation(
    repo: &dyn FullRepository,
    trip_id: TripId,
    observation: WeatherObservation,
) -> RepositoryResult<()> {
    repo.append_weather_observation(trip_id, observation).await
}

/// Close an open trip and return it.
pub async fn close_trip(
    repo: &dyn FullRepository,
    trip_id: TripId,
    end_time: DateTime<FixedOffset>,
) -> RepositoryResult<Trip> {
    let trip = repo.close_trip(trip_id, end_time).await?;
    log::debug!("Closed trip {}", trip_id);
    Ok(trip)
}

/// Compute the per-trip stats summary for one trip.
pub async fn trip_summary(
    repo: &dyn FullRepository,
    trip_id: TripId,
) -> RepositoryResult<TripSummary> {
    let trip = repo.fetch_trip(trip_id).await?;
    let stats = compute_trip_stats(&trip);
    let id = trip
        .id
        .ok_or_else(|| RepositoryError::internal("Stored trip is missing its id"))?;

    Ok(TripSummary {
        trip_id: id,
        vessel_id: trip.vessel_id,
        trip_name: trip.name,
        start_time: trip.start_time.to_rfc3339(),
        end_time: trip.end_time.map(|t| t.to_rfc3339()),
        stats,
        route_points: trip.route.len(),
        weather_observations: trip.weather_log.len(),
        crew_count: trip.crew.len(),
    })
}

/// Aggregate statistics over all trips of one vessel.
pub async fn vessel_statistics(
    repo: &dyn FullRepository,
    vessel_id: VesselId,
) -> RepositoryResult<SailingStats> {
    let trips = trips_for_vessel(repo, vessel_id).await?;
    Ok(aggregate_trips(&trips))
}

/// Aggregate statistics over every stored trip.
pub async fn fleet_statistics(repo: &dyn FullRepository) -> RepositoryResult<SailingStats> {
    let trips = repo.fetch_all_trips().await?;
    Ok(aggregate_trips(&trips))
}

/// Distribution chart data over all trips of one vessel.
pub async fn vessel_distributions(
    repo: &dyn FullRepository,
    vessel_id: VesselId,
) -> RepositoryResult<DistributionData> {
    let trips = trips_for_vessel(repo, vessel_id).await?;
    Ok(compute_distribution_data(&trips))
}
