//! Trip repository trait for logbook storage operations.
//!
//! This trait defines the trip lifecycle as the storage layer sees it:
//! trips are created whole or started open, grow by appended route points and
//! weather observations, and become immutable once closed.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use super::error::RepositoryResult;
use crate::api::{TripId, VesselId};
use crate::models::{RoutePoint, Trip, WeatherObservation};

/// Repository trait for trip storage and lifecycle operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Store a trip for an existing vessel and return its assigned ID.
    ///
    /// `checksum` identifies the uploaded payload for duplicate detection;
    /// the repository stores it verbatim. The `id` field of the input trip is
    /// ignored.
    ///
    /// # Returns
    /// * `Ok(TripId)` - ID of the stored trip
    /// * `Err(RepositoryError::NotFound)` - If the referenced vessel does not exist
    async fn store_trip(&self, trip: &Trip, checksum: &str) -> RepositoryResult<TripId>;

    /// Fetch a single trip with its full route, weather log and crew.
    async fn fetch_trip(&self, trip_id: TripId) -> RepositoryResult<Trip>;

    /// Fetch all trips recorded for one vessel, oldest first.
    async fn fetch_trips_for_vessel(&self, vessel_id: VesselId) -> RepositoryResult<Vec<Trip>>;

    /// Fetch every stored trip, oldest first.
    async fn fetch_all_trips(&self) -> RepositoryResult<Vec<Trip>>;

    /// Look up a trip by payload checksum.
    ///
    /// # Returns
    /// * `Ok(Some(TripId))` - A trip with this checksum already exists
    /// * `Ok(None)` - No duplicate
    async fn find_trip_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<TripId>>;

    /// Append a GPS fix to an open trip.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If the trip is already closed
    async fn append_route_point(
        &self,
        trip_id: TripId,
        point: RoutePoint,
    ) -> RepositoryResult<()>;

    /// Append a weather observation to an open trip.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If the trip is already closed
    async fn append_weather_observation(
        &self,
        trip_id: TripId,
        observation: WeatherObservation,
    ) -> RepositoryResult<()>;

    /// Close an open trip by setting its end time, and return the closed trip.
    ///
    /// The end time is stored as supplied; it is not checked against the
    /// start time (numeric garbage passes through to the analytics, by the
    /// crate-wide policy).
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If the trip is already closed
    async fn close_trip(
        &self,
        trip_id: TripId,
        end_time: DateTime<FixedOffset>,
    ) -> RepositoryResult<Trip>;

    /// Delete a trip.
    async fn delete_trip(&self, trip_id: TripId) -> RepositoryResult<()>;
}
