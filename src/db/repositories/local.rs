//! In-memory repository implementation.
//!
//! Backs unit tests and local development. All data lives in process memory
//! behind `parking_lot` locks; IDs are handed out from monotonically
//! increasing counters so listing order matches insertion order.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use parking_lot::RwLock;

use crate::api::{TripId, VesselId};
use crate::db::models::{RoutePoint, Trip, Vessel, WeatherObservation};
use crate::db::repository::{
    RepositoryError, RepositoryResult, TripRepository, VesselRepository,
};

#[derive(Debug, Clone)]
struct TripRecord {
    trip: Trip,
    checksum: String,
}

/// In-memory repository for unit testing and local development.
pub struct LocalRepository {
    vessels: RwLock<HashMap<i64, Vessel>>,
    trips: RwLock<HashMap<i64, TripRecord>>,
    next_vessel_id: AtomicI64,
    next_trip_id: AtomicI64,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            vessels: RwLock::new(HashMap::new()),
            trips: RwLock::new(HashMap::new()),
            next_vessel_id: AtomicI64::new(1),
            next_trip_id: AtomicI64::new(1),
        }
    }

    fn with_open_trip<F>(&self, trip_id: TripId, mutate: F) -> RepositoryResult<()>
    where
        F: FnOnce(&mut Trip),
    {
        let mut trips = self.trips.write();
        let record = trips
            .get_mut(&trip_id.value())
            .ok_or_else(|| RepositoryError::not_found(format!("Trip {} not found", trip_id)))?;
        if record.trip.end_time.is_some() {
            return Err(RepositoryError::validation(format!(
                "Trip {} is closed and cannot be modified",
                trip_id
            )));
        }
        mutate(&mut record.trip);
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VesselRepository for LocalRepository {
    async fn store_vessel(&self, vessel: &Vessel) -> RepositoryResult<VesselId> {
        let id = self.next_vessel_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = vessel.clone();
        stored.id = Some(VesselId::new(id));
        self.vessels.write().insert(id, stored);
        Ok(VesselId::new(id))
    }

    async fn fetch_vessel(&self, vessel_id: VesselId) -> RepositoryResult<Vessel> {
        self.vessels
            .read()
            .get(&vessel_id.value())
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Vessel {} not found", vessel_id)))
    }

    async fn list_vessels(&self) -> RepositoryResult<Vec<Vessel>> {
        let vessels = self.vessels.read();
        let mut all: Vec<Vessel> = vessels.values().cloned().collect();
        all.sort_by_key(|v| v.id.map(|id| id.value()).unwrap_or(0));
        Ok(all)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl TripRepository for LocalRepository {
    async fn store_trip(&self, trip: &Trip, checksum: &str) -> RepositoryResult<TripId> {
        if !self
            .vessels
            .read()
            .contains_key(&trip.vessel_id.value())
        {
            return Err(RepositoryError::not_found(format!(
                "Vessel {} not found",
                trip.vessel_id
            )));
        }

        let id = self.next_trip_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = trip.clone();
        stored.id = Some(TripId::new(id));
        self.trips.write().insert(
            id,
            TripRecord {
                trip: stored,
                checksum: checksum.to_string(),
            },
        );
        Ok(TripId::new(id))
    }

    async fn fetch_trip(&self, trip_id: TripId) -> RepositoryResult<Trip> {
        self.trips
            .read()
            .get(&trip_id.value())
            .map(|record| record.trip.clone())
            .ok_or_else(|| RepositoryError::not_found(format!("Trip {} not found", trip_id)))
    }

    async fn fetch_trips_for_vessel(&self, vessel_id: VesselId) -> RepositoryResult<Vec<Trip>> {
        let trips = self.trips.read();
        let mut matching: Vec<Trip> = trips
            .values()
            .filter(|record| record.trip.vessel_id == vessel_id)
            .map(|record| record.trip.clone())
            .collect();
        matching.sort_by_key(|t| t.id.map(|id| id.value()).unwrap_or(0));
        Ok(matching)
    }

    async fn fetch_all_trips(&self) -> RepositoryResult<Vec<Trip>> {
        let trips = self.trips.read();
        let mut all: Vec<Trip> = trips.values().map(|record| record.trip.clone()).collect();
        all.sort_by_key(|t| t.id.map(|id| id.value()).unwrap_or(0));
        Ok(all)
    }

    async fn find_trip_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<TripId>> {
        let trips = self.trips.read();
        let mut matching: Vec<i64> = trips
            .iter()
            .filter(|(_, record)| record.checksum == checksum)
            .map(|(id, _)| *id)
            .collect();
        matching.sort_unstable();
        Ok(matching.first().map(|id| TripId::new(*id)))
    }

    async fn append_route_point(
        &self,
        trip_id: TripId,
        point: RoutePoint,
    ) -> RepositoryResult<()> {
        self.with_open_trip(trip_id, |trip| trip.route.push(point))
    }

    async fn append_weather_observation(
        &self,
        trip_id: TripId,
        observation: WeatherObservation,
    ) -> RepositoryResult<()> {
        self.with_open_trip(trip_id, |trip| trip.weather_log.push(observation))
    }

    async fn close_trip(
        &self,
        trip_id: TripId,
        end_time: DateTime<FixedOffset>,
    ) -> RepositoryResult<Trip> {
        let mut trips = self.trips.write();
        let record = trips
            .get_mut(&trip_id.value())
            .ok_or_else(|| RepositoryError::not_found(format!("Trip {} not found", trip_id)))?;
        if record.trip.end_time.is_some() {
            return Err(RepositoryError::validation(format!(
                "Trip {} is already closed",
                trip_id
            )));
        }
        record.trip.end_time = Some(end_time);
        Ok(record.trip.clone())
    }

    async fn delete_trip(&self, trip_id: TripId) -> RepositoryResult<()> {
        self.trips
            .write()
            .remove(&trip_id.value())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(format!("Trip {} not found", trip_id)))
    }
}
