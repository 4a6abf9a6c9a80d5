//! SQLite repository implementation with Diesel ORM.
//!
//! The schema is created on first connect; no migration tooling is involved.
//! All Diesel calls are synchronous and run on the blocking thread pool.

pub mod models;
pub mod schema;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

use crate::api::{TripId, VesselId};
use crate::db::models::{RoutePoint, Trip, Vessel, WeatherObservation};
use crate::db::repository::{
    RepositoryError, RepositoryResult, TripRepository, VesselRepository,
};

use models::{NewTripRow, NewVesselRow, TripRow, VesselRow};
use schema::{trips, vessels};

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// SQLite connection configuration.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub database_url: String,
    pub max_pool_size: u32,
    pub connection_timeout_sec: u64,
}

impl SqliteConfig {
    /// Build a configuration from environment variables.
    ///
    /// `DATABASE_URL` is required (a file path or `:memory:`); pool settings
    /// fall back to defaults.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set for the SQLite repository".to_string())?;
        let max_pool_size = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let connection_timeout_sec = std::env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            max_pool_size,
            connection_timeout_sec,
        })
    }
}

/// SQLite-backed repository.
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Connect to the database, creating the schema if needed.
    pub fn new(config: SqliteConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(&config.database_url);
        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .build(manager)?;

        let mut conn = pool.get()?;
        create_schema(&mut conn)?;

        log::info!("SQLite repository ready at {}", config.database_url);
        Ok(Self { pool })
    }

    fn load_trip_row(conn: &mut SqliteConnection, trip_id: TripId) -> RepositoryResult<TripRow> {
        trips::table
            .find(trip_id.value())
            .first::<TripRow>(conn)
            .optional()?
            .ok_or_else(|| RepositoryError::not_found(format!("Trip {} not found", trip_id)))
    }
}

fn create_schema(conn: &mut SqliteConnection) -> RepositoryResult<()> {
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS vessels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            vessel_type TEXT NOT NULL,
            sail_number TEXT,
            home_port TEXT
        )",
    )
    .execute(conn)?;

    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS trips (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vessel_id INTEGER NOT NULL REFERENCES vessels(id),
            name TEXT NOT NULL,
            checksum TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT,
            route_json TEXT NOT NULL,
            weather_json TEXT NOT NULL,
            crew_json TEXT NOT NULL,
            notes TEXT
        )",
    )
    .execute(conn)?;

    diesel::sql_query("CREATE INDEX IF NOT EXISTS idx_trips_checksum ON trips (checksum)")
        .execute(conn)?;
    diesel::sql_query("CREATE INDEX IF NOT EXISTS idx_trips_vessel ON trips (vessel_id)")
        .execute(conn)?;

    Ok(())
}

#[async_trait]
impl VesselRepository for SqliteRepository {
    async fn store_vessel(&self, vessel: &Vessel) -> RepositoryResult<VesselId> {
        let pool = self.pool.clone();
        let vessel = vessel.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<VesselId> {
            let mut conn = pool.get()?;
            let id: i64 = diesel::insert_into(vessels::table)
                .values(NewVesselRow {
                    name: &vessel.name,
                    vessel_type: &vessel.vessel_type,
                    sail_number: vessel.sail_number.as_deref(),
                    home_port: vessel.home_port.as_deref(),
                })
                .returning(vessels::id)
                .get_result(&mut conn)?;
            Ok(VesselId::new(id))
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn fetch_vessel(&self, vessel_id: VesselId) -> RepositoryResult<Vessel> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<Vessel> {
            let mut conn = pool.get()?;
            let row = vessels::table
                .find(vessel_id.value())
                .first::<VesselRow>(&mut conn)
                .optional()?
                .ok_or_else(|| {
                    RepositoryError::not_found(format!("Vessel {} not found", vessel_id))
                })?;
            Ok(row.into())
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn list_vessels(&self) -> RepositoryResult<Vec<Vessel>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<Vec<Vessel>> {
            let mut conn = pool.get()?;
            let rows = vessels::table
                .order(vessels::id.asc())
                .load::<VesselRow>(&mut conn)?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<bool> {
            let mut conn = pool.get()?;
            diesel::sql_query("SELECT 1").execute(&mut conn)?;
            Ok(true)
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }
}

#[async_trait]
impl TripRepository for SqliteRepository {
    async fn store_trip(&self, trip: &Trip, checksum: &str) -> RepositoryResult<TripId> {
        let pool = self.pool.clone();
        let trip = trip.clone();
        let checksum = checksum.to_string();
        tokio::task::spawn_blocking(move || -> RepositoryResult<TripId> {
            let mut conn = pool.get()?;

            let vessel_exists = vessels::table
                .find(trip.vessel_id.value())
                .first::<VesselRow>(&mut conn)
                .optional()?
                .is_some();
            if !vessel_exists {
                return Err(RepositoryError::not_found(format!(
                    "Vessel {} not found",
                    trip.vessel_id
                )));
            }

            let new_row = NewTripRow::from_trip(&trip, &checksum)?;
            let id: i64 = diesel::insert_into(trips::table)
                .values(new_row)
                .returning(trips::id)
                .get_result(&mut conn)?;
            Ok(TripId::new(id))
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn fetch_trip(&self, trip_id: TripId) -> RepositoryResult<Trip> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<Trip> {
            let mut conn = pool.get()?;
            Self::load_trip_row(&mut conn, trip_id)?.into_trip()
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn fetch_trips_for_vessel(&self, vessel_id: VesselId) -> RepositoryResult<Vec<Trip>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<Vec<Trip>> {
            let mut conn = pool.get()?;
            let rows = trips::table
                .filter(trips::vessel_id.eq(vessel_id.value()))
                .order(trips::id.asc())
                .load::<TripRow>(&mut conn)?;
            rows.into_iter().map(|row| row.into_trip()).collect()
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn fetch_all_trips(&self) -> RepositoryResult<Vec<Trip>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<Vec<Trip>> {
            let mut conn = pool.get()?;
            let rows = trips::table
                .order(trips::id.asc())
                .load::<TripRow>(&mut conn)?;
            rows.into_iter().map(|row| row.into_trip()).collect()
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn find_trip_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<TripId>> {
        let pool = self.pool.clone();
        let checksum = checksum.to_string();
        tokio::task::spawn_blocking(move || -> RepositoryResult<Option<TripId>> {
            let mut conn = pool.get()?;
            let id = trips::table
                .filter(trips::checksum.eq(&checksum))
                .order(trips::id.asc())
                .select(trips::id)
                .first::<i64>(&mut conn)
                .optional()?;
            Ok(id.map(TripId::new))
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn append_route_point(
        &self,
        trip_id: TripId,
        point: RoutePoint,
    ) -> RepositoryResult<()> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<()> {
            let mut conn = pool.get()?;
            let row = Self::load_trip_row(&mut conn, trip_id)?;
            if row.end_time.is_some() {
                return Err(RepositoryError::validation(format!(
                    "Trip {} is closed and cannot be modified",
                    trip_id
                )));
            }

            let mut route: Vec<RoutePoint> = serde_json::from_str(&row.route_json)
                .map_err(|e| RepositoryError::internal(format!("Corrupt route JSON: {}", e)))?;
            route.push(point);
            let route_json = serde_json::to_string(&route)
                .map_err(|e| RepositoryError::internal(format!("Serialize route failed: {}", e)))?;

            diesel::update(trips::table.find(trip_id.value()))
                .set(trips::route_json.eq(route_json))
                .execute(&mut conn)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn append_weather_observation(
        &self,
        trip_id: TripId,
        observation: WeatherObservation,
    ) -> RepositoryResult<()> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<()> {
            let mut conn = pool.get()?;
            let row = Self::load_trip_row(&mut conn, trip_id)?;
            if row.end_time.is_some() {
                return Err(RepositoryError::validation(format!(
                    "Trip {} is closed and cannot be modified",
                    trip_id
                )));
            }

            let mut weather: Vec<WeatherObservation> = serde_json::from_str(&row.weather_json)
                .map_err(|e| RepositoryError::internal(format!("Corrupt weather JSON: {}", e)))?;
            weather.push(observation);
            let weather_json = serde_json::to_string(&weather).map_err(|e| {
                RepositoryError::internal(format!("Serialize weather failed: {}", e))
            })?;

            diesel::update(trips::table.find(trip_id.value()))
                .set(trips::weather_json.eq(weather_json))
                .execute(&mut conn)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn close_trip(
        &self,
        trip_id: TripId,
        end_time: DateTime<FixedOffset>,
    ) -> RepositoryResult<Trip> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<Trip> {
            let mut conn = pool.get()?;
            let row = Self::load_trip_row(&mut conn, trip_id)?;
            if row.end_time.is_some() {
                return Err(RepositoryError::validation(format!(
                    "Trip {} is already closed",
                    trip_id
                )));
            }

            diesel::update(trips::table.find(trip_id.value()))
                .set(trips::end_time.eq(end_time.to_rfc3339()))
                .execute(&mut conn)?;

            Self::load_trip_row(&mut conn, trip_id)?.into_trip()
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }

    async fn delete_trip(&self, trip_id: TripId) -> RepositoryResult<()> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> RepositoryResult<()> {
            let mut conn = pool.get()?;
            let deleted = diesel::delete(trips::table.find(trip_id.value())).execute(&mut conn)?;
            if deleted == 0 {
                return Err(RepositoryError::not_found(format!(
                    "Trip {} not found",
                    trip_id
                )));
            }
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("Blocking task join error: {}", e)))?
    }
}
