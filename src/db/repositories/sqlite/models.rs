//! Row types for the SQLite backend and their conversions to the domain
//! model.

use chrono::DateTime;
use diesel::prelude::*;

use super::schema::{trips, vessels};
use crate::api::{TripId, VesselId};
use crate::db::models::{CrewMember, RoutePoint, Trip, Vessel, WeatherObservation};
use crate::db::repository::{RepositoryError, RepositoryResult};

#[derive(Debug, Queryable)]
pub struct VesselRow {
    pub id: i64,
    pub name: String,
    pub vessel_type: String,
    pub sail_number: Option<String>,
    pub home_port: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = vessels)]
pub struct NewVesselRow<'a> {
    pub name: &'a str,
    pub vessel_type: &'a str,
    pub sail_number: Option<&'a str>,
    pub home_port: Option<&'a str>,
}

#[derive(Debug, Queryable)]
pub struct TripRow {
    pub id: i64,
    pub vessel_id: i64,
    pub name: String,
    pub checksum: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub route_json: String,
    pub weather_json: String,
    pub crew_json: String,
    pub notes: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = trips)]
pub struct NewTripRow {
    pub vessel_id: i64,
    pub name: String,
    pub checksum: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub route_json: String,
    pub weather_json: String,
    pub crew_json: String,
    pub notes: Option<String>,
}

impl From<VesselRow> for Vessel {
    fn from(row: VesselRow) -> Self {
        Vessel {
            id: Some(VesselId::new(row.id)),
            name: row.name,
            vessel_type: row.vessel_type,
            sail_number: row.sail_number,
            home_port: row.home_port,
        }
    }
}

impl TripRow {
    /// Convert a stored row back into the domain trip.
    pub fn into_trip(self) -> RepositoryResult<Trip> {
        let start_time = DateTime::parse_from_rfc3339(&self.start_time).map_err(|e| {
            RepositoryError::internal(format!("Stored start_time is not RFC 3339: {}", e))
        })?;
        let end_time = self
            .end_time
            .as_deref()
            .map(DateTime::parse_from_rfc3339)
            .transpose()
            .map_err(|e| {
                RepositoryError::internal(format!("Stored end_time is not RFC 3339: {}", e))
            })?;

        let route: Vec<RoutePoint> = serde_json::from_str(&self.route_json)
            .map_err(|e| RepositoryError::internal(format!("Corrupt route JSON: {}", e)))?;
        let weather_log: Vec<WeatherObservation> = serde_json::from_str(&self.weather_json)
            .map_err(|e| RepositoryError::internal(format!("Corrupt weather JSON: {}", e)))?;
        let crew: Vec<CrewMember> = serde_json::from_str(&self.crew_json)
            .map_err(|e| RepositoryError::internal(format!("Corrupt crew JSON: {}", e)))?;

        Ok(Trip {
            id: Some(TripId::new(self.id)),
            vessel_id: VesselId::new(self.vessel_id),
            name: self.name,
            start_time,
            end_time,
            route,
            weather_log,
            crew,
            notes: self.notes,
        })
    }
}

impl NewTripRow {
    /// Serialize a domain trip for insertion.
    pub fn from_trip(trip: &Trip, checksum: &str) -> RepositoryResult<Self> {
        let route_json = serde_json::to_string(&trip.route)
            .map_err(|e| RepositoryError::internal(format!("Serialize route failed: {}", e)))?;
        let weather_json = serde_json::to_string(&trip.weather_log)
            .map_err(|e| RepositoryError::internal(format!("Serialize weather failed: {}", e)))?;
        let crew_json = serde_json::to_string(&trip.crew)
            .map_err(|e| RepositoryError::internal(format!("Serialize crew failed: {}", e)))?;

        Ok(NewTripRow {
            vessel_id: trip.vessel_id.value(),
            name: trip.name.clone(),
            checksum: checksum.to_string(),
            start_time: trip.start_time.to_rfc3339(),
            end_time: trip.end_time.map(|t| t.to_rfc3339()),
            route_json,
            weather_json,
            crew_json,
            notes: trip.notes.clone(),
        })
    }
}
