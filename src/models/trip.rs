//! Domain entities for the logbook: vessels, trips, route points, weather
//! observations and crew.
//!
//! Timestamps are `DateTime<FixedOffset>` (RFC 3339 on the wire) so that the
//! local clock offset recorded on the device is preserved. Time-of-day
//! statistics bucket by the hour as it was recorded, not by UTC.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::api::{CrewMemberId, GeoPoint, TripId, VesselId};

/// A registered vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vessel {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<VesselId>,
    /// Display name
    pub name: String,
    /// Free-form vessel type ("sloop", "catamaran", ...)
    #[serde(default)]
    pub vessel_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sail_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_port: Option<String>,
}

impl Vessel {
    pub fn new(name: String, vessel_type: String) -> Self {
        Self {
            id: None,
            name,
            vessel_type,
            sail_number: None,
            home_port: None,
        }
    }
}

/// A crew member listed on a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub id: Option<CrewMemberId>,
    pub name: String,
    /// Role on board ("skipper", "trimmer", ...)
    #[serde(default)]
    pub role: String,
}

/// A single GPS fix recorded during a trip.
///
/// Route points form an ordered, append-only sequence while the trip is open
/// and are immutable once the trip ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoutePoint {
    #[serde(flatten)]
    pub position: GeoPoint,
    pub timestamp: DateTime<FixedOffset>,
    /// Speed over ground in knots, when the fix carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_knots: Option<f64>,
    /// Heading in degrees [0, 360), when the fix carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<f64>,
}

impl RoutePoint {
    pub fn new(position: GeoPoint, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            position,
            timestamp,
            speed_knots: None,
            heading_deg: None,
        }
    }

    pub fn with_speed(mut self, speed_knots: f64) -> Self {
        self.speed_knots = Some(speed_knots);
        self
    }

    pub fn with_heading(mut self, heading_deg: f64) -> Self {
        self.heading_deg = Some(heading_deg);
        self
    }
}

/// A weather observation logged during a trip.
///
/// Callers do not guarantee chronological order; consumers must not rely on
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub timestamp: DateTime<FixedOffset>,
    pub temperature_c: f64,
    pub wind_speed_knots: f64,
    pub wind_direction_deg: f64,
    pub pressure_hpa: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A recorded sailing trip.
///
/// Lifecycle: created at trip start (typically with a single initial route
/// point and observation), appended to while open, closed by setting
/// `end_time`, immutable thereafter. The analytics services only read trips;
/// mutation goes through the repository layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Database ID (optional on input, server-assigned)
    #[serde(default)]
    pub id: Option<TripId>,
    pub vessel_id: VesselId,
    #[serde(default)]
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    /// `None` while the trip is still in progress
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub route: Vec<RoutePoint>,
    #[serde(default)]
    pub weather_log: Vec<WeatherObservation>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trip {
    /// Create an open trip with an empty route and weather log.
    pub fn new(vessel_id: VesselId, name: String, start_time: DateTime<FixedOffset>) -> Self {
        Self {
            id: None,
            vessel_id,
            name,
            start_time,
            end_time: None,
            route: Vec::new(),
            weather_log: Vec::new(),
            crew: Vec::new(),
            notes: None,
        }
    }

    /// Whether the trip is still being recorded.
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}
