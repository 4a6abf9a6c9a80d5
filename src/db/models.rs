//! Shared data models re-exported for database layer consumers.

pub use crate::api::{
    DistributionData, DistributionStats, SailingStats, TripInfo, TripStats, TripSummary,
    VesselInfo,
};
pub use crate::models::{CrewMember, RoutePoint, Trip, Vessel, WeatherObservation};
