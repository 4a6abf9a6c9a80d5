//! Service layer for analytics computation and business logic.
//!
//! The analytics services are pure functions over fully-materialized trip
//! collections: they never reach into storage themselves and never mutate
//! their inputs. Orchestration that needs the repository lives in
//! [`crate::db::services`].

pub mod conversions;

pub mod distributions;

pub mod statistics;

pub mod trip_stats;

pub use conversions::convert_units;
pub use distributions::compute_distribution_data;
pub use statistics::aggregate_trips;
pub use trip_stats::{compute_trip_stats, route_distance_nm};
