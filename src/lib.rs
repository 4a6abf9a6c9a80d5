//! # SailLog Rust Backend
//!
//! Analytics engine for a sailing logbook system.
//!
//! This crate provides a Rust-based backend for the SailLog logbook: vessels,
//! recorded trips (GPS routes, weather observations, crew) and the statistics
//! computed over them. The heart of the crate is a pure, synchronous trip
//! analytics engine; around it sits a repository-pattern persistence seam and
//! an Axum REST API consumed by the mobile frontends.
//!
//! ## Features
//!
//! - **Trip Recording**: Store vessels and trips, append route points and
//!   weather observations while a trip is open, close trips
//! - **Geodesic Distance**: Haversine great-circle distance in nautical miles
//! - **Per-Trip Stats**: Distance, duration, average and maximum speed
//! - **Fleet Statistics**: Totals, averages, monthly and time-of-day buckets,
//!   weather condition roll-ups across a collection of trips
//! - **Beaufort & Units**: Wind force classification and unit conversion
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes, core value types and DTO re-exports
//! - [`algorithms`]: Geodesic primitives shared by the analytics services
//! - [`models`]: Domain entities (vessels, trips, units, wind)
//! - [`db`]: Database operations, repository pattern, and persistence layer
//! - [`services`]: Analytics computation and business logic
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Error Policy
//!
//! The analytics functions are total over well-typed inputs: empty routes,
//! open trips and zero durations produce zero/neutral values rather than
//! errors. Malformed numeric input (non-finite coordinates, reversed time
//! ranges, negative wind speeds) is deliberately not validated here so that a
//! single bad trip cannot abort aggregation of a whole fleet; strict checks
//! belong at the data-entry boundary.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod algorithms;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
