//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Vessel registry
        .route("/vessels", get(handlers::list_vessels))
        .route("/vessels", post(handlers::create_vessel))
        .route("/vessels/{vessel_id}/trips", get(handlers::list_trips))
        // Trip recording
        .route("/trips", post(handlers::create_trip))
        .route("/trips/{trip_id}", get(handlers::get_trip))
        .route("/trips/{trip_id}/stats", get(handlers::get_trip_stats))
        .route("/trips/{trip_id}/route", post(handlers::append_route_point))
        .route("/trips/{trip_id}/weather", post(handlers::append_weather_observation))
        .route("/trips/{trip_id}/close", post(handlers::close_trip))
        // Statistics endpoints
        .route("/statistics", get(handlers::get_fleet_statistics))
        .route("/vessels/{vessel_id}/statistics", get(handlers::get_vessel_statistics))
        .route("/vessels/{vessel_id}/distributions", get(handlers::get_distributions))
        // Unit conversion
        .route("/conversions", get(handlers::get_conversion));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Allow large route uploads from long trips.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
