//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    CloseTripRequest, ConversionQuery, CreateTripResponse, CreateVesselRequest,
    CreateVesselResponse, HealthResponse, TripListResponse, VesselListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ConversionKind, ConversionResult, TripId, VesselId};
use crate::db::services as db_services;
use crate::models::{RoutePoint, Trip, Vessel, WeatherObservation};
use crate::services::convert_units;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Vessel Registry
// =============================================================================

/// GET /v1/vessels
///
/// List all registered vessels.
pub async fn list_vessels(State(state): State<AppState>) -> HandlerResult<VesselListResponse> {
    let vessels = db_services::list_vessels(state.repository.as_ref()).await?;
    let total = vessels.len();

    Ok(Json(VesselListResponse { vessels, total }))
}

/// POST /v1/vessels
///
/// Register a new vessel.
pub async fn create_vessel(
    State(state): State<AppState>,
    Json(request): Json<CreateVesselRequest>,
) -> Result<(axum::http::StatusCode, Json<CreateVesselResponse>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("Vessel name must not be empty".to_string()));
    }

    let mut vessel = Vessel::new(request.name, request.vessel_type);
    vessel.sail_number = request.sail_number;
    vessel.home_port = request.home_port;

    let vessel_id = db_services::store_vessel(state.repository.as_ref(), &vessel).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(CreateVesselResponse {
            vessel_id: vessel_id.value(),
            message: format!("Vessel registered as {}", vessel_id),
        }),
    ))
}

/// GET /v1/vessels/{vessel_id}/trips
///
/// List trip summaries for one vessel.
pub async fn list_trips(
    State(state): State<AppState>,
    Path(vessel_id): Path<i64>,
) -> HandlerResult<TripListResponse> {
    let vessel_id = VesselId::new(vessel_id);
    let trips = db_services::list_trips(state.repository.as_ref(), vessel_id).await?;
    let total = trips.len();

    Ok(Json(TripListResponse { trips, total }))
}

// =============================================================================
// Trip Recording
// =============================================================================

/// POST /v1/trips
///
/// Record a trip (completed or still in progress). Duplicate payloads are
/// detected by checksum and rejected.
pub async fn create_trip(
    State(state): State<AppState>,
    Json(trip): Json<Trip>,
) -> Result<(axum::http::StatusCode, Json<CreateTripResponse>), AppError> {
    let trip_id = db_services::store_trip(state.repository.as_ref(), &trip).await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(CreateTripResponse {
            trip_id: trip_id.value(),
            message: format!("Trip stored as {}", trip_id),
        }),
    ))
}

/// GET /v1/trips/{trip_id}
///
/// Fetch one trip with its full route, weather log and crew.
pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i64>,
) -> HandlerResult<Trip> {
    let trip_id = TripId::new(trip_id);
    let trip = db_services::get_trip(state.repository.as_ref(), trip_id).await?;
    Ok(Json(trip))
}

/// GET /v1/trips/{trip_id}/stats
///
/// Per-trip stats summary.
pub async fn get_trip_stats(
    State(state): State<AppState>,
    Path(trip_id): Path<i64>,
) -> HandlerResult<crate::api::TripSummary> {
    let trip_id = TripId::new(trip_id);
    let summary = db_services::trip_summary(state.repository.as_ref(), trip_id).await?;
    Ok(Json(summary))
}

/// POST /v1/trips/{trip_id}/route
///
/// Append a GPS fix to an open trip.
pub async fn append_route_point(
    State(state): State<AppState>,
    Path(trip_id): Path<i64>,
    Json(point): Json<RoutePoint>,
) -> Result<axum::http::StatusCode, AppError> {
    let trip_id = TripId::new(trip_id);
    db_services::record_route_point(state.repository.as_ref(), trip_id, point).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// POST /v1/trips/{trip_id}/weather
///
/// Append a weather observation to an open trip.
pub async fn append_weather_observation(
    State(state): State<AppState>,
    Path(trip_id): Path<i64>,
    Json(observation): Json<WeatherObservation>,
) -> Result<axum::http::StatusCode, AppError> {
    let trip_id = TripId::new(trip_id);
    db_services::record_weather_observation(state.repository.as_ref(), trip_id, observation)
        .await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// POST /v1/trips/{trip_id}/close
///
/// Close an open trip and return it.
pub async fn close_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<i64>,
    Json(request): Json<CloseTripRequest>,
) -> HandlerResult<Trip> {
    let trip_id = TripId::new(trip_id);
    let trip =
        db_services::close_trip(state.repository.as_ref(), trip_id, request.end_time).await?;
    Ok(Json(trip))
}

// =============================================================================
// Statistics Endpoints
// =============================================================================

/// GET /v1/vessels/{vessel_id}/statistics
///
/// Aggregate sailing statistics for one vessel.
pub async fn get_vessel_statistics(
    State(state): State<AppState>,
    Path(vessel_id): Path<i64>,
) -> HandlerResult<crate::api::SailingStats> {
    let vessel_id = VesselId::new(vessel_id);
    let stats = db_services::vessel_statistics(state.repository.as_ref(), vessel_id).await?;
    Ok(Json(stats))
}

/// GET /v1/statistics
///
/// Aggregate sailing statistics across the whole fleet.
pub async fn get_fleet_statistics(
    State(state): State<AppState>,
) -> HandlerResult<crate::api::SailingStats> {
    let stats = db_services::fleet_statistics(state.repository.as_ref()).await?;
    Ok(Json(stats))
}

/// GET /v1/vessels/{vessel_id}/distributions
///
/// Distribution chart data for one vessel.
pub async fn get_distributions(
    State(state): State<AppState>,
    Path(vessel_id): Path<i64>,
) -> HandlerResult<crate::api::DistributionData> {
    let vessel_id = VesselId::new(vessel_id);
    let data = db_services::vessel_distributions(state.repository.as_ref(), vessel_id).await?;
    Ok(Json(data))
}

// =============================================================================
// Unit Conversion
// =============================================================================

/// GET /v1/conversions
///
/// Convert a value between display units. The response carries both the
/// numeric value and the formatted label; this is the only endpoint that
/// returns formatted strings.
pub async fn get_conversion(
    Query(query): Query<ConversionQuery>,
) -> HandlerResult<ConversionResult> {
    let kind: ConversionKind = query
        .kind
        .parse()
        .map_err(AppError::BadRequest)?;
    let result = convert_units(kind, &query.from, &query.to, query.value)
        .map_err(AppError::BadRequest)?;
    Ok(Json(result))
}
