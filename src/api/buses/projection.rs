use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::{bad_request, not_found, ApiError};
use crate::fleet::{network, BusSelector};
use crate::projection::{project_stops, resolve_stop_order};

use super::BusesState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct StopProjectionRequest {
    #[serde(flatten)]
    pub selector: BusSelector,
    /// Stop the rider plans to board or alight at
    pub stop_id: String,
}

/// Projected occupancy for one upcoming stop, with its display name
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectedStop {
    pub stop_id: String,
    pub stop_name: Option<String>,
    /// Minutes until the bus reaches this stop
    pub eta_minutes: i32,
    /// Seats expected to be free when the bus arrives here
    pub seats_free: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StopProjectionResponse {
    pub bus_id: String,
    pub route: String,
    pub destination: String,
    /// The stop the projection is relative to
    pub stop_id: String,
    /// Seats free right now
    pub seats_available: u32,
    /// Upcoming stops, soonest first
    pub upcoming: Vec<ProjectedStop>,
    /// Passengers getting off before the selected stop along the
    /// canonical direction sequence
    pub alighting_before: u32,
}

/// Project seat occupancy for one bus run against a selected stop
#[utoipa::path(
    post,
    path = "/api/buses/projection",
    request_body = StopProjectionRequest,
    responses(
        (status = 200, description = "Per-stop occupancy projection", body = StopProjectionResponse),
        (status = 400, description = "Bad request", body = crate::api::ErrorResponse),
        (status = 404, description = "Bus not found", body = crate::api::ErrorResponse)
    ),
    tag = "buses"
)]
pub async fn get_stop_projection(
    State(state): State<BusesState>,
    Json(request): Json<StopProjectionRequest>,
) -> Result<Json<StopProjectionResponse>, ApiError> {
    if request.selector.is_empty() {
        return Err(bad_request("Either 'id' or 'route' must be provided"));
    }

    let bus = state
        .fleet
        .read()
        .await
        .find(&request.selector)
        .ok_or_else(|| not_found("Bus not found"))?;

    let stop_order = resolve_stop_order(&bus.per_stop_eta);
    let canonical = network::canonical_stops(&bus.route, &bus.destination).unwrap_or_default();
    let seats_available = bus.seats_available();

    let projections = project_stops(
        &stop_order,
        &request.stop_id,
        &bus.people_getting_off,
        seats_available,
        &bus.per_stop_eta,
        &canonical,
    );

    let upcoming = projections
        .upcoming
        .into_iter()
        .map(|p| ProjectedStop {
            stop_name: network::stop_name(&p.stop_id),
            stop_id: p.stop_id,
            eta_minutes: p.eta_minutes,
            seats_free: p.seats_free,
        })
        .collect();

    Ok(Json(StopProjectionResponse {
        bus_id: bus.id,
        route: bus.route,
        destination: bus.destination,
        stop_id: request.stop_id,
        seats_available,
        upcoming,
        alighting_before: projections.alighting_before,
    }))
}
