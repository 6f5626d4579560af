use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::fleet::{network, FleetStore};

#[derive(Clone)]
pub struct HealthState {
    pub fleet: FleetStore,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service is running
    pub healthy: bool,
    /// Number of bus runs currently tracked
    pub bus_count: usize,
    /// Number of stops in the static network
    pub stop_count: usize,
    /// Number of canonical route directions
    pub route_direction_count: usize,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    let bus_count = state.fleet.read().await.bus_count();

    Json(HealthResponse {
        healthy: true,
        bus_count,
        stop_count: network::stops().len(),
        route_direction_count: network::route_directions().len(),
    })
}

pub fn router(fleet: FleetStore) -> Router {
    let state = HealthState { fleet };
    Router::new().route("/", get(health_check)).with_state(state)
}
