use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::fleet::network::{self, StopInfo};

#[derive(Debug, Serialize, ToSchema)]
pub struct StopListResponse {
    pub stops: Vec<StopInfo>,
    pub total_count: usize,
}

/// List all stops with their display names
#[utoipa::path(
    get,
    path = "/api/stops",
    responses(
        (status = 200, description = "All stops in the network", body = StopListResponse)
    ),
    tag = "stops"
)]
pub async fn list_stops() -> Json<StopListResponse> {
    let stops = network::stops();
    let total_count = stops.len();
    Json(StopListResponse { stops, total_count })
}
