use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::fleet::network::{self, RouteDirection};

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteDirectionListResponse {
    pub directions: Vec<RouteDirection>,
    pub total_count: usize,
}

/// List every served route direction with its canonical stop sequence
#[utoipa::path(
    get,
    path = "/api/routes",
    responses(
        (
            status = 200,
            description = "Canonical stop sequences per route direction",
            body = RouteDirectionListResponse
        )
    ),
    tag = "routes"
)]
pub async fn list_route_directions() -> Json<RouteDirectionListResponse> {
    let directions = network::route_directions();
    let total_count = directions.len();
    Json(RouteDirectionListResponse {
        directions,
        total_count,
    })
}
