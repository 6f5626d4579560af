use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::error::{bad_request, not_found, ApiError};
use crate::fleet::BusSelector;

use super::{BusUpdateResponse, BusesState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AlightRequest {
    #[serde(flatten)]
    pub selector: BusSelector,
    /// Stop the passenger plans to get off at
    pub stop_id: String,
}

/// Register one passenger planning to get off at a stop
#[utoipa::path(
    post,
    path = "/api/buses/alight",
    request_body = AlightRequest,
    responses(
        (status = 200, description = "Updated bus", body = BusUpdateResponse),
        (status = 400, description = "Bad request", body = crate::api::ErrorResponse),
        (status = 404, description = "Bus not found", body = crate::api::ErrorResponse)
    ),
    tag = "buses"
)]
pub async fn record_alighting(
    State(state): State<BusesState>,
    Json(request): Json<AlightRequest>,
) -> Result<Json<BusUpdateResponse>, ApiError> {
    if request.selector.is_empty() {
        return Err(bad_request("Either 'id' or 'route' must be provided"));
    }

    let updated = state
        .fleet
        .write()
        .await
        .record_alighting(&request.selector, &request.stop_id)
        .ok_or_else(|| not_found("Bus not found"))?;

    info!(
        bus_id = %updated.id,
        stop_id = %request.stop_id,
        "Alighting request recorded"
    );

    Ok(Json(BusUpdateResponse {
        ok: true,
        bus: updated.into(),
    }))
}
