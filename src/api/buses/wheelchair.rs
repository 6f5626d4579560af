use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::error::{bad_request, not_found, ApiError};
use crate::fleet::BusSelector;

use super::{BusUpdateResponse, BusesState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct WheelchairUpdateRequest {
    #[serde(flatten)]
    pub selector: BusSelector,
    /// New state of the wheelchair space
    pub wheelchair_available: bool,
}

/// Update the wheelchair-space availability of a bus
#[utoipa::path(
    post,
    path = "/api/buses/wheelchair",
    request_body = WheelchairUpdateRequest,
    responses(
        (status = 200, description = "Updated bus", body = BusUpdateResponse),
        (status = 400, description = "Bad request", body = crate::api::ErrorResponse),
        (status = 404, description = "Bus not found", body = crate::api::ErrorResponse)
    ),
    tag = "buses"
)]
pub async fn update_wheelchair(
    State(state): State<BusesState>,
    Json(request): Json<WheelchairUpdateRequest>,
) -> Result<Json<BusUpdateResponse>, ApiError> {
    if request.selector.is_empty() {
        return Err(bad_request("Either 'id' or 'route' must be provided"));
    }

    let updated = state
        .fleet
        .write()
        .await
        .update_wheelchair(&request.selector, request.wheelchair_available)
        .ok_or_else(|| not_found("Bus not found"))?;

    info!(
        bus_id = %updated.id,
        available = request.wheelchair_available,
        "Wheelchair space updated"
    );

    Ok(Json(BusUpdateResponse {
        ok: true,
        bus: updated.into(),
    }))
}
