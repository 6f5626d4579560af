use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::error::{bad_request, not_found, ApiError};
use crate::fleet::{BusSelector, Seat, SeatsUpdate};

use super::{BusUpdateResponse, BusesState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SeatsUpdateRequest {
    #[serde(flatten)]
    pub selector: BusSelector,
    /// Per-seat occupancy changes; unknown seat ids are ignored
    pub seats: Option<Vec<Seat>>,
    /// Mark every seat available or occupied
    pub set_all_available: Option<bool>,
}

impl SeatsUpdateRequest {
    /// A per-seat list wins over the whole-bus toggle when both are sent
    fn update(&self) -> Option<SeatsUpdate> {
        if let Some(seats) = &self.seats {
            return Some(SeatsUpdate::PerSeat(seats.clone()));
        }
        self.set_all_available.map(SeatsUpdate::SetAll)
    }
}

/// Update the seat occupancy of a bus
#[utoipa::path(
    post,
    path = "/api/buses/seats",
    request_body = SeatsUpdateRequest,
    responses(
        (status = 200, description = "Updated bus", body = BusUpdateResponse),
        (status = 400, description = "Bad request", body = crate::api::ErrorResponse),
        (status = 404, description = "Bus not found", body = crate::api::ErrorResponse)
    ),
    tag = "buses"
)]
pub async fn update_seats(
    State(state): State<BusesState>,
    Json(request): Json<SeatsUpdateRequest>,
) -> Result<Json<BusUpdateResponse>, ApiError> {
    if request.selector.is_empty() {
        return Err(bad_request("Either 'id' or 'route' must be provided"));
    }
    let update = request
        .update()
        .ok_or_else(|| bad_request("provide seats array or set_all_available boolean"))?;

    let updated = state
        .fleet
        .write()
        .await
        .update_seats(&request.selector, &update)
        .ok_or_else(|| not_found("Bus not found"))?;

    info!(
        bus_id = %updated.id,
        seats_available = updated.seats_available(),
        seats_total = updated.seats_total(),
        "Seat occupancy updated"
    );

    Ok(Json(BusUpdateResponse {
        ok: true,
        bus: updated.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(seats: Option<Vec<Seat>>, set_all: Option<bool>) -> SeatsUpdateRequest {
        SeatsUpdateRequest {
            selector: BusSelector::default(),
            seats,
            set_all_available: set_all,
        }
    }

    #[test]
    fn test_update_requires_one_form() {
        assert!(request(None, None).update().is_none());
        assert!(matches!(
            request(None, Some(true)).update(),
            Some(SeatsUpdate::SetAll(true))
        ));
    }

    #[test]
    fn test_per_seat_list_wins_over_toggle() {
        let seats = vec![Seat {
            id: "E1-CITY-1".to_string(),
            available: false,
        }];
        assert!(matches!(
            request(Some(seats), Some(true)).update(),
            Some(SeatsUpdate::PerSeat(_))
        ));
    }
}
