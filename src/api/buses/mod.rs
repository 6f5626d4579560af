mod alight;
mod arrivals;
mod list;
mod projection;
mod seats;
mod wheelchair;

pub use alight::*;
pub use arrivals::*;
pub use list::*;
pub use projection::*;
pub use seats::*;
pub use wheelchair::*;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::fleet::FleetStore;

#[derive(Clone)]
pub struct BusesState {
    pub fleet: FleetStore,
}

/// Acknowledgement returned by every telemetry mutation
#[derive(Debug, Serialize, ToSchema)]
pub struct BusUpdateResponse {
    pub ok: bool,
    /// The bus after the update was applied
    pub bus: BusSnapshot,
}

pub fn router(fleet: FleetStore) -> Router {
    let state = BusesState { fleet };
    Router::new()
        .route("/", get(list_buses))
        .route("/by-stop", post(get_arrivals_by_stop))
        .route("/projection", post(get_stop_projection))
        .route("/wheelchair", post(update_wheelchair))
        .route("/seats", post(update_seats))
        .route("/alight", post(record_alighting))
        .with_state(state)
}
