pub mod buses;
pub mod error;
pub mod health;
pub mod routes;
pub mod stops;

pub use error::ErrorResponse;

use axum::Router;

use crate::fleet::FleetStore;

pub fn router(fleet: FleetStore) -> Router {
    Router::new()
        .nest("/buses", buses::router(fleet.clone()))
        .nest("/stops", stops::router())
        .nest("/routes", routes::router())
        .nest("/health", health::router(fleet))
}
