mod list;

pub use list::*;

use axum::{routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(list_route_directions))
}
