//! Static network data: the stop table and the canonical stop sequence
//! for each served route direction.
//!
//! Canonical sequences are fixed per route and direction; they are
//! distinct from the ETA-derived order of any individual run.

use serde::Serialize;
use utoipa::ToSchema;

/// A stop with its display name
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StopInfo {
    pub id: String,
    pub name: String,
}

/// Direction of travel along a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Northbound,
    Southbound,
}

/// Canonical ordered stop sequence for one direction of one route
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RouteDirection {
    /// Route code (e.g. "E1")
    pub route: String,
    /// Headsign destination identifying this direction
    pub destination: String,
    pub direction: Direction,
    /// Stop ids in travel order
    pub stops: Vec<String>,
}

/// All stops known to the network
pub fn stops() -> Vec<StopInfo> {
    [
        ("stop_ucd", "UCD Campus"),
        ("stop_dawson", "Dawson Street"),
        ("stop_oconnell", "O'Connell Street"),
        ("stop_blanch", "Blanchardstown SC"),
        ("stop_ongar", "Ongar"),
    ]
    .into_iter()
    .map(|(id, name)| StopInfo {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Display name for a stop id, presentation only
pub fn stop_name(id: &str) -> Option<String> {
    stops().into_iter().find(|s| s.id == id).map(|s| s.name)
}

/// Every served route direction with its canonical stop sequence
pub fn route_directions() -> Vec<RouteDirection> {
    fn dir(route: &str, destination: &str, direction: Direction, stops: &[&str]) -> RouteDirection {
        RouteDirection {
            route: route.to_string(),
            destination: destination.to_string(),
            direction,
            stops: stops.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        dir(
            "E1",
            "City Centre",
            Direction::Northbound,
            &["stop_ucd", "stop_dawson", "stop_oconnell"],
        ),
        dir(
            "E1",
            "UCD Campus",
            Direction::Southbound,
            &["stop_oconnell", "stop_dawson", "stop_ucd"],
        ),
        dir(
            "E2",
            "Northside",
            Direction::Northbound,
            &["stop_ucd", "stop_dawson", "stop_oconnell"],
        ),
        dir(
            "39a",
            "Ongar",
            Direction::Northbound,
            &["stop_dawson", "stop_oconnell", "stop_blanch", "stop_ongar"],
        ),
        dir(
            "39a",
            "City Centre",
            Direction::Southbound,
            &["stop_ongar", "stop_blanch", "stop_oconnell", "stop_dawson"],
        ),
    ]
}

/// Canonical stop sequence for a route + headsign destination
pub fn canonical_stops(route: &str, destination: &str) -> Option<Vec<String>> {
    route_directions()
        .into_iter()
        .find(|d| d.route == route && d.destination == destination)
        .map(|d| d.stops)
}
