use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::fleet::{Bus, Seat};

use super::BusesState;

/// One bus run with its derived seat counts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BusSnapshot {
    /// Stable run identifier
    pub id: String,
    /// Route code (e.g. "E1")
    pub route: String,
    /// Final destination shown on the headsign
    pub destination: String,
    /// Whether the wheelchair space is currently free
    pub wheelchair_available: bool,
    /// Minutes until this bus reaches each known stop
    pub per_stop_eta: BTreeMap<String, i32>,
    /// Per-seat occupancy as last reported
    pub seats: Vec<Seat>,
    /// Seats currently free
    pub seats_available: u32,
    /// Seats installed on the bus
    pub seats_total: u32,
    /// Passengers expected to get off at each stop
    pub people_getting_off: BTreeMap<String, u32>,
}

impl From<Bus> for BusSnapshot {
    fn from(bus: Bus) -> Self {
        let seats_available = bus.seats_available();
        let seats_total = bus.seats_total();
        Self {
            id: bus.id,
            route: bus.route,
            destination: bus.destination,
            wheelchair_available: bus.wheelchair_available,
            per_stop_eta: bus.per_stop_eta,
            seats: bus.seats,
            seats_available,
            seats_total,
            people_getting_off: bus.people_getting_off,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BusListResponse {
    pub buses: Vec<BusSnapshot>,
    pub total_count: usize,
    /// Timestamp when this list was generated
    pub timestamp: String,
}

/// List every tracked bus run
#[utoipa::path(
    get,
    path = "/api/buses",
    responses(
        (status = 200, description = "All tracked bus runs", body = BusListResponse)
    ),
    tag = "buses"
)]
pub async fn list_buses(State(state): State<BusesState>) -> Json<BusListResponse> {
    let buses: Vec<BusSnapshot> = {
        let fleet = state.fleet.read().await;
        fleet.snapshot().into_iter().map(BusSnapshot::from).collect()
    };

    Json(BusListResponse {
        total_count: buses.len(),
        buses,
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::seed;

    #[test]
    fn test_snapshot_derives_seat_counts() {
        for bus in seed::demo_fleet() {
            let expected_available = bus.seats_available();
            let expected_total = bus.seats_total();
            let snapshot = BusSnapshot::from(bus);
            assert_eq!(snapshot.seats_available, expected_available);
            assert_eq!(snapshot.seats_total, expected_total);
            assert!(snapshot.seats_available <= snapshot.seats_total);
        }
    }

    #[test]
    fn test_snapshot_serializes_expected_fields() {
        let bus = seed::demo_fleet().remove(0);
        let value = serde_json::to_value(BusSnapshot::from(bus)).unwrap();

        let object = value.as_object().unwrap();
        for field in [
            "id",
            "route",
            "destination",
            "wheelchair_available",
            "per_stop_eta",
            "seats",
            "seats_available",
            "seats_total",
            "people_getting_off",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }
}
