use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::fleet::{network, Bus};

use super::BusesState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct StopArrivalsRequest {
    /// Stop to list arrivals for
    pub stop_id: String,
}

/// One bus heading for the requested stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Arrival {
    pub bus_id: String,
    pub route: String,
    pub destination: String,
    /// Minutes until this bus reaches the requested stop
    pub eta_minutes: i32,
    pub wheelchair_available: bool,
    pub seats_available: u32,
    pub seats_total: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StopArrivalsResponse {
    pub stop_id: String,
    /// Display name, when the stop is part of the static network
    pub stop_name: Option<String>,
    /// Buses serving the stop, soonest first
    pub arrivals: Vec<Arrival>,
    pub timestamp: String,
}

/// Buses with an ETA for the stop, soonest first. Runs that do not serve
/// the stop are omitted.
fn arrivals_for_stop(buses: &[Bus], stop_id: &str) -> Vec<Arrival> {
    let mut arrivals: Vec<Arrival> = buses
        .iter()
        .filter_map(|bus| {
            let eta_minutes = *bus.per_stop_eta.get(stop_id)?;
            Some(Arrival {
                bus_id: bus.id.clone(),
                route: bus.route.clone(),
                destination: bus.destination.clone(),
                eta_minutes,
                wheelchair_available: bus.wheelchair_available,
                seats_available: bus.seats_available(),
                seats_total: bus.seats_total(),
            })
        })
        .collect();
    arrivals.sort_by_key(|a| a.eta_minutes);
    arrivals
}

/// List buses arriving at a stop
#[utoipa::path(
    post,
    path = "/api/buses/by-stop",
    request_body = StopArrivalsRequest,
    responses(
        (status = 200, description = "Arrivals for the stop", body = StopArrivalsResponse)
    ),
    tag = "buses"
)]
pub async fn get_arrivals_by_stop(
    State(state): State<BusesState>,
    Json(request): Json<StopArrivalsRequest>,
) -> Json<StopArrivalsResponse> {
    let buses = state.fleet.read().await.snapshot();
    let arrivals = arrivals_for_stop(&buses, &request.stop_id);

    Json(StopArrivalsResponse {
        stop_name: network::stop_name(&request.stop_id),
        stop_id: request.stop_id,
        arrivals,
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::seed;

    #[test]
    fn test_arrivals_sorted_soonest_first() {
        let buses = seed::demo_fleet();
        let arrivals = arrivals_for_stop(&buses, "stop_oconnell");

        assert!(!arrivals.is_empty());
        for pair in arrivals.windows(2) {
            assert!(pair[0].eta_minutes <= pair[1].eta_minutes);
        }
    }

    #[test]
    fn test_arrivals_omit_buses_not_serving_stop() {
        let buses = seed::demo_fleet();
        let arrivals = arrivals_for_stop(&buses, "stop_ongar");

        // Only the 39a runs serve Ongar
        assert!(arrivals.iter().all(|a| a.route == "39a"));
        assert_eq!(arrivals.len(), 2);
    }

    #[test]
    fn test_arrivals_for_unknown_stop_empty() {
        let buses = seed::demo_fleet();
        assert!(arrivals_for_stop(&buses, "stop_unknown").is_empty());
    }
}
