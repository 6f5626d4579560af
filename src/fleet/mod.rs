//! In-memory fleet state.
//!
//! The store owns the authoritative list of bus runs and is the only
//! mutable state in the service. Telemetry pushed through the HTTP API
//! (wheelchair space, seat occupancy, alighting requests) lands here;
//! readers always receive cloned snapshots, never references into the
//! store, so a projection can never observe a half-applied update.

pub mod network;
pub mod seed;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;

/// One physical seat as reported by the on-board occupancy sensors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Seat {
    /// Seat identifier, unique within the bus
    pub id: String,
    /// Whether the seat is currently free
    pub available: bool,
}

/// One tracked bus run
#[derive(Debug, Clone)]
pub struct Bus {
    /// Stable run identifier
    pub id: String,
    /// Route code (e.g. "E1")
    pub route: String,
    /// Final destination shown on the headsign
    pub destination: String,
    /// Whether the wheelchair space is currently free
    pub wheelchair_available: bool,
    /// Minutes until this bus reaches each known stop; non-positive
    /// values mean the stop has already been passed
    pub per_stop_eta: BTreeMap<String, i32>,
    /// Per-seat occupancy
    pub seats: Vec<Seat>,
    /// Passengers expected to get off at each stop
    pub people_getting_off: BTreeMap<String, u32>,
}

impl Bus {
    pub fn seats_total(&self) -> u32 {
        self.seats.len() as u32
    }

    pub fn seats_available(&self) -> u32 {
        self.seats.iter().filter(|s| s.available).count() as u32
    }
}

/// Lookup criteria for one bus.
///
/// An explicit id is the most specific and always wins; otherwise the
/// route is matched, narrowed by destination when one is given.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BusSelector {
    pub id: Option<String>,
    pub route: Option<String>,
    pub destination: Option<String>,
}

impl BusSelector {
    /// A selector with neither id nor route cannot match anything and is
    /// rejected at the API layer
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.route.is_none()
    }
}

/// Seat telemetry update forms accepted from the hardware
#[derive(Debug, Clone)]
pub enum SeatsUpdate {
    /// Update the listed seats; unknown seat ids are ignored
    PerSeat(Vec<Seat>),
    /// Mark every seat on the bus available or occupied
    SetAll(bool),
}

/// The authoritative bus list
#[derive(Debug, Default)]
pub struct Fleet {
    buses: Vec<Bus>,
}

impl Fleet {
    pub fn new(buses: Vec<Bus>) -> Self {
        Self { buses }
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Cloned snapshot of every tracked run
    pub fn snapshot(&self) -> Vec<Bus> {
        self.buses.clone()
    }

    /// Cloned snapshot of the first run matching the selector
    pub fn find(&self, selector: &BusSelector) -> Option<Bus> {
        self.find_index(selector).map(|i| self.buses[i].clone())
    }

    fn find_index(&self, selector: &BusSelector) -> Option<usize> {
        if let Some(id) = &selector.id {
            return self.buses.iter().position(|b| &b.id == id);
        }
        let route = selector.route.as_ref()?;
        self.buses.iter().position(|b| {
            b.route == *route
                && selector
                    .destination
                    .as_ref()
                    .is_none_or(|d| b.destination == *d)
        })
    }

    /// Set the wheelchair-space flag; returns the updated snapshot
    pub fn update_wheelchair(
        &mut self,
        selector: &BusSelector,
        available: bool,
    ) -> Option<Bus> {
        let index = self.find_index(selector)?;
        self.buses[index].wheelchair_available = available;
        Some(self.buses[index].clone())
    }

    /// Apply a seat occupancy update; returns the updated snapshot
    pub fn update_seats(&mut self, selector: &BusSelector, update: &SeatsUpdate) -> Option<Bus> {
        let index = self.find_index(selector)?;
        let bus = &mut self.buses[index];
        match update {
            SeatsUpdate::PerSeat(changes) => {
                let changed: BTreeMap<&str, bool> = changes
                    .iter()
                    .map(|s| (s.id.as_str(), s.available))
                    .collect();
                for seat in &mut bus.seats {
                    if let Some(&available) = changed.get(seat.id.as_str()) {
                        seat.available = available;
                    }
                }
            }
            SeatsUpdate::SetAll(available) => {
                for seat in &mut bus.seats {
                    seat.available = *available;
                }
            }
        }
        Some(bus.clone())
    }

    /// Register one passenger planning to get off at the stop; returns
    /// the updated snapshot
    pub fn record_alighting(&mut self, selector: &BusSelector, stop_id: &str) -> Option<Bus> {
        let index = self.find_index(selector)?;
        let bus = &mut self.buses[index];
        *bus.people_getting_off.entry(stop_id.to_string()).or_insert(0) += 1;
        Some(bus.clone())
    }
}

/// Shared handle to the fleet, cloned into every router state
pub type FleetStore = Arc<RwLock<Fleet>>;

pub fn new_store(buses: Vec<Bus>) -> FleetStore {
    Arc::new(RwLock::new(Fleet::new(buses)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(id: &str, route: &str, destination: &str) -> Bus {
        Bus {
            id: id.to_string(),
            route: route.to_string(),
            destination: destination.to_string(),
            wheelchair_available: true,
            per_stop_eta: BTreeMap::new(),
            seats: vec![
                Seat {
                    id: format!("{id}-1"),
                    available: true,
                },
                Seat {
                    id: format!("{id}-2"),
                    available: false,
                },
            ],
            people_getting_off: BTreeMap::new(),
        }
    }

    fn sample_fleet() -> Fleet {
        Fleet::new(vec![
            bus("E1-CITY", "E1", "City Centre"),
            bus("E1-UCD", "E1", "UCD Campus"),
            bus("39A-ONGAR", "39a", "Ongar"),
        ])
    }

    fn by_id(id: &str) -> BusSelector {
        BusSelector {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_find_by_id_wins_over_route() {
        let fleet = sample_fleet();
        let selector = BusSelector {
            id: Some("39A-ONGAR".to_string()),
            route: Some("E1".to_string()),
            destination: None,
        };
        assert_eq!(fleet.find(&selector).unwrap().id, "39A-ONGAR");
    }

    #[test]
    fn test_find_by_route_takes_first_match() {
        let fleet = sample_fleet();
        let selector = BusSelector {
            route: Some("E1".to_string()),
            ..Default::default()
        };
        assert_eq!(fleet.find(&selector).unwrap().id, "E1-CITY");
    }

    #[test]
    fn test_find_by_route_narrowed_by_destination() {
        let fleet = sample_fleet();
        let selector = BusSelector {
            route: Some("E1".to_string()),
            destination: Some("UCD Campus".to_string()),
            ..Default::default()
        };
        assert_eq!(fleet.find(&selector).unwrap().id, "E1-UCD");
    }

    #[test]
    fn test_find_unknown_bus() {
        let fleet = sample_fleet();
        assert!(fleet.find(&by_id("nope")).is_none());
        let selector = BusSelector {
            route: Some("E1".to_string()),
            destination: Some("Mars".to_string()),
            ..Default::default()
        };
        assert!(fleet.find(&selector).is_none());
    }

    #[test]
    fn test_update_wheelchair() {
        let mut fleet = sample_fleet();
        let updated = fleet
            .update_wheelchair(&by_id("E1-CITY"), false)
            .unwrap();
        assert!(!updated.wheelchair_available);
        // The store itself changed, not just the returned clone
        assert!(!fleet.find(&by_id("E1-CITY")).unwrap().wheelchair_available);
        assert!(fleet.update_wheelchair(&by_id("nope"), false).is_none());
    }

    #[test]
    fn test_update_seats_per_seat_ignores_unknown_ids() {
        let mut fleet = sample_fleet();
        let update = SeatsUpdate::PerSeat(vec![
            Seat {
                id: "E1-CITY-2".to_string(),
                available: true,
            },
            Seat {
                id: "no-such-seat".to_string(),
                available: false,
            },
        ]);
        let updated = fleet.update_seats(&by_id("E1-CITY"), &update).unwrap();
        assert_eq!(updated.seats_available(), 2);
        assert_eq!(updated.seats_total(), 2);
    }

    #[test]
    fn test_update_seats_set_all() {
        let mut fleet = sample_fleet();
        let updated = fleet
            .update_seats(&by_id("E1-CITY"), &SeatsUpdate::SetAll(false))
            .unwrap();
        assert_eq!(updated.seats_available(), 0);

        let updated = fleet
            .update_seats(&by_id("E1-CITY"), &SeatsUpdate::SetAll(true))
            .unwrap();
        assert_eq!(updated.seats_available(), updated.seats_total());
    }

    #[test]
    fn test_record_alighting_increments_from_absent() {
        let mut fleet = sample_fleet();
        let updated = fleet
            .record_alighting(&by_id("E1-UCD"), "stop_dawson")
            .unwrap();
        assert_eq!(updated.people_getting_off["stop_dawson"], 1);

        let updated = fleet
            .record_alighting(&by_id("E1-UCD"), "stop_dawson")
            .unwrap();
        assert_eq!(updated.people_getting_off["stop_dawson"], 2);
    }

    #[test]
    fn test_snapshots_do_not_alias_store() {
        let mut fleet = sample_fleet();
        let mut snapshot = fleet.snapshot();
        snapshot[0].wheelchair_available = false;
        assert!(fleet.find(&by_id("E1-CITY")).unwrap().wheelchair_available);
    }

    #[test]
    fn test_empty_selector_matches_nothing() {
        let fleet = sample_fleet();
        assert!(BusSelector::default().is_empty());
        assert!(fleet.find(&BusSelector::default()).is_none());
    }
}
