//! Demo fleet the store boots with.
//!
//! Stands in for the telemetry feed of a real deployment; the HTTP
//! mutation endpoints replay hardware pushes on top of this state.

use std::collections::BTreeMap;

use super::{Bus, Seat};

fn seat_bank(prefix: &str, count: usize, occupied_every: usize) -> Vec<Seat> {
    (0..count)
        .map(|i| Seat {
            id: format!("{prefix}-{}", i + 1),
            available: i % occupied_every != 0,
        })
        .collect()
}

fn eta_map(entries: &[(&str, i32)]) -> BTreeMap<String, i32> {
    entries.iter().map(|&(s, e)| (s.to_string(), e)).collect()
}

fn alighting_map(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries.iter().map(|&(s, c)| (s.to_string(), c)).collect()
}

/// The bus runs tracked at startup
pub fn demo_fleet() -> Vec<Bus> {
    vec![
        Bus {
            id: "E1-CITY".to_string(),
            route: "E1".to_string(),
            destination: "City Centre".to_string(),
            wheelchair_available: true,
            per_stop_eta: eta_map(&[
                ("stop_ucd", 4),
                ("stop_dawson", 10),
                ("stop_oconnell", 15),
            ]),
            seats: seat_bank("E1-CITY", 30, 3),
            people_getting_off: alighting_map(&[("stop_dawson", 6), ("stop_oconnell", 12)]),
        },
        Bus {
            id: "E1-UCD".to_string(),
            route: "E1".to_string(),
            destination: "UCD Campus".to_string(),
            wheelchair_available: true,
            per_stop_eta: eta_map(&[
                ("stop_oconnell", 3),
                ("stop_dawson", 8),
                ("stop_ucd", 17),
            ]),
            seats: seat_bank("E1-UCD", 30, 2),
            people_getting_off: alighting_map(&[("stop_dawson", 4), ("stop_ucd", 9)]),
        },
        Bus {
            id: "E2-NORTH".to_string(),
            route: "E2".to_string(),
            destination: "Northside".to_string(),
            wheelchair_available: false,
            per_stop_eta: eta_map(&[
                ("stop_ucd", 6),
                ("stop_dawson", 12),
                ("stop_oconnell", 18),
            ]),
            seats: seat_bank("E2-NORTH", 28, 4),
            people_getting_off: alighting_map(&[("stop_dawson", 3), ("stop_oconnell", 8)]),
        },
        Bus {
            id: "39A-ONGAR".to_string(),
            route: "39a".to_string(),
            destination: "Ongar".to_string(),
            wheelchair_available: true,
            per_stop_eta: eta_map(&[
                ("stop_dawson", 9),
                ("stop_oconnell", 13),
                ("stop_blanch", 32),
                ("stop_ongar", 40),
            ]),
            seats: seat_bank("39A-ONGAR", 40, 5),
            people_getting_off: alighting_map(&[
                ("stop_oconnell", 5),
                ("stop_blanch", 14),
                ("stop_ongar", 7),
            ]),
        },
        Bus {
            id: "39A-CITY".to_string(),
            route: "39a".to_string(),
            destination: "City Centre".to_string(),
            wheelchair_available: false,
            per_stop_eta: eta_map(&[
                ("stop_ongar", 3),
                ("stop_blanch", 10),
                ("stop_oconnell", 38),
                ("stop_dawson", 42),
            ]),
            seats: seat_bank("39A-CITY", 40, 6),
            people_getting_off: alighting_map(&[("stop_blanch", 2), ("stop_oconnell", 16)]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::network;

    #[test]
    fn test_demo_fleet_ids_are_unique() {
        let fleet = demo_fleet();
        for (i, bus) in fleet.iter().enumerate() {
            assert!(
                fleet.iter().skip(i + 1).all(|other| other.id != bus.id),
                "duplicate id {}",
                bus.id
            );
        }
    }

    #[test]
    fn test_demo_fleet_references_known_stops() {
        let known: Vec<String> = network::stops().into_iter().map(|s| s.id).collect();
        for bus in demo_fleet() {
            for stop in bus.per_stop_eta.keys().chain(bus.people_getting_off.keys()) {
                assert!(known.contains(stop), "unknown stop {stop} on {}", bus.id);
            }
        }
    }

    #[test]
    fn test_demo_fleet_has_canonical_direction_per_bus() {
        for bus in demo_fleet() {
            assert!(
                network::canonical_stops(&bus.route, &bus.destination).is_some(),
                "no canonical direction for {} to {}",
                bus.route,
                bus.destination
            );
        }
    }

    #[test]
    fn test_demo_fleet_seat_invariant() {
        for bus in demo_fleet() {
            assert!(bus.seats_available() <= bus.seats_total());
        }
    }
}
