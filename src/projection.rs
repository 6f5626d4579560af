//! Derived per-stop statistics for a single bus run.
//!
//! Everything here is a pure function over a snapshot of one bus:
//! - the stop order a bus visits, derived from its per-stop ETA map
//! - projected free seats at every upcoming stop, relative to a stop the
//!   rider selected
//! - cumulative passengers alighting before the selected stop along a
//!   route direction's canonical stop sequence
//!
//! The functions never fail: absent ETAs exclude a stop from the
//! projection, absent alighting counts are treated as zero, and an
//! unknown selected stop yields a zero cumulative total.

use std::collections::BTreeMap;

/// Projected occupancy for one upcoming stop of a bus run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopProjection {
    /// Stop identifier
    pub stop_id: String,
    /// Minutes until the bus reaches this stop
    pub eta_minutes: i32,
    /// Seats expected to be free when the bus arrives here
    pub seats_free: u32,
}

/// Result of projecting a bus run against a selected stop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopProjections {
    /// Upcoming stops (ETA > 0), ascending by ETA
    pub upcoming: Vec<StopProjection>,
    /// Passengers alighting before the selected stop on the canonical
    /// direction sequence
    pub alighting_before: u32,
}

/// Derive the sequence of stops a bus visits, ascending by ETA.
///
/// The sort is stable, so stops sharing an ETA keep the map's iteration
/// order and the result is deterministic for a given map.
pub fn resolve_stop_order(per_stop_eta: &BTreeMap<String, i32>) -> Vec<String> {
    let mut order: Vec<(&String, i32)> = per_stop_eta.iter().map(|(s, &eta)| (s, eta)).collect();
    order.sort_by_key(|&(_, eta)| eta);
    order.into_iter().map(|(s, _)| s.clone()).collect()
}

/// Project free seats at every upcoming stop of a run, relative to
/// `selected_stop`, and compute the cumulative alighting count before
/// that stop on `canonical_stops`.
///
/// A stop is upcoming iff its ETA is strictly positive. For a stop the
/// bus reaches before the selected one, riders bound for the stops in
/// between (and for the selected stop itself) are still on board, so
/// their counts are subtracted. For a stop after the selected one, the
/// alighting at the stops strictly in between has already freed seats,
/// so those counts are added. The projection is floored at zero but not
/// capped at the bus's total seat count.
pub fn project_stops(
    stop_order: &[String],
    selected_stop: &str,
    people_getting_off: &BTreeMap<String, u32>,
    seats_available: u32,
    per_stop_eta: &BTreeMap<String, i32>,
    canonical_stops: &[String],
) -> StopProjections {
    let selected_pos = stop_order.iter().position(|s| s == selected_stop);

    let mut upcoming = Vec::new();
    for (pos, stop) in stop_order.iter().enumerate() {
        let Some(&eta) = per_stop_eta.get(stop) else {
            continue;
        };
        if eta <= 0 {
            continue;
        }

        let seats_free = match selected_pos {
            // Without a position for the selected stop there is nothing to
            // project relative to, so the current availability stands.
            None => seats_available,
            Some(sel) => {
                let delta = if pos < sel {
                    -alighting_sum(stop_order, pos + 1, sel + 1, people_getting_off)
                } else if pos > sel {
                    alighting_sum(stop_order, sel + 1, pos, people_getting_off)
                } else {
                    0
                };
                (i64::from(seats_available) + delta).max(0) as u32
            }
        };

        upcoming.push(StopProjection {
            stop_id: stop.clone(),
            eta_minutes: eta,
            seats_free,
        });
    }
    upcoming.sort_by_key(|p| p.eta_minutes);

    let alighting_before =
        alighting_before_stop(canonical_stops, selected_stop, people_getting_off, per_stop_eta);

    StopProjections {
        upcoming,
        alighting_before,
    }
}

/// Sum of alighting counts over `stop_order[from..to]`; absent counts are 0.
fn alighting_sum(
    stop_order: &[String],
    from: usize,
    to: usize,
    people_getting_off: &BTreeMap<String, u32>,
) -> i64 {
    stop_order[from..to]
        .iter()
        .map(|s| i64::from(people_getting_off.get(s).copied().unwrap_or(0)))
        .sum()
}

/// Cumulative passengers alighting strictly before `selected_stop` along
/// a canonical direction sequence.
///
/// Only stops the bus has not reached yet (ETA > 0) participate: each is
/// assigned the running total accumulated so far, then contributes its
/// own count. Returns the total assigned to `selected_stop`, or 0 when
/// it does not appear.
pub fn alighting_before_stop(
    canonical_stops: &[String],
    selected_stop: &str,
    people_getting_off: &BTreeMap<String, u32>,
    per_stop_eta: &BTreeMap<String, i32>,
) -> u32 {
    let mut total: u32 = 0;
    for stop in canonical_stops {
        if per_stop_eta.get(stop).copied().unwrap_or(0) <= 0 {
            continue;
        }
        if stop == selected_stop {
            return total;
        }
        total += people_getting_off.get(stop).copied().unwrap_or(0);
    }
    0
}
