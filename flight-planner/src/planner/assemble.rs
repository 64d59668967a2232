//! Itinerary assembly along a fixed path.
//!
//! Every scheduled departure on the first hop seeds one candidate
//! itinerary; each later hop takes the earliest connection that respects
//! the minimum layover. Candidates whose later hops have no flights are
//! dropped rather than failing the whole query.

use chrono::Duration;
use tracing::debug;

use crate::domain::{FlightInstance, ItineraryLeg, ItineraryOption, Path, TripTime};
use crate::network::{NetworkGraph, Timetable};

use super::connection::{ResolveError, earliest_connection};

/// Sum of flight durations along `path`.
///
/// Depends only on the route graph, not on the schedule. `None` if some
/// hop has no route.
pub fn path_airborne_time(graph: &NetworkGraph, path: &Path) -> Option<Duration> {
    path.edges().try_fold(Duration::zero(), |acc, (from, to)| {
        graph.flight_duration(from, to).map(|d| acc + d)
    })
}

/// Build every feasible itinerary along `path`.
///
/// Options come out in timetable order of their first flight; nothing is
/// re-ranked. A zero-hop path yields a single empty itinerary.
pub fn assemble_options(
    timetable: &Timetable,
    graph: &NetworkGraph,
    path: &Path,
    min_layover: Duration,
) -> Vec<ItineraryOption> {
    let Some((first_from, first_to)) = path.edges().next() else {
        return vec![ItineraryOption::empty()];
    };

    let Some(first_duration) = graph.flight_duration(first_from, first_to) else {
        debug!(from = %first_from, to = %first_to, "first hop has no route");
        return Vec::new();
    };

    let seeds = timetable.flights_between(first_from, first_to);
    let mut options = Vec::with_capacity(seeds.len());

    for seed in seeds {
        let legs = match fly_from(seed, first_duration, timetable, graph, path, min_layover) {
            Ok(legs) => legs,
            Err(e) => {
                debug!(
                    first_departure = %seed.departure,
                    error = %e,
                    "dropping itinerary candidate"
                );
                continue;
            }
        };

        match ItineraryOption::new(legs) {
            Ok(option) => options.push(option),
            Err(e) => debug!(error = %e, "discarding inconsistent itinerary"),
        }
    }

    debug!(
        %path,
        candidates = seeds.len(),
        options = options.len(),
        "itineraries assembled"
    );

    options
}

/// Fly the whole path starting with `seed` in the first week.
fn fly_from(
    seed: &FlightInstance,
    seed_duration: Duration,
    timetable: &Timetable,
    graph: &NetworkGraph,
    path: &Path,
    min_layover: Duration,
) -> Result<Vec<ItineraryLeg>, ResolveError> {
    let departure = TripTime::starting_at(seed.departure);
    let mut landed = departure + seed_duration;
    let mut legs = Vec::with_capacity(path.hop_count());
    legs.push(ItineraryLeg::new(seed.clone(), departure, landed));

    for (from, to) in path.edges().skip(1) {
        let conn = earliest_connection(timetable, graph, from, to, landed, min_layover)?;
        landed = conn.arrival;
        legs.push(ItineraryLeg::new(conn.flight, conn.departure, conn.arrival));
    }

    Ok(legs)
}
