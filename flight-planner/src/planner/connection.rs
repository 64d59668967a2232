//! Earliest connecting flight on a weekly-cyclic timetable.
//!
//! Given when a traveller lands, find the first departure on the next hop
//! that leaves at least a minimum layover later. The timetable repeats
//! weekly, so the search first looks at the rest of the current week and,
//! failing that, takes the first departure of the following week.

use chrono::Duration;
use tracing::trace;

use crate::domain::{City, FlightInstance, TripTime};
use crate::network::{NetworkGraph, Timetable};

/// Error from connection lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The directed pair has no scheduled departures at all
    #[error("no flights scheduled from {origin} to {destination}")]
    NoFlightAvailable { origin: City, destination: City },

    /// The pair has no route, so its flight duration is unknown
    #[error("no route between {origin} and {destination}")]
    UnknownRoute { origin: City, destination: City },
}

/// A connecting flight placed on the itinerary's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// The scheduled flight chosen
    pub flight: FlightInstance,
    /// When it departs, unwrapped
    pub departure: TripTime,
    /// When it lands: departure plus the route's flight duration
    pub arrival: TripTime,
}

/// Find the earliest flight from `origin` to `destination` leaving no
/// sooner than `arrival + min_layover`.
///
/// Departures exactly at the earliest allowed instant are taken. If no
/// departure remains in the current week, the first departure of the
/// pair's weekly schedule is taken in the next week, so the returned
/// instants always increase along an itinerary.
///
/// # Errors
///
/// `NoFlightAvailable` if the pair has no departures in the timetable;
/// `UnknownRoute` if the graph has no duration for the pair.
pub fn earliest_connection(
    timetable: &Timetable,
    graph: &NetworkGraph,
    origin: &City,
    destination: &City,
    arrival: TripTime,
    min_layover: Duration,
) -> Result<Connection, ResolveError> {
    let flights = timetable.flights_between(origin, destination);
    let first_of_week = flights
        .first()
        .ok_or_else(|| ResolveError::NoFlightAvailable {
            origin: origin.clone(),
            destination: destination.clone(),
        })?;

    let duration = graph.flight_duration(origin, destination).ok_or_else(|| {
        ResolveError::UnknownRoute {
            origin: origin.clone(),
            destination: destination.clone(),
        }
    })?;

    let earliest = arrival + min_layover;
    let week = earliest.week();
    let not_before = earliest.week_time();

    // Flights are sorted within the week, so the first one at or after
    // `not_before` is the earliest same-week option.
    let idx = flights.partition_point(|f| f.departure < not_before);
    let (flight, departure) = match flights.get(idx) {
        Some(f) => (f, TripTime::in_week(week, f.departure)),
        None => {
            trace!(
                %origin,
                %destination,
                %not_before,
                "no departure left this week, wrapping to next"
            );
            (
                first_of_week,
                TripTime::in_week(week + 1, first_of_week.departure),
            )
        }
    };

    trace!(
        %origin,
        %destination,
        %departure,
        layover_mins = departure.signed_duration_since(arrival).num_minutes(),
        "connection resolved"
    );

    Ok(Connection {
        flight: flight.clone(),
        departure,
        arrival: departure + duration,
    })
}
