//! Weekly flight timetable.

use crate::domain::{City, DomainError, FlightInstance};

use super::NetworkGraph;

/// Every scheduled weekly departure, sorted for lookup.
///
/// Flights are ordered by (origin, destination, weekday, time). The order
/// is established once at construction, so each directed pair occupies a
/// contiguous, chronologically sorted run that can be found by binary
/// search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    flights: Vec<FlightInstance>,
}

impl Timetable {
    /// Build a timetable, sorting the flights into lookup order.
    pub fn new(mut flights: Vec<FlightInstance>) -> Self {
        flights.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Self { flights }
    }

    /// Build a timetable and check every flight runs on a known route.
    pub fn validated(
        flights: Vec<FlightInstance>,
        graph: &NetworkGraph,
    ) -> Result<Self, DomainError> {
        let timetable = Self::new(flights);
        timetable.check_routes(graph)?;
        Ok(timetable)
    }

    /// Check every flight's pair has a route in `graph`.
    pub fn check_routes(&self, graph: &NetworkGraph) -> Result<(), DomainError> {
        for flight in &self.flights {
            if graph
                .flight_duration(&flight.origin, &flight.destination)
                .is_none()
            {
                return Err(DomainError::FlightWithoutRoute(
                    flight.origin.clone(),
                    flight.destination.clone(),
                ));
            }
        }
        Ok(())
    }

    /// Flights from `origin` to `destination`, earliest in the week first.
    ///
    /// Empty if the pair has no scheduled departures.
    pub fn flights_between(&self, origin: &City, destination: &City) -> &[FlightInstance] {
        let key = (origin, destination);
        let start = self
            .flights
            .partition_point(|f| (&f.origin, &f.destination) < key);
        let len = self.flights[start..]
            .partition_point(|f| (&f.origin, &f.destination) == key);
        &self.flights[start..start + len]
    }

    /// All flights in lookup order.
    pub fn flights(&self) -> &[FlightInstance] {
        &self.flights
    }

    /// Number of scheduled flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns true if no flights are scheduled.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}
