//! Scheduled flight instances.

use std::fmt;

use super::{City, WeekTime};

/// One weekly departure on a directed city pair.
///
/// A route may have several of these in each direction, one per
/// scheduled departure in the week.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightInstance {
    /// Departure city
    pub origin: City,
    /// Arrival city
    pub destination: City,
    /// Scheduled departure within the week
    pub departure: WeekTime,
    /// Fare for this departure
    pub price: u64,
}

impl FlightInstance {
    /// Creates a new flight instance.
    pub fn new(origin: City, destination: City, departure: WeekTime, price: u64) -> Self {
        Self {
            origin,
            destination,
            departure,
            price,
        }
    }

    /// Sort key used by the timetable: (origin, destination, weekday, time).
    pub fn sort_key(&self) -> (&City, &City, WeekTime) {
        (&self.origin, &self.destination, self.departure)
    }

    /// Returns true if this flight serves the given directed pair.
    pub fn serves(&self, origin: &City, destination: &City) -> bool {
        &self.origin == origin && &self.destination == destination
    }
}

impl fmt::Display for FlightInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} {} ({})",
            self.origin, self.destination, self.departure, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(s: &str) -> City {
        City::parse(s).unwrap()
    }

    #[test]
    fn serves_is_directional() {
        let f = FlightInstance::new(
            city("A"),
            city("B"),
            WeekTime::from_hm(1, 8, 0).unwrap(),
            100,
        );
        assert!(f.serves(&city("A"), &city("B")));
        assert!(!f.serves(&city("B"), &city("A")));
    }

    #[test]
    fn sort_key_orders_by_pair_then_time() {
        let early = FlightInstance::new(
            city("A"),
            city("C"),
            WeekTime::from_hm(1, 8, 0).unwrap(),
            1,
        );
        let late = FlightInstance::new(
            city("A"),
            city("B"),
            WeekTime::from_hm(7, 8, 0).unwrap(),
            1,
        );
        // Pair dominates time
        assert!(late.sort_key() < early.sort_key());
    }

    #[test]
    fn display() {
        let f = FlightInstance::new(
            city("A"),
            city("B"),
            WeekTime::from_hm(2, 14, 5).unwrap(),
            4200,
        );
        assert_eq!(f.to_string(), "A -> B Tue 14:05 (4200)");
    }
}
