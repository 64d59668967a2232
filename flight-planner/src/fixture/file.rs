//! JSON network fixtures.
//!
//! A fixture lists undirected routes with their flight time and the weekly
//! flights on them:
//!
//! ```json
//! {
//!   "routes": [{ "a": "A", "b": "B", "minutes": 120 }],
//!   "flights": [
//!     { "origin": "A", "destination": "B", "departure": "Mon 08:00", "price": 100 }
//!   ]
//! }
//! ```

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{City, FlightInstance, WeekTime};
use crate::network::{Network, NetworkGraph, Timetable};

use super::FixtureError;

/// One undirected route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub a: String,
    pub b: String,
    /// Flight time in minutes, either direction.
    pub minutes: i64,
}

/// One weekly departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    /// Weekly departure, e.g. "Mon 08:00".
    pub departure: String,
    pub price: u64,
}

/// On-disk form of a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub flights: Vec<FlightRecord>,
}

impl FixtureFile {
    /// Describe an existing network.
    pub fn from_network(network: &Network) -> Self {
        let routes = network
            .graph()
            .routes()
            .map(|(a, b, duration)| RouteRecord {
                a: a.to_string(),
                b: b.to_string(),
                minutes: duration.num_minutes(),
            })
            .collect();

        let flights = network
            .timetable()
            .flights()
            .iter()
            .map(|f| FlightRecord {
                origin: f.origin.to_string(),
                destination: f.destination.to_string(),
                departure: f.departure.to_string(),
                price: f.price,
            })
            .collect();

        Self { routes, flights }
    }

    /// Validate the records and build the network.
    pub fn into_network(self) -> Result<Network, FixtureError> {
        let mut graph = NetworkGraph::new();
        for route in &self.routes {
            let out_of_range = || FixtureError::MinutesOutOfRange {
                a: route.a.clone(),
                b: route.b.clone(),
                minutes: route.minutes,
            };
            let duration = Duration::try_minutes(route.minutes).ok_or_else(out_of_range)?;
            graph.add_route(
                City::parse_trimmed(&route.a)?,
                City::parse_trimmed(&route.b)?,
                duration,
            )?;
        }

        let flights = self
            .flights
            .iter()
            .map(|f| {
                Ok(FlightInstance::new(
                    City::parse_trimmed(&f.origin)?,
                    City::parse_trimmed(&f.destination)?,
                    WeekTime::parse(&f.departure)?,
                    f.price,
                ))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        Ok(Network::new(graph, Timetable::new(flights))?)
    }

    /// Write the fixture as pretty-printed JSON.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FixtureError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Parse a network from fixture JSON.
pub fn from_json_str(json: &str) -> Result<Network, FixtureError> {
    let file: FixtureFile = serde_json::from_str(json)?;
    file.into_network()
}

/// Load a network from a fixture file.
pub fn load_json(path: impl AsRef<Path>) -> Result<Network, FixtureError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let network = from_json_str(&contents)?;

    info!(
        path = %path.display(),
        cities = network.graph().city_count(),
        routes = network.graph().route_count(),
        flights = network.timetable().len(),
        "loaded network fixture"
    );

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use tempfile::tempdir;

    const SMALL: &str = r#"{
        "routes": [
            { "a": "A", "b": "B", "minutes": 120 },
            { "a": "B", "b": "C", "minutes": 180 }
        ],
        "flights": [
            { "origin": "A", "destination": "B", "departure": "Mon 08:00", "price": 100 },
            { "origin": "B", "destination": "C", "departure": "Mon 20:00", "price": 140 },
            { "origin": "B", "destination": "C", "departure": "Mon 12:00", "price": 150 }
        ]
    }"#;

    fn city(s: &str) -> City {
        City::parse(s).unwrap()
    }

    #[test]
    fn parses_small_network() {
        let network = from_json_str(SMALL).unwrap();
        let graph = network.graph();

        assert_eq!(graph.city_count(), 3);
        assert_eq!(graph.route_count(), 2);
        assert_eq!(
            graph.flight_duration(&city("C"), &city("B")),
            Some(Duration::hours(3))
        );

        let bc = network.timetable().flights_between(&city("B"), &city("C"));
        assert_eq!(bc.len(), 2);
        assert_eq!(bc[0].price, 150);
    }

    #[test]
    fn missing_sections_mean_empty_network() {
        let network = from_json_str("{}").unwrap();
        assert!(network.graph().is_empty());
        assert!(network.timetable().is_empty());
    }

    #[test]
    fn flight_without_route_rejected() {
        let json = r#"{
            "routes": [{ "a": "A", "b": "B", "minutes": 60 }],
            "flights": [
                { "origin": "A", "destination": "C", "departure": "Tue 10:00", "price": 5 }
            ]
        }"#;
        assert!(matches!(
            from_json_str(json),
            Err(FixtureError::Domain(DomainError::FlightWithoutRoute(..)))
        ));
    }

    #[test]
    fn bad_departure_rejected() {
        let json = r#"{
            "routes": [{ "a": "A", "b": "B", "minutes": 60 }],
            "flights": [
                { "origin": "A", "destination": "B", "departure": "Someday 25:00", "price": 5 }
            ]
        }"#;
        assert!(matches!(from_json_str(json), Err(FixtureError::Time(_))));
    }

    #[test]
    fn blank_city_rejected() {
        let json = r#"{ "routes": [{ "a": " ", "b": "B", "minutes": 60 }] }"#;
        assert!(matches!(from_json_str(json), Err(FixtureError::City(_))));
    }

    #[test]
    fn duplicate_route_rejected() {
        let json = r#"{
            "routes": [
                { "a": "A", "b": "B", "minutes": 60 },
                { "a": "B", "b": "A", "minutes": 90 }
            ]
        }"#;
        assert!(matches!(
            from_json_str(json),
            Err(FixtureError::Domain(DomainError::DuplicateRoute(..)))
        ));
    }

    #[test]
    fn huge_minutes_rejected() {
        let json = r#"{ "routes": [{ "a": "A", "b": "B", "minutes": 9223372036854775807 }] }"#;
        assert!(matches!(
            from_json_str(json),
            Err(FixtureError::MinutesOutOfRange { .. })
        ));

        // Representable, but longer than the weekly cycle
        let json = r#"{ "routes": [{ "a": "A", "b": "B", "minutes": 10080 }] }"#;
        assert!(matches!(
            from_json_str(json),
            Err(FixtureError::Domain(DomainError::DurationTooLong(..)))
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            from_json_str("{ routes: "),
            Err(FixtureError::Json(_))
        ));
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("network.json");

        let network = from_json_str(SMALL).unwrap();
        FixtureFile::from_network(&network).save(&path).unwrap();

        let loaded = load_json(&path).unwrap();
        assert_eq!(loaded.graph(), network.graph());
        assert_eq!(loaded.timetable(), network.timetable());
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_json("/nonexistent/path/network.json"),
            Err(FixtureError::Io(_))
        ));
    }
}
