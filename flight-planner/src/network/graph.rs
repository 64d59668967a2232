//! Undirected route graph with per-route flight durations.

use std::collections::BTreeMap;

use chrono::Duration;

use crate::domain::{City, DomainError, week};

/// The route network between cities.
///
/// Routes are symmetric: if you can fly from A to B, you can fly from B to
/// A with the same flight duration. Neighbours are kept in ascending city
/// order, which makes breadth-first search deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkGraph {
    /// Map from city to its neighbours and the flight duration to each.
    /// Stored in both directions for direct lookup.
    routes: BTreeMap<City, BTreeMap<City, Duration>>,
}

impl NetworkGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route between two cities.
    ///
    /// The route is stored symmetrically (both A→B and B→A).
    ///
    /// # Errors
    ///
    /// Rejects self-loops, duplicate routes, and durations that are not
    /// positive or not shorter than a week.
    pub fn add_route(
        &mut self,
        a: City,
        b: City,
        duration: Duration,
    ) -> Result<(), DomainError> {
        if a == b {
            return Err(DomainError::SelfLoop(a));
        }
        if duration <= Duration::zero() {
            return Err(DomainError::NonPositiveDuration(a, b));
        }
        if duration >= week() {
            return Err(DomainError::DurationTooLong(a, b));
        }
        if self.flight_duration(&a, &b).is_some() {
            return Err(DomainError::DuplicateRoute(a, b));
        }

        self.routes
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), duration);
        self.routes.entry(b).or_default().insert(a, duration);
        Ok(())
    }

    /// Add a city with no routes yet.
    ///
    /// Such a city is known to the planner but unreachable from anywhere.
    pub fn add_city(&mut self, city: City) {
        self.routes.entry(city).or_default();
    }

    /// Returns true if the city is part of the network.
    pub fn contains(&self, city: &City) -> bool {
        self.routes.contains_key(city)
    }

    /// Get the flight duration between two cities, if a route exists.
    pub fn flight_duration(&self, from: &City, to: &City) -> Option<Duration> {
        self.routes.get(from)?.get(to).copied()
    }

    /// Neighbours of a city in ascending order, with flight durations.
    pub fn neighbors<'a>(
        &'a self,
        city: &City,
    ) -> impl Iterator<Item = (&'a City, Duration)> + use<'a> {
        self.routes
            .get(city)
            .into_iter()
            .flat_map(|n| n.iter().map(|(c, d)| (c, *d)))
    }

    /// All cities in ascending order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.routes.keys()
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns the number of routes (counting A→B and B→A as one).
    pub fn route_count(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Every route once, as (a, b, duration) with `a < b`.
    pub fn routes(&self) -> impl Iterator<Item = (&City, &City, Duration)> {
        self.routes.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, d)| (a, b, *d))
        })
    }

    /// Returns true if there are no cities.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(s: &str) -> City {
        City::parse(s).unwrap()
    }

    #[test]
    fn empty_graph() {
        let g = NetworkGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.route_count(), 0);
        assert!(!g.contains(&city("A")));
    }

    #[test]
    fn routes_are_symmetric() {
        let mut g = NetworkGraph::new();
        g.add_route(city("A"), city("B"), Duration::hours(2)).unwrap();

        assert_eq!(
            g.flight_duration(&city("A"), &city("B")),
            Some(Duration::hours(2))
        );
        assert_eq!(
            g.flight_duration(&city("B"), &city("A")),
            Some(Duration::hours(2))
        );
        assert_eq!(g.route_count(), 1);
        assert_eq!(g.city_count(), 2);
    }

    #[test]
    fn self_loop_rejected() {
        let mut g = NetworkGraph::new();
        let err = g
            .add_route(city("A"), city("A"), Duration::hours(1))
            .unwrap_err();
        assert_eq!(err, DomainError::SelfLoop(city("A")));
        assert!(g.is_empty());
    }

    #[test]
    fn duplicate_rejected_in_either_direction() {
        let mut g = NetworkGraph::new();
        g.add_route(city("A"), city("B"), Duration::hours(2)).unwrap();

        assert!(g.add_route(city("A"), city("B"), Duration::hours(3)).is_err());
        assert!(g.add_route(city("B"), city("A"), Duration::hours(3)).is_err());
        // First duration untouched
        assert_eq!(
            g.flight_duration(&city("B"), &city("A")),
            Some(Duration::hours(2))
        );
    }

    #[test]
    fn non_positive_duration_rejected() {
        let mut g = NetworkGraph::new();
        assert!(g.add_route(city("A"), city("B"), Duration::zero()).is_err());
        assert!(
            g.add_route(city("A"), city("B"), Duration::minutes(-5))
                .is_err()
        );
    }

    #[test]
    fn week_long_duration_rejected() {
        let mut g = NetworkGraph::new();
        let err = g
            .add_route(city("A"), city("B"), Duration::days(7))
            .unwrap_err();
        assert_eq!(err, DomainError::DurationTooLong(city("A"), city("B")));
        assert!(g.is_empty());

        g.add_route(city("A"), city("B"), Duration::days(7) - Duration::minutes(1))
            .unwrap();
        assert_eq!(g.route_count(), 1);
    }

    #[test]
    fn neighbors_sorted() {
        let mut g = NetworkGraph::new();
        g.add_route(city("A"), city("D"), Duration::hours(1)).unwrap();
        g.add_route(city("A"), city("B"), Duration::hours(2)).unwrap();
        g.add_route(city("A"), city("C"), Duration::hours(3)).unwrap();

        let names: Vec<&str> = g.neighbors(&city("A")).map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "D"]);
        assert_eq!(g.neighbors(&city("Z")).count(), 0);
    }

    #[test]
    fn isolated_city() {
        let mut g = NetworkGraph::new();
        g.add_city(city("Q"));
        assert!(g.contains(&city("Q")));
        assert_eq!(g.neighbors(&city("Q")).count(), 0);
        assert_eq!(g.route_count(), 0);
    }

    #[test]
    fn routes_listed_once() {
        let mut g = NetworkGraph::new();
        g.add_route(city("B"), city("A"), Duration::hours(1)).unwrap();
        g.add_route(city("B"), city("C"), Duration::hours(2)).unwrap();

        let listed: Vec<(String, String)> = g
            .routes()
            .map(|(a, b, _)| (a.to_string(), b.to_string()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string())
            ]
        );
    }
}
