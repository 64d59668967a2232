//! Routes through the network as sequences of cities.

use std::fmt;

use super::{City, DomainError};

/// An ordered, non-empty sequence of cities from start to end.
///
/// A path of `n + 1` cities has `n` hops. A single-city path is the
/// degenerate route from a city to itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    cities: Vec<City>,
}

impl Path {
    /// Constructs a path from its cities.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `cities` is empty.
    pub fn new(cities: Vec<City>) -> Result<Self, DomainError> {
        if cities.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        Ok(Self { cities })
    }

    /// The zero-hop path at a single city.
    pub fn single(city: City) -> Self {
        Self { cities: vec![city] }
    }

    /// Returns the cities in travel order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of flight legs.
    pub fn hop_count(&self) -> usize {
        self.cities.len() - 1
    }

    /// Returns the first city.
    pub fn origin(&self) -> &City {
        &self.cities[0]
    }

    /// Returns the last city.
    pub fn destination(&self) -> &City {
        &self.cities[self.cities.len() - 1]
    }

    /// Iterates over consecutive (from, to) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&City, &City)> {
        self.cities.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for city in &self.cities {
            if !first {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", city)?;
            first = false;
        }
        Ok(())
    }
}
