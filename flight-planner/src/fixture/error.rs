//! Fixture error types.

use crate::domain::{DomainError, InvalidCity, TimeError};

/// Errors that can occur while building a network fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Reading the fixture file failed
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A city label is invalid
    #[error(transparent)]
    City(#[from] InvalidCity),

    /// A departure time is invalid
    #[error(transparent)]
    Time(#[from] TimeError),

    /// The routes or flights are inconsistent
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A route's minutes cannot be represented as a duration
    #[error("flight time of {minutes} minutes between {a} and {b} is out of range")]
    MinutesOutOfRange { a: String, b: String, minutes: i64 },

    /// The generator's flight time bounds are empty or unusable
    #[error("invalid flight time range {min}..={max} minutes")]
    InvalidFlightRange { min: i64, max: i64 },

    /// More routes requested than the city set can hold
    #[error("cannot place {requested} routes among {cities} cities (at most {max})")]
    TooManyRoutes {
        requested: usize,
        cities: usize,
        max: usize,
    },
}
