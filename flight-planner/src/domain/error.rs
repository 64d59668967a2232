//! Domain error types.
//!
//! These errors represent validation failures when building the network
//! and timetable. They are distinct from search outcomes, which are
//! ordinary results rather than faults.

use super::City;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A route from a city to itself
    #[error("route from {0} to itself is not allowed")]
    SelfLoop(City),

    /// The pair already has a route
    #[error("route between {0} and {1} already exists")]
    DuplicateRoute(City, City),

    /// Flight durations must be strictly positive
    #[error("flight duration between {0} and {1} must be positive")]
    NonPositiveDuration(City, City),

    /// A timetable row names a pair with no route in the network
    #[error("flight {0} -> {1} has no route in the network")]
    FlightWithoutRoute(City, City),

    /// Consecutive itinerary legs don't meet at the same city
    #[error("legs do not connect: arrive at {0}, depart from {1}")]
    LegsNotConnected(City, City),

    /// A connecting leg leaves before the previous leg lands
    #[error("connection at {0} departs before the inbound flight arrives")]
    DepartsBeforeArrival(City),

    /// Flight durations must be shorter than the weekly cycle
    #[error("flight duration between {0} and {1} must be under a week")]
    DurationTooLong(City, City),

    /// Leg prices add up past the representable total
    #[error("total price of itinerary overflows")]
    PriceOverflow,

    /// Path has no cities
    #[error("path must contain at least one city")]
    EmptyPath,
}
