//! Domain types for the flight planner.
//!
//! This module contains the core value types: cities, weekly times,
//! scheduled flights, paths and itineraries. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod city;
mod error;
mod flight;
pub mod itinerary;
mod path;
mod time;

pub use city::{City, InvalidCity};
pub use error::DomainError;
pub use flight::FlightInstance;
pub use itinerary::{ItineraryLeg, ItineraryOption};
pub use path::Path;
pub use time::{SECS_PER_WEEK, TimeError, TripTime, WeekTime, week};
