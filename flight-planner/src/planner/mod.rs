//! Route planning engine.
//!
//! This module answers: "what is the route from A to B with the fewest
//! connecting flights, and which concrete flights can I take along it?"
//!
//! Breadth-first search picks the path; a weekly-cyclic connection search
//! then turns every first-hop departure into a time-feasible itinerary.

mod assemble;
mod bfs;
mod config;
mod connection;
mod search;


pub use assemble::{assemble_options, path_airborne_time};
pub use bfs::{RouteError, find_path};
pub use config::PlannerConfig;
pub use connection::{Connection, ResolveError, earliest_connection};
pub use search::{Planner, RouteFound, RouteResult};
