//! Data-fixture providers for the route network.
//!
//! The planner only reads a [`Network`](crate::network::Network); this
//! module builds one, either randomly from a seed or from a JSON file.

mod error;
mod file;
mod generate;

pub use error::FixtureError;
pub use file::{FixtureFile, FlightRecord, RouteRecord, from_json_str, load_json};
pub use generate::{GeneratorConfig, generate, letter_cities};
