//! Web layer for the flight planner.
//!
//! Provides HTTP endpoints for listing the network and planning routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
