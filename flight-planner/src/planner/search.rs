//! Route queries: fewest-hops path plus its itineraries.

use chrono::Duration;
use tracing::{debug, info};

use crate::domain::{City, ItineraryOption, Path};
use crate::network::Network;

use super::assemble::{assemble_options, path_airborne_time};
use super::bfs::{RouteError, find_path};
use super::config::PlannerConfig;

/// A route with its itinerary options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFound {
    /// Path with the fewest legs.
    pub path: Path,

    /// Time in the air along the path, independent of schedule.
    pub total_airborne_time: Duration,

    /// Feasible itineraries, in timetable order of their first flight.
    pub options: Vec<ItineraryOption>,
}

/// Outcome of a route query.
///
/// Unreachability is an ordinary answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult {
    /// A path exists; it may still have no feasible itineraries.
    Found(RouteFound),
    /// No path connects the cities, or one of them is unknown.
    Unreachable,
}

impl RouteResult {
    /// Returns true if a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, RouteResult::Found(_))
    }

    /// Returns the route if one was found.
    pub fn as_found(&self) -> Option<&RouteFound> {
        match self {
            RouteResult::Found(found) => Some(found),
            RouteResult::Unreachable => None,
        }
    }
}

/// Route planner over a published network.
///
/// Holds only shared references, so any number of planners can query the
/// same network concurrently.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Find the fewest-hops path from `start` to `end` and every feasible
    /// itinerary along it.
    pub fn query(&self, start: &City, end: &City) -> RouteResult {
        let graph = self.network.graph();

        let path = match find_path(graph, start, end) {
            Ok(path) => path,
            Err(RouteError::NotFound { .. }) => {
                info!(%start, %end, "no route");
                return RouteResult::Unreachable;
            }
        };

        // Every hop of a found path is a graph edge
        let total_airborne_time = path_airborne_time(graph, &path).unwrap_or_else(Duration::zero);

        let mut options = assemble_options(
            self.network.timetable(),
            graph,
            &path,
            self.config.min_layover(),
        );

        if let Some(max) = self.config.max_options {
            if options.len() > max {
                debug!(found = options.len(), max, "truncating itinerary options");
                options.truncate(max);
            }
        }

        info!(
            %start,
            %end,
            hops = path.hop_count(),
            options = options.len(),
            "route planned"
        );

        RouteResult::Found(RouteFound {
            path,
            total_airborne_time,
            options,
        })
    }
}
