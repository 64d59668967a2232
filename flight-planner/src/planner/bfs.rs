//! Fewest-hops route search.
//!
//! Breadth-first search over the route graph. Every route counts as one
//! hop regardless of its flight duration, so the first time the search
//! reaches the destination it has found a path with the fewest legs.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::domain::{City, Path};
use crate::network::NetworkGraph;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No path connects the cities, or one of them is not in the network
    #[error("no route from {start} to {end}")]
    NotFound { start: City, end: City },
}

/// Find the path from `start` to `end` with the fewest legs.
///
/// When several shortest paths exist, the one found by visiting
/// neighbours in ascending city order is returned: each city's parent is
/// the earliest-dequeued city that reaches it, and within one city the
/// lexicographically smallest neighbour is enqueued first.
///
/// # Errors
///
/// Returns `RouteError::NotFound` if either city is absent from `graph`
/// or no path connects them.
pub fn find_path(graph: &NetworkGraph, start: &City, end: &City) -> Result<Path, RouteError> {
    let not_found = || RouteError::NotFound {
        start: start.clone(),
        end: end.clone(),
    };

    if !graph.contains(start) || !graph.contains(end) {
        debug!(%start, %end, "route endpoint not in network");
        return Err(not_found());
    }

    if start == end {
        return Ok(Path::single(start.clone()));
    }

    let mut hops: HashMap<&City, usize> = HashMap::new();
    let mut parents: HashMap<&City, &City> = HashMap::new();
    let mut frontier: VecDeque<&City> = VecDeque::new();

    hops.insert(start, 0);
    frontier.push_back(start);

    'search: while let Some(current) = frontier.pop_front() {
        let current_hops = hops.get(current).copied().unwrap_or_default();
        trace!(city = %current, hops = current_hops, "BFS exploring city");

        for (neighbor, _) in graph.neighbors(current) {
            if hops.contains_key(neighbor) {
                continue;
            }
            hops.insert(neighbor, current_hops + 1);
            parents.insert(neighbor, current);
            frontier.push_back(neighbor);

            if neighbor == end {
                break 'search;
            }
        }
    }

    if !parents.contains_key(end) {
        debug!(%start, %end, visited = hops.len(), "destination unreachable");
        return Err(not_found());
    }

    // Walk parent pointers back from the destination
    let mut cities = vec![end.clone()];
    let mut cursor = end;
    while let Some(&parent) = parents.get(cursor) {
        cities.push(parent.clone());
        cursor = parent;
    }
    cities.reverse();

    let path = Path::new(cities).map_err(|_| not_found())?;
    debug!(%path, hops = path.hop_count(), "route found");
    Ok(path)
}
