//! The read-only inputs to route planning.
//!
//! A [`Network`] pairs the route graph with its weekly timetable. Once
//! built it is never mutated, so it can be shared across concurrent
//! queries behind an `Arc` without locking.

mod graph;
mod timetable;

pub use graph::NetworkGraph;
pub use timetable::Timetable;

use crate::domain::DomainError;

/// Route graph and timetable published together.
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: NetworkGraph,
    timetable: Timetable,
}

impl Network {
    /// Pair a graph with a timetable, checking every flight has a route.
    pub fn new(graph: NetworkGraph, timetable: Timetable) -> Result<Self, DomainError> {
        timetable.check_routes(&graph)?;
        Ok(Self { graph, timetable })
    }

    /// Returns the route graph.
    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    /// Returns the timetable.
    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }
}
