//! Planner configuration.

use chrono::Duration;

/// Configuration parameters for route queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Minimum ground time between connecting flights (minutes).
    /// Connections tighter than this are never offered.
    pub min_layover_mins: i64,

    /// Maximum number of itinerary options to return.
    /// `None` returns every feasible option.
    pub max_options: Option<usize>,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_layover_mins: i64, max_options: Option<usize>) -> Self {
        Self {
            min_layover_mins,
            max_options,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 180, // 3 hours
            max_options: None,
        }
    }
}
