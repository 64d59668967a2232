//! Askama templates for the web frontend.

use askama::Template;

use super::dto::{ItineraryResult, LegResult, RouteResponse};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Known city labels, ascending
    pub cities: Vec<String>,
    pub route_count: usize,
    pub flight_count: usize,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route results fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub route: RouteView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub from: String,
    pub to: String,
    pub reachable: bool,
    pub path_display: String,
    pub hops: usize,
    pub airborne_display: String,
    pub options: Vec<OptionView>,
}

impl RouteView {
    /// Create from the JSON response, so both renderings agree.
    pub fn from_response(response: &RouteResponse) -> Self {
        Self {
            from: response.from.clone(),
            to: response.to.clone(),
            reachable: response.reachable,
            path_display: response.path.join(" → "),
            hops: response.path.len().saturating_sub(1),
            airborne_display: response.total_airborne_time.clone().unwrap_or_default(),
            options: response.options.iter().map(OptionView::from_result).collect(),
        }
    }

    /// Whether a path exists but no itinerary fits the timetable.
    pub fn has_no_options(&self) -> bool {
        self.reachable && self.options.is_empty()
    }
}

/// Itinerary option view model.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub price: u64,
    pub elapsed_display: String,
    pub airborne_display: String,
    pub layover_display: String,
    pub legs: Vec<LegView>,
}

impl OptionView {
    /// Create from an itinerary DTO.
    pub fn from_result(result: &ItineraryResult) -> Self {
        Self {
            price: result.total_price,
            elapsed_display: result.elapsed_time.clone(),
            airborne_display: result.airborne_time.clone(),
            layover_display: result.layover_time.clone(),
            legs: result.legs.iter().map(LegView::from_result).collect(),
        }
    }

    /// Number of changes of plane.
    pub fn changes(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }
}

/// Flight leg view model.
#[derive(Debug, Clone)]
pub struct LegView {
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub price: u64,
    /// Leaves in a later week than the first departure
    pub next_week: bool,
}

impl LegView {
    /// Create from a leg DTO.
    pub fn from_result(leg: &LegResult) -> Self {
        Self {
            origin: leg.origin.clone(),
            destination: leg.destination.clone(),
            departure: format!("{} {}", leg.departure_day, leg.departure_time),
            arrival: format!("{} {}", leg.arrival_day, leg.arrival_time),
            duration: leg.duration.clone(),
            price: leg.price,
            next_week: leg.week > 0,
        }
    }
}
