//! Data transfer objects for web requests and responses.

use chrono::{Duration, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::{City, FlightInstance, ItineraryLeg, ItineraryOption, TripTime, WeekTime};
use crate::planner::{RouteFound, RouteResult};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Departure city label
    pub from: String,

    /// Destination city label
    pub to: String,
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,

    /// Whether any path connects the cities
    pub reachable: bool,

    /// Cities along the fewest-hops path (empty if unreachable)
    pub path: Vec<String>,

    /// Time in the air along the path, e.g. "5h 00m"
    pub total_airborne_time: Option<String>,

    /// Same, in minutes
    pub total_airborne_mins: Option<i64>,

    /// Feasible itineraries along the path
    pub options: Vec<ItineraryResult>,
}

impl RouteResponse {
    /// Create from a route query result.
    pub fn from_result(from: &City, to: &City, result: &RouteResult) -> Self {
        let mut response = Self {
            from: from.to_string(),
            to: to.to_string(),
            reachable: false,
            path: Vec::new(),
            total_airborne_time: None,
            total_airborne_mins: None,
            options: Vec::new(),
        };

        if let Some(found) = result.as_found() {
            response.fill_found(found);
        }
        response
    }

    fn fill_found(&mut self, found: &RouteFound) {
        self.reachable = true;
        self.path = found.path.cities().iter().map(City::to_string).collect();
        self.total_airborne_time = Some(format_span(found.total_airborne_time));
        self.total_airborne_mins = Some(found.total_airborne_time.num_minutes());
        self.options = found
            .options
            .iter()
            .map(ItineraryResult::from_option)
            .collect();
    }
}

/// One itinerary option.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Flights in order
    pub legs: Vec<LegResult>,

    /// Sum of leg prices
    pub total_price: u64,

    /// Time in the air, e.g. "5h 00m"
    pub airborne_time: String,

    /// First departure to last arrival, e.g. "15h 00m"
    pub elapsed_time: String,

    /// First departure to last arrival in minutes
    pub elapsed_mins: i64,

    /// Ground time between legs
    pub layover_time: String,
}

impl ItineraryResult {
    /// Create from a domain itinerary.
    pub fn from_option(option: &ItineraryOption) -> Self {
        Self {
            legs: option.legs().iter().map(LegResult::from_leg).collect(),
            total_price: option.total_price(),
            airborne_time: format_span(option.airborne_time()),
            elapsed_time: format_span(option.elapsed_time()),
            elapsed_mins: option.elapsed_time().num_minutes(),
            layover_time: format_span(option.layover_time()),
        }
    }
}

/// A single flight within an itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub origin: String,
    pub destination: String,

    /// Departure weekday, e.g. "Monday"
    pub departure_day: String,

    /// Departure time, e.g. "08:00"
    pub departure_time: String,

    /// Arrival weekday
    pub arrival_day: String,

    /// Arrival time
    pub arrival_time: String,

    /// Weeks after the first departure's week this leg leaves in
    pub week: i64,

    /// Flight time, e.g. "2h 00m"
    pub duration: String,

    pub price: u64,
}

impl LegResult {
    /// Create from a domain leg.
    pub fn from_leg(leg: &ItineraryLeg) -> Self {
        let (departure_day, departure_time) = split_instant(leg.departure);
        let (arrival_day, arrival_time) = split_instant(leg.arrival);

        Self {
            origin: leg.origin().to_string(),
            destination: leg.destination().to_string(),
            departure_day,
            departure_time,
            arrival_day,
            arrival_time,
            week: leg.departure.week(),
            duration: format_span(leg.duration()),
            price: leg.flight.price,
        }
    }
}

/// Request to list the timetable.
#[derive(Debug, Deserialize)]
pub struct TimetableRequest {
    /// Only flights leaving this city
    pub origin: Option<String>,

    /// Only flights arriving at this city
    pub destination: Option<String>,
}

/// One scheduled weekly departure.
#[derive(Debug, Serialize)]
pub struct TimetableRow {
    pub origin: String,
    pub destination: String,

    /// Weekday, e.g. "Tuesday"
    pub day: String,

    /// Time of day, e.g. "14:05"
    pub departure: String,

    pub price: u64,
}

impl TimetableRow {
    /// Create from a timetable entry.
    pub fn from_flight(flight: &FlightInstance) -> Self {
        Self {
            origin: flight.origin.to_string(),
            destination: flight.destination.to_string(),
            day: weekday_name(flight.departure.weekday()).to_string(),
            departure: format_clock(flight.departure),
            price: flight.price,
        }
    }
}

/// Response for timetable listing.
#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    pub flights: Vec<TimetableRow>,
}

/// Response for city listing.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    /// City labels in ascending order
    pub cities: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Format a span as hours and zero-padded minutes, e.g. "15h 00m".
pub fn format_span(span: Duration) -> String {
    let mins = span.num_minutes();
    format!("{}h {:02}m", mins / 60, mins % 60)
}

/// Format the time of day as "HH:MM".
pub fn format_clock(at: WeekTime) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

/// Full English weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn split_instant(at: TripTime) -> (String, String) {
    let wt = at.week_time();
    (weekday_name(wt.weekday()).to_string(), format_clock(wt))
}
