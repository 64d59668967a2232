//! Random network generation.
//!
//! Picks random city pairs as routes, gives each a random flight time and
//! schedules 1 to 7 weekly flights each way. Every outbound flight has a
//! return flight leaving 5 hours after it lands.

use chrono::Duration;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::domain::{City, FlightInstance, WeekTime, week};
use crate::network::{Network, NetworkGraph, Timetable};

use super::FixtureError;

/// Fare per minute of flight time.
const PRICE_PER_MINUTE: u64 = 30;

/// Gap between an outbound flight landing and its return departure.
const TURNAROUND_HOURS: i64 = 5;

/// Parameters for random network generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Cities to connect.
    pub cities: Vec<City>,

    /// Number of undirected routes to create.
    pub routes: usize,

    /// Shortest flight time (minutes).
    pub min_flight_mins: i64,

    /// Longest flight time (minutes).
    pub max_flight_mins: i64,

    /// Largest number of weekly flights per direction.
    pub max_weekly_flights: u32,

    /// Largest fare markup (percent).
    pub max_markup_percent: u64,

    /// RNG seed; the same seed gives the same network.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Default parameters with a different route count and seed.
    pub fn with_routes(routes: usize, seed: u64) -> Self {
        Self {
            routes,
            seed,
            ..Self::default()
        }
    }

    /// Largest number of distinct routes the city set allows.
    pub fn max_routes(&self) -> usize {
        let n = self.cities.len();
        n * n.saturating_sub(1) / 2
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cities: letter_cities(),
            routes: 25,
            min_flight_mins: 90,
            max_flight_mins: 540, // 9 hours
            max_weekly_flights: 7,
            max_markup_percent: 30,
            seed: 0,
        }
    }
}

/// Cities "A" through "Z".
pub fn letter_cities() -> Vec<City> {
    ('A'..='Z')
        .filter_map(|c| City::parse(&c.to_string()).ok())
        .collect()
}

/// Generate a random network.
///
/// Only cities that receive at least one route are part of the graph.
///
/// # Errors
///
/// Fails if more routes are requested than the cities can hold, or if
/// the flight time bounds are empty, not positive, or a week or longer.
pub fn generate(config: &GeneratorConfig) -> Result<Network, FixtureError> {
    let max = config.max_routes();
    if config.routes > max {
        return Err(FixtureError::TooManyRoutes {
            requested: config.routes,
            cities: config.cities.len(),
            max,
        });
    }

    let (min, max) = (config.min_flight_mins, config.max_flight_mins);
    if min <= 0 || min > max || max >= week().num_minutes() {
        return Err(FixtureError::InvalidFlightRange { min, max });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut graph = NetworkGraph::new();
    let mut flights = Vec::new();

    while graph.route_count() < config.routes {
        let pair = config.cities.choose_multiple(&mut rng, 2).collect::<Vec<_>>();
        let [origin, destination] = pair.as_slice() else {
            break;
        };
        if graph.flight_duration(origin, destination).is_some() {
            continue;
        }

        let minutes = rng.random_range(config.min_flight_mins..=config.max_flight_mins);
        let duration = Duration::minutes(minutes);
        graph.add_route((*origin).clone(), (*destination).clone(), duration)?;

        schedule_route(
            &mut rng,
            config,
            origin,
            destination,
            duration,
            &mut flights,
        );
    }

    debug!(
        seed = config.seed,
        routes = graph.route_count(),
        flights = flights.len(),
        "generated network"
    );

    let timetable = Timetable::new(flights);
    Ok(Network::new(graph, timetable)?)
}

/// Add 1..=max weekly flights from `origin`, each with a return flight.
fn schedule_route(
    rng: &mut StdRng,
    config: &GeneratorConfig,
    origin: &City,
    destination: &City,
    duration: Duration,
    flights: &mut Vec<FlightInstance>,
) {
    let weekly = rng.random_range(1..=config.max_weekly_flights.max(1));
    let minutes = duration.num_minutes().unsigned_abs();

    for _ in 0..weekly {
        let day = rng.random_range(1..=7);
        let hour = rng.random_range(0..24);
        let minute = rng.random_range(0..60);
        let Ok(outbound) = WeekTime::from_hm(day, hour, minute) else {
            continue;
        };
        let inbound = outbound + duration + Duration::hours(TURNAROUND_HOURS);

        let price = fare(rng, minutes, config.max_markup_percent);
        flights.push(FlightInstance::new(
            origin.clone(),
            destination.clone(),
            outbound,
            price,
        ));

        let price = fare(rng, minutes, config.max_markup_percent);
        flights.push(FlightInstance::new(
            destination.clone(),
            origin.clone(),
            inbound,
            price,
        ));
    }
}

/// Base fare for the flight time plus a random 1..=max percent markup.
fn fare(rng: &mut StdRng, minutes: u64, max_markup_percent: u64) -> u64 {
    let markup = rng.random_range(1..=max_markup_percent.max(1));
    PRICE_PER_MINUTE * minutes * (100 + markup) / 100
}
