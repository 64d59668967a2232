//! Itinerary types.
//!
//! An `ItineraryOption` is one concrete way of flying a path: a scheduled
//! flight for every hop, placed on an unwrapped timeline so layovers that
//! cross into the next week are measured correctly.

use chrono::Duration;

use super::{City, DomainError, FlightInstance, TripTime};

/// One flown hop of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryLeg {
    /// The scheduled flight taken
    pub flight: FlightInstance,
    /// Departure on the itinerary's timeline
    pub departure: TripTime,
    /// Arrival on the itinerary's timeline
    pub arrival: TripTime,
}

impl ItineraryLeg {
    /// Creates a new leg.
    pub fn new(flight: FlightInstance, departure: TripTime, arrival: TripTime) -> Self {
        Self {
            flight,
            departure,
            arrival,
        }
    }

    /// Returns the departure city.
    pub fn origin(&self) -> &City {
        &self.flight.origin
    }

    /// Returns the arrival city.
    pub fn destination(&self) -> &City {
        &self.flight.destination
    }

    /// Time in the air for this leg.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }
}

/// A complete, time-feasible sequence of flights along a path.
///
/// # Invariants
///
/// - Consecutive legs connect (destination of one = origin of next)
/// - Each leg departs no earlier than the previous leg arrives
/// - Totals are derived from the legs at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryOption {
    legs: Vec<ItineraryLeg>,
    total_price: u64,
    airborne_time: Duration,
    elapsed_time: Duration,
}

impl ItineraryOption {
    /// Constructs an itinerary from its legs, deriving the totals.
    ///
    /// An empty leg list is the degenerate itinerary of a zero-hop path:
    /// no price and no time.
    ///
    /// # Errors
    ///
    /// Returns `Err` if legs don't connect, a leg departs before the
    /// previous one lands, or the prices overflow when summed.
    pub fn new(legs: Vec<ItineraryLeg>) -> Result<Self, DomainError> {
        for window in legs.windows(2) {
            let (prev, next) = (&window[0], &window[1]);
            if prev.destination() != next.origin() {
                return Err(DomainError::LegsNotConnected(
                    prev.destination().clone(),
                    next.origin().clone(),
                ));
            }
            if next.departure < prev.arrival {
                return Err(DomainError::DepartsBeforeArrival(next.origin().clone()));
            }
        }

        let total_price = legs
            .iter()
            .try_fold(0u64, |acc, leg| acc.checked_add(leg.flight.price))
            .ok_or(DomainError::PriceOverflow)?;
        let airborne_time = legs
            .iter()
            .fold(Duration::zero(), |acc, leg| acc + leg.duration());
        let elapsed_time = match (legs.first(), legs.last()) {
            (Some(first), Some(last)) => last.arrival.signed_duration_since(first.departure),
            _ => Duration::zero(),
        };

        Ok(Self {
            legs,
            total_price,
            airborne_time,
            elapsed_time,
        })
    }

    /// The itinerary of a zero-hop path.
    pub fn empty() -> Self {
        Self {
            legs: Vec::new(),
            total_price: 0,
            airborne_time: Duration::zero(),
            elapsed_time: Duration::zero(),
        }
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[ItineraryLeg] {
        &self.legs
    }

    /// Sum of leg prices.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Sum of in-flight durations, excluding layovers.
    pub fn airborne_time(&self) -> Duration {
        self.airborne_time
    }

    /// Last arrival minus first departure, including layovers.
    pub fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }

    /// Time spent on the ground between legs.
    pub fn layover_time(&self) -> Duration {
        self.elapsed_time - self.airborne_time
    }

    /// Departure of the first leg, if any.
    pub fn departure(&self) -> Option<TripTime> {
        self.legs.first().map(|leg| leg.departure)
    }

    /// Arrival of the last leg, if any.
    pub fn arrival(&self) -> Option<TripTime> {
        self.legs.last().map(|leg| leg.arrival)
    }
}
