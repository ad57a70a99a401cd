//! Booking records and cancellation refunds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::flight::{CabinClass, Flight};
use crate::seat::SeatPosition;
use crate::summary::BookingSummary;

/// Session-unique booking identifier. Never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl BookingId {
    /// Identifier following this one.
    pub fn next(self) -> Self {
        BookingId(self.0 + 1)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BookingId)
    }
}

/// How a cancellation adjusts the booking's price and the flight counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundPolicy {
    /// Subtract the fare re-evaluated at the flight's current counter and
    /// leave the counter alone. Matches the legacy console behaviour, so the
    /// refund can differ from what was charged.
    #[default]
    Recompute,
    /// Refund exactly what was charged, release the booking event from the
    /// surge counter and clear the seats' meal flags.
    Exact,
}

impl fmt::Display for RefundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RefundPolicy::Recompute => "recompute",
            RefundPolicy::Exact => "exact",
        };
        f.write_str(value)
    }
}

/// A reservation of one or more seats on a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub flight_number: String,
    pub class: CabinClass,
    seats: Vec<SeatPosition>,
    total_price: i64,
    charged_price: i64,
    total_meal_cost: i64,
}

impl Booking {
    /// Create a booking and price it against the flight's current counter.
    ///
    /// Call after [`Flight::book_seats`] so the new booking event is counted.
    pub fn new(id: BookingId, flight: &Flight, seats: Vec<SeatPosition>, class: CabinClass) -> Self {
        let price = flight.price_for(&seats, class);
        Self {
            id,
            flight_number: flight.number.clone(),
            class,
            seats,
            total_price: price,
            charged_price: price,
            total_meal_cost: 0,
        }
    }

    pub fn seats(&self) -> &[SeatPosition] {
        &self.seats
    }

    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    /// Fare computed when the booking was created.
    pub fn charged_price(&self) -> i64 {
        self.charged_price
    }

    pub fn total_meal_cost(&self) -> i64 {
        self.total_meal_cost
    }

    pub fn order_meals(&mut self, flight: &mut Flight) {
        flight.order_meals(&self.seats);
        self.total_meal_cost = flight.meal_cost_for(&self.seats);
    }

    /// Release the seats and adjust the stored price per `policy`.
    pub fn cancel(&mut self, flight: &mut Flight, policy: RefundPolicy) {
        flight.cancel_seats(&self.seats);
        let refund = match policy {
            RefundPolicy::Recompute => flight.price_for(&self.seats, self.class),
            RefundPolicy::Exact => {
                flight.clear_meals(&self.seats);
                flight.release_booking_event();
                self.charged_price
            }
        };
        debug!(
            booking = %self.id,
            flight = %self.flight_number,
            %policy,
            refund,
            "cancelled booking"
        );
        self.total_price = self.total_price.saturating_sub(refund);
        self.total_meal_cost = 0;
    }

    pub fn summary(&self, flight: &Flight) -> BookingSummary {
        BookingSummary {
            booking_id: self.id,
            flight_number: flight.number.clone(),
            source: flight.source.clone(),
            destination: flight.destination.clone(),
            class: self.class,
            total_price: self.total_price,
            total_meal_cost: self.total_meal_cost,
            seats: flight.seat_labels(&self.seats),
        }
    }
}
