//! Operator session owning all flights and active bookings.

use std::collections::BTreeMap;

use tracing::debug;

use crate::booking::{Booking, BookingId, RefundPolicy};
use crate::error::{Error, Result};
use crate::flight::{CabinClass, Flight};
use crate::summary::{BookingSummary, FlightSummary, MealReport, SeatAvailability};

/// Maximum number of "did you mean" suggestions for an unknown flight.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum similarity for a flight number to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// In-memory booking state for one process.
#[derive(Debug)]
pub struct Session {
    flights: Vec<Flight>,
    bookings: BTreeMap<BookingId, Booking>,
    next_booking_id: BookingId,
    refund_policy: RefundPolicy,
}

impl Session {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self {
            flights,
            bookings: BTreeMap::new(),
            next_booking_id: BookingId(1),
            refund_policy: RefundPolicy::default(),
        }
    }

    pub fn with_refund_policy(mut self, policy: RefundPolicy) -> Self {
        self.refund_policy = policy;
        self
    }

    pub fn refund_policy(&self) -> RefundPolicy {
        self.refund_policy
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    fn flight_index(&self, number: &str) -> Result<usize> {
        let number = number.trim();
        self.flights
            .iter()
            .position(|f| f.number.eq_ignore_ascii_case(number))
            .ok_or_else(|| Error::FlightNotFound {
                number: number.to_string(),
                suggestions: self.suggest_flights(number),
            })
    }

    fn suggest_flights(&self, number: &str) -> Vec<String> {
        let needle = number.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .flights
            .iter()
            .map(|f| {
                let score = strsim::jaro_winkler(&needle, &f.number.to_ascii_uppercase());
                (score, f.number.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Look up a flight by number, ignoring case and surrounding whitespace.
    pub fn flight(&self, number: &str) -> Result<&Flight> {
        let index = self.flight_index(number)?;
        Ok(&self.flights[index])
    }

    /// Flights whose route matches exactly, ignoring case.
    pub fn search(&self, source: &str, destination: &str) -> Vec<&Flight> {
        self.flights
            .iter()
            .filter(|f| f.serves(source, destination))
            .collect()
    }

    /// Reserve the first `count` free seats of `class` on a flight.
    pub fn book(
        &mut self,
        number: &str,
        class: CabinClass,
        count: usize,
        with_meals: bool,
    ) -> Result<BookingId> {
        if count == 0 {
            return Err(Error::EmptySeatRequest);
        }

        let index = self.flight_index(number)?;
        let flight = &mut self.flights[index];
        let available = flight.available_seats(class);
        if count > available.len() {
            return Err(Error::InsufficientSeats {
                class,
                requested: count,
                available: available.len(),
            });
        }

        let seats = available[..count].to_vec();
        flight.book_seats(&seats);

        let id = self.next_booking_id;
        self.next_booking_id = id.next();

        let mut booking = Booking::new(id, flight, seats, class);
        if with_meals {
            booking.order_meals(flight);
        }
        debug!(
            booking = %id,
            flight = %flight.number,
            %class,
            seats = count,
            price = booking.total_price(),
            "created booking"
        );
        self.bookings.insert(id, booking);
        Ok(id)
    }

    /// Cancel a booking, release its seats and drop it from the active set.
    pub fn cancel(&mut self, id: BookingId) -> Result<Booking> {
        let mut booking = self
            .bookings
            .remove(&id)
            .ok_or(Error::BookingNotFound { id })?;
        let index = self.flight_index(&booking.flight_number)?;
        booking.cancel(&mut self.flights[index], self.refund_policy);
        Ok(booking)
    }

    pub fn booking(&self, id: BookingId) -> Result<&Booking> {
        self.bookings.get(&id).ok_or(Error::BookingNotFound { id })
    }

    /// Active bookings in id order.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    /// Order meals for every seat of an existing booking.
    pub fn order_meals(&mut self, id: BookingId) -> Result<&Booking> {
        let number = self.booking(id)?.flight_number.clone();
        let index = self.flight_index(&number)?;
        let booking = self
            .bookings
            .get_mut(&id)
            .ok_or(Error::BookingNotFound { id })?;
        booking.order_meals(&mut self.flights[index]);
        Ok(booking)
    }

    pub fn booking_summary(&self, id: BookingId) -> Result<BookingSummary> {
        let booking = self.booking(id)?;
        let flight = self.flight(&booking.flight_number)?;
        Ok(booking.summary(flight))
    }

    pub fn flight_summaries(&self) -> Vec<FlightSummary> {
        self.flights.iter().map(FlightSummary::from_flight).collect()
    }

    pub fn availability(&self) -> Vec<SeatAvailability> {
        self.flights
            .iter()
            .map(SeatAvailability::from_flight)
            .collect()
    }

    pub fn meal_report(&self) -> Vec<MealReport> {
        self.flights.iter().map(MealReport::from_flight).collect()
    }
}
