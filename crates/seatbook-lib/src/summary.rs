//! Serializable views over flights and bookings for text and JSON output.

use std::fmt;

use serde::Serialize;

use crate::booking::BookingId;
use crate::flight::{CabinClass, Flight};

/// Free and total seats for one cabin.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CabinAvailability {
    pub available: usize,
    pub total: usize,
}

impl CabinAvailability {
    pub fn for_class(flight: &Flight, class: CabinClass) -> Self {
        Self {
            available: flight.available_seats(class).len(),
            total: flight.seat_count(class),
        }
    }
}

impl fmt::Display for CabinAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} available out of {}", self.available, self.total)
    }
}

/// Route and cabin availability of a flight.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightSummary {
    pub flight_number: String,
    pub source: String,
    pub destination: String,
    pub total_bookings: u32,
    pub business: CabinAvailability,
    pub economy: CabinAvailability,
}

impl FlightSummary {
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_number: flight.number.clone(),
            source: flight.source.clone(),
            destination: flight.destination.clone(),
            total_bookings: flight.total_bookings(),
            business: CabinAvailability::for_class(flight, CabinClass::Business),
            economy: CabinAvailability::for_class(flight, CabinClass::Economy),
        }
    }
}

/// Labels of unbooked seats per cabin for one flight.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeatAvailability {
    pub flight_number: String,
    pub business: Vec<String>,
    pub economy: Vec<String>,
}

impl SeatAvailability {
    pub fn from_flight(flight: &Flight) -> Self {
        let labels = |class| flight.seat_labels(&flight.available_seats(class));
        Self {
            flight_number: flight.number.clone(),
            business: labels(CabinClass::Business),
            economy: labels(CabinClass::Economy),
        }
    }
}

/// Labels of seats with a meal ordered for one flight.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MealReport {
    pub flight_number: String,
    pub seats: Vec<String>,
}

impl MealReport {
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_number: flight.number.clone(),
            seats: flight.meal_seats().iter().map(|seat| seat.label()).collect(),
        }
    }
}

/// Printable record of one booking.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub booking_id: BookingId,
    pub flight_number: String,
    pub source: String,
    pub destination: String,
    pub class: CabinClass,
    pub total_price: i64,
    pub total_meal_cost: i64,
    pub seats: Vec<String>,
}

impl fmt::Display for BookingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking ID: {}", self.booking_id)?;
        writeln!(f, "Flight Number: {}", self.flight_number)?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f, "Destination: {}", self.destination)?;
        writeln!(f, "Total Price: {}", self.total_price)?;
        writeln!(f, "Total Meal Cost: {}", self.total_meal_cost)?;
        write!(f, "Booked Seats: {}", self.seats.join(", "))
    }
}
