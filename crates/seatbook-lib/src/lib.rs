//! Seatbook library entry points.
//!
//! This crate models a flight's seat inventory (cabin grids of seats),
//! surge pricing driven by booking events, meal accounting, and the
//! session that owns flights and bookings for the lifetime of the process.
//! The CLI should only depend on the items exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod booking;
pub mod error;
pub mod flight;
pub mod layout;
pub mod loader;
pub mod seat;
pub mod session;
pub mod summary;

pub use booking::{Booking, BookingId, RefundPolicy};
pub use error::{Error, Result};
pub use flight::{CabinClass, Flight, PricingConfig};
pub use layout::SeatLayout;
pub use loader::{
    load_flight_file, load_flights_from_dir, load_pricing_config, parse_flight,
    resolve_flight_dir, LoadReport, SkippedFile,
};
pub use seat::{Seat, SeatPosition};
pub use session::Session;
pub use summary::{BookingSummary, CabinAvailability, FlightSummary, MealReport, SeatAvailability};
