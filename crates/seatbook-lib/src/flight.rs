//! Flight seat inventory and surge pricing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::SeatLayout;
use crate::seat::{Seat, SeatPosition};

/// Cabin class a seat belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Business,
    Economy,
}

impl CabinClass {
    pub const ALL: [CabinClass; 2] = [CabinClass::Business, CabinClass::Economy];
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CabinClass::Business => "business",
            CabinClass::Economy => "economy",
        };
        f.write_str(value)
    }
}

impl FromStr for CabinClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "business" | "b" | "1" => Ok(CabinClass::Business),
            "economy" | "e" | "2" => Ok(CabinClass::Economy),
            other => Err(format!(
                "unknown cabin class '{other}'; expected business or economy"
            )),
        }
    }
}

/// Fare and meal pricing applied to a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub economy_base: i64,
    pub economy_surge: i64,
    pub business_base: i64,
    pub business_surge: i64,
    /// Flat charge per seat with a meal.
    pub meal_cost: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            economy_base: 1000,
            economy_surge: 100,
            business_base: 2000,
            business_surge: 200,
            meal_cost: 200,
        }
    }
}

impl PricingConfig {
    pub fn base(&self, class: CabinClass) -> i64 {
        match class {
            CabinClass::Business => self.business_base,
            CabinClass::Economy => self.economy_base,
        }
    }

    pub fn surge(&self, class: CabinClass) -> i64 {
        match class {
            CabinClass::Business => self.business_surge,
            CabinClass::Economy => self.economy_surge,
        }
    }
}

/// A flight with its two cabin grids and running booking-event counter.
#[derive(Debug, Clone)]
pub struct Flight {
    pub number: String,
    pub source: String,
    pub destination: String,
    business: Vec<Vec<Seat>>,
    economy: Vec<Vec<Seat>>,
    pricing: PricingConfig,
    total_bookings: u32,
}

impl Flight {
    /// Create a flight with empty cabins and default pricing.
    pub fn new(
        number: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            source: source.into(),
            destination: destination.into(),
            business: Vec::new(),
            economy: Vec::new(),
            pricing: PricingConfig::default(),
            total_bookings: 0,
        }
    }

    pub fn with_layouts(mut self, business: &SeatLayout, economy: &SeatLayout) -> Self {
        self.business = business.generate();
        self.economy = economy.generate();
        self
    }

    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Number of booking events made against this flight.
    pub fn total_bookings(&self) -> u32 {
        self.total_bookings
    }

    pub fn grid(&self, class: CabinClass) -> &[Vec<Seat>] {
        match class {
            CabinClass::Business => &self.business,
            CabinClass::Economy => &self.economy,
        }
    }

    fn grid_mut(&mut self, class: CabinClass) -> &mut [Vec<Seat>] {
        match class {
            CabinClass::Business => &mut self.business,
            CabinClass::Economy => &mut self.economy,
        }
    }

    pub fn seat(&self, position: SeatPosition) -> Option<&Seat> {
        self.grid(position.class)
            .get(position.row_index)
            .and_then(|row| row.get(position.column_index))
    }

    fn seat_mut(&mut self, position: SeatPosition) -> Option<&mut Seat> {
        self.grid_mut(position.class)
            .get_mut(position.row_index)
            .and_then(|row| row.get_mut(position.column_index))
    }

    /// A flight is business-capable iff its business grid has any rows.
    pub fn is_business_capable(&self) -> bool {
        !self.business.is_empty()
    }

    fn positions(&self, class: CabinClass) -> impl Iterator<Item = (SeatPosition, &Seat)> + '_ {
        self.grid(class).iter().enumerate().flat_map(move |(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, seat)| (SeatPosition::new(class, r, c), seat))
        })
    }

    /// Unbooked seats of `class` in row-major order.
    pub fn available_seats(&self, class: CabinClass) -> Vec<SeatPosition> {
        self.positions(class)
            .filter(|(_, seat)| !seat.is_booked())
            .map(|(position, _)| position)
            .collect()
    }

    pub fn seat_count(&self, class: CabinClass) -> usize {
        self.grid(class).iter().map(Vec::len).sum()
    }

    pub fn booked_count(&self, class: CabinClass) -> usize {
        self.positions(class)
            .filter(|(_, seat)| seat.is_booked())
            .count()
    }

    /// Seats with a meal ordered, business cabin first.
    pub fn meal_seats(&self) -> Vec<&Seat> {
        CabinClass::ALL
            .into_iter()
            .flat_map(|class| self.positions(class))
            .filter(|(_, seat)| seat.has_meal())
            .map(|(_, seat)| seat)
            .collect()
    }

    /// Display labels for a set of positions. Unknown positions are skipped.
    pub fn seat_labels(&self, seats: &[SeatPosition]) -> Vec<String> {
        seats
            .iter()
            .filter_map(|position| self.seat(*position))
            .map(Seat::label)
            .collect()
    }

    fn for_each_seat(&mut self, seats: &[SeatPosition], mut apply: impl FnMut(&mut Seat)) {
        for position in seats {
            if let Some(seat) = self.seat_mut(*position) {
                apply(seat);
            }
        }
    }

    /// Book every seat in the batch. Counts as one booking event.
    pub fn book_seats(&mut self, seats: &[SeatPosition]) {
        self.for_each_seat(seats, Seat::book);
        self.total_bookings += 1;
    }

    /// Release every seat in the batch. The booking-event counter is untouched.
    pub fn cancel_seats(&mut self, seats: &[SeatPosition]) {
        self.for_each_seat(seats, Seat::cancel);
    }

    /// Flag meals on the batch. Seats need not be booked.
    pub fn order_meals(&mut self, seats: &[SeatPosition]) {
        self.for_each_seat(seats, Seat::order_meal);
    }

    pub fn clear_meals(&mut self, seats: &[SeatPosition]) {
        self.for_each_seat(seats, Seat::clear_meal);
    }

    /// Undo one booking event on the surge counter.
    pub fn release_booking_event(&mut self) {
        self.total_bookings = self.total_bookings.saturating_sub(1);
    }

    /// Fare for a booking event of `class` at the current counter.
    ///
    /// `base + surge * (total_bookings - 1)`. The seat batch does not affect
    /// the result; the surge term never goes negative. Amounts saturate at
    /// the `i64` bounds.
    pub fn price_for(&self, _seats: &[SeatPosition], class: CabinClass) -> i64 {
        let prior_events = i64::from(self.total_bookings.saturating_sub(1));
        self.pricing
            .base(class)
            .saturating_add(self.pricing.surge(class).saturating_mul(prior_events))
    }

    pub fn meal_cost_for(&self, seats: &[SeatPosition]) -> i64 {
        let count = i64::try_from(seats.len()).unwrap_or(i64::MAX);
        self.pricing.meal_cost.saturating_mul(count)
    }

    /// Case-insensitive route match.
    pub fn serves(&self, source: &str, destination: &str) -> bool {
        self.source.eq_ignore_ascii_case(source.trim())
            && self.destination.eq_ignore_ascii_case(destination.trim())
    }
}
