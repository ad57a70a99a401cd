use std::fmt;

use serde::Serialize;

use crate::flight::CabinClass;

/// Column marker used for every non-aisle seat in a row.
pub const MIDDLE_COLUMN: char = 'M';

/// A single seat slot within a cabin grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub row: u32,
    pub column: char,
    booked: bool,
    meal_ordered: bool,
}

impl Seat {
    /// Create an unbooked seat without a meal.
    pub fn new(row: u32, column: char) -> Self {
        Self {
            row,
            column,
            booked: false,
            meal_ordered: false,
        }
    }

    pub fn book(&mut self) {
        self.booked = true;
    }

    pub fn cancel(&mut self) {
        self.booked = false;
    }

    pub fn order_meal(&mut self) {
        self.meal_ordered = true;
    }

    pub fn clear_meal(&mut self) {
        self.meal_ordered = false;
    }

    pub fn is_booked(&self) -> bool {
        self.booked
    }

    pub fn has_meal(&self) -> bool {
        self.meal_ordered
    }

    /// Display identity combining row and column, e.g. `3_B`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.row, self.column)
    }
}

/// Address of a seat inside one flight's cabin grids.
///
/// Bookings hold positions rather than references so a flight can be
/// mutated while many bookings point into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeatPosition {
    pub class: CabinClass,
    pub row_index: usize,
    pub column_index: usize,
}

impl SeatPosition {
    pub fn new(class: CabinClass, row_index: usize, column_index: usize) -> Self {
        Self {
            class,
            row_index,
            column_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_then_cancel_leaves_seat_free() {
        let mut seat = Seat::new(3, 'B');
        seat.book();
        seat.book();
        assert!(seat.is_booked());
        seat.cancel();
        assert!(!seat.is_booked());
    }

    #[test]
    fn meal_can_be_ordered_on_unbooked_seat() {
        let mut seat = Seat::new(1, 'A');
        seat.order_meal();
        assert!(seat.has_meal());
        assert!(!seat.is_booked());
    }

    #[test]
    fn label_combines_row_and_column() {
        assert_eq!(Seat::new(3, 'B').label(), "3_B");
        assert_eq!(Seat::new(12, MIDDLE_COLUMN).to_string(), "12_M");
    }
}
