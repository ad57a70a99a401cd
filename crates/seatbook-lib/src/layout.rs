//! Cabin seat layout tuples and seat grid generation.
//!
//! A layout is written as a brace-delimited tuple
//! `{rows, seatsPerRow, aisleSeatsPerSide, totalSeats}`. The first and last
//! `aisleSeatsPerSide` columns of each row get sequential letters; every
//! column in between is labelled [`MIDDLE_COLUMN`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::seat::{Seat, MIDDLE_COLUMN};

/// Widest row that can still be lettered `A..=Z`.
pub const MAX_SEATS_PER_ROW: u32 = 26;

/// Largest number of rows a single cabin may declare.
pub const MAX_ROWS: u32 = 999;

/// Seat configuration for one cabin class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeatLayout {
    pub rows: u32,
    pub seats_per_row: u32,
    pub aisle_seats: u32,
    /// Seat total declared by the source file. Not used to build the grid.
    pub declared_total: u32,
}

impl SeatLayout {
    pub fn new(rows: u32, seats_per_row: u32, aisle_seats: u32, declared_total: u32) -> Self {
        Self {
            rows,
            seats_per_row,
            aisle_seats,
            declared_total,
        }
    }

    /// Number of seats the generated grid will contain.
    pub fn capacity(&self) -> u32 {
        self.rows.saturating_mul(self.seats_per_row)
    }

    /// True when the declared total disagrees with `rows * seats_per_row`.
    pub fn declared_mismatch(&self) -> bool {
        self.declared_total != self.capacity()
    }

    /// Whether the 1-based column `column` is an aisle-side seat.
    fn is_lettered(&self, column: u32) -> bool {
        column <= self.aisle_seats || column > self.seats_per_row.saturating_sub(self.aisle_seats)
    }

    /// Build the `rows × seats_per_row` grid. Rows are numbered from 1.
    pub fn generate(&self) -> Vec<Vec<Seat>> {
        (1..=self.rows)
            .map(|row| {
                (1..=self.seats_per_row)
                    .map(|column| {
                        let label = if self.is_lettered(column) {
                            column_letter(column)
                        } else {
                            MIDDLE_COLUMN
                        };
                        Seat::new(row, label)
                    })
                    .collect()
            })
            .collect()
    }
}

fn column_letter(column: u32) -> char {
    char::from_u32(u32::from(b'A') + column - 1).unwrap_or(MIDDLE_COLUMN)
}

impl fmt::Display for SeatLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}, {}}}",
            self.rows, self.seats_per_row, self.aisle_seats, self.declared_total
        )
    }
}

impl FromStr for SeatLayout {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = |message: &str| Error::InvalidLayout {
            input: input.to_string(),
            message: message.to_string(),
        };

        let trimmed = input.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| invalid("expected a brace-delimited tuple"))?;

        let values = inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u32>()
                    .map_err(|err| invalid(&format!("'{part}' is not a seat count: {err}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let &[rows, seats_per_row, aisle_seats, declared_total] = values.as_slice() else {
            return Err(invalid(&format!(
                "expected 4 values, found {}",
                values.len()
            )));
        };

        if seats_per_row > MAX_SEATS_PER_ROW {
            return Err(invalid(&format!(
                "at most {MAX_SEATS_PER_ROW} seats per row are supported"
            )));
        }

        if rows > MAX_ROWS {
            return Err(invalid(&format!("at most {MAX_ROWS} rows are supported")));
        }

        Ok(Self::new(rows, seats_per_row, aisle_seats, declared_total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(grid: &[Vec<Seat>]) -> Vec<String> {
        grid.iter()
            .map(|row| row.iter().map(|s| s.column).collect())
            .collect()
    }

    #[test]
    fn parses_tuple_with_loose_whitespace() {
        let layout: SeatLayout = " {2,4 , 1,  8} ".parse().expect("valid layout");
        assert_eq!(layout, SeatLayout::new(2, 4, 1, 8));
        assert_eq!(layout.to_string(), "{2, 4, 1, 8}");
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(matches!(
            "{2, 4, 1}".parse::<SeatLayout>(),
            Err(Error::InvalidLayout { .. })
        ));
        assert!(matches!(
            "2, 4, 1, 8".parse::<SeatLayout>(),
            Err(Error::InvalidLayout { .. })
        ));
        assert!(matches!(
            "{2, x, 1, 8}".parse::<SeatLayout>(),
            Err(Error::InvalidLayout { .. })
        ));
        assert!(matches!(
            "{1, 27, 1, 27}".parse::<SeatLayout>(),
            Err(Error::InvalidLayout { .. })
        ));
    }

    #[test]
    fn rejects_oversized_row_counts() {
        assert!(matches!(
            "{200000000, 26, 1, 0}".parse::<SeatLayout>(),
            Err(Error::InvalidLayout { .. })
        ));
        assert!("{999, 26, 2, 25974}".parse::<SeatLayout>().is_ok());
    }

    #[test]
    fn capacity_saturates_instead_of_overflowing() {
        let layout = SeatLayout::new(u32::MAX, MAX_SEATS_PER_ROW, 1, 0);
        assert_eq!(layout.capacity(), u32::MAX);
        assert!(layout.declared_mismatch());
    }

    #[test]
    fn business_grid_letters_only_aisle_columns() {
        let grid = SeatLayout::new(2, 4, 1, 8).generate();
        assert_eq!(labels(&grid), vec!["AMMD", "AMMD"]);
        assert_eq!(grid[1][0].row, 2);
    }

    #[test]
    fn economy_grid_letters_two_per_side() {
        let grid = SeatLayout::new(3, 6, 2, 18).generate();
        assert_eq!(labels(&grid), vec!["ABMMEF"; 3]);
    }

    #[test]
    fn declared_total_does_not_affect_generation() {
        let layout = SeatLayout::new(2, 3, 1, 99);
        assert!(layout.declared_mismatch());
        let grid = layout.generate();
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn zero_rows_produce_empty_grid() {
        assert!(SeatLayout::new(0, 0, 0, 0).generate().is_empty());
    }
}
