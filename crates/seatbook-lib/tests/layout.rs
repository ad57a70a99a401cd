mod common;

use seatbook_lib::{CabinClass, SeatLayout};

use common::a112;

fn columns(layout: &str) -> Vec<String> {
    let layout: SeatLayout = layout.parse().expect("valid layout");
    layout
        .generate()
        .iter()
        .map(|row| row.iter().map(|seat| seat.column).collect())
        .collect()
}

#[test]
fn grid_dimensions_follow_rows_and_columns() {
    let flight = a112();
    let business = flight.grid(CabinClass::Business);
    assert_eq!(business.len(), 2);
    assert!(business.iter().all(|row| row.len() == 4));

    let economy = flight.grid(CabinClass::Economy);
    assert_eq!(economy.len(), 3);
    assert!(economy.iter().all(|row| row.len() == 6));
}

#[test]
fn aisle_letters_keep_their_column_position() {
    assert_eq!(columns("{2, 4, 1, 8}"), vec!["AMMD", "AMMD"]);
    assert_eq!(columns("{1, 6, 2, 6}"), vec!["ABMMEF"]);
    assert_eq!(columns("{1, 9, 3, 9}"), vec!["ABCMMMGHI"]);
}

#[test]
fn wide_aisle_count_letters_every_seat() {
    assert_eq!(columns("{1, 4, 3, 4}"), vec!["ABCD"]);
}

#[test]
fn declared_total_is_ignored() {
    assert_eq!(columns("{1, 2, 1, 500}"), vec!["AB"]);
}

#[test]
fn seat_rows_are_one_based() {
    let flight = a112();
    let last = flight.grid(CabinClass::Economy)[2][5].clone();
    assert_eq!(last.label(), "3_F");
}
