//! Common test utilities and fixture helpers.

use std::fs;
use std::path::{Path, PathBuf};

use seatbook_lib::{Flight, SeatLayout};

/// Directory holding the sample flight files used by tests.
#[allow(dead_code)]
pub fn fixture_flight_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/flight_details")
}

/// Flight with business `{2, 4, 1, 8}` and economy `{3, 6, 2, 18}`.
#[allow(dead_code)]
pub fn a112() -> Flight {
    Flight::new("A112", "Chennai", "Mumbai")
        .with_layouts(&SeatLayout::new(2, 4, 1, 8), &SeatLayout::new(3, 6, 2, 18))
}

/// Write a flight file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_flight_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write flight file");
    path
}
