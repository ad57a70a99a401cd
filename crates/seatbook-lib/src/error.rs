use std::path::PathBuf;

use thiserror::Error;

use crate::booking::BookingId;
use crate::flight::CabinClass;

/// Convenient result alias for the seatbook library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a flight number is not present in the session.
    #[error("flight not found with number {number}{}", format_suggestions(.suggestions))]
    FlightNotFound {
        number: String,
        suggestions: Vec<String>,
    },

    /// Raised when a booking id is not among the active bookings.
    #[error("booking not found with ID {id}")]
    BookingNotFound { id: BookingId },

    /// Raised when a booking asks for more seats than the cabin has free.
    #[error("not enough {class} seats available: requested {requested}, available {available}")]
    InsufficientSeats {
        class: CabinClass,
        requested: usize,
        available: usize,
    },

    /// Raised when a booking asks for zero seats.
    #[error("a booking must reserve at least one seat")]
    EmptySeatRequest,

    /// Raised when a seat layout tuple cannot be parsed.
    #[error("invalid seat layout '{input}': {message}")]
    InvalidLayout { input: String, message: String },

    /// Raised when a flight definition file is malformed.
    #[error("invalid flight file {}{}: {message}", path.display(), format_line(*.line))]
    FlightFile {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },

    /// Flight directory could not be located at the resolved path.
    #[error("flight directory not found at {path}")]
    FlightDirNotFound { path: PathBuf },

    /// Raised when a pricing override file cannot be used.
    #[error("invalid pricing config {path}: {message}")]
    PricingConfig { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_line(line: Option<usize>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
