//! Output formatting for flights, seats and bookings.
//!
//! Every renderer writes to a caller-supplied [`Write`] so the interactive
//! menu and the one-shot subcommands share the same layout.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use seatbook_lib::{BookingSummary, FlightSummary, MealReport, SeatAvailability};

use crate::terminal::{format_amount, ColorPalette};

/// Separator printed after each flight block.
pub const RULE: &str = "--------------------------------";

/// Output format for one-shot subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Console layout.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Print the CLI banner.
pub fn print_logo<W: Write>(out: &mut W, palette: &ColorPalette) -> io::Result<()> {
    writeln!(
        out,
        "{b}+--------------------------------------------+{r}
{b}|{r}{h}  SEATBOOK  >> FLIGHT TICKET BOOKING CONSOLE {r}{b}|{r}
{b}+--------------------------------------------+{r}",
        b = palette.border,
        h = palette.heading,
        r = palette.reset
    )
}

/// Serialize `value` as pretty JSON followed by a newline.
pub fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}

fn render_cabins<W: Write>(out: &mut W, summary: &FlightSummary) -> io::Result<()> {
    writeln!(out, "Business Class Seats: {}", summary.business)?;
    writeln!(out, "Economy Class Seats: {}", summary.economy)?;
    writeln!(out, "{RULE}")
}

/// Full flight listing with route and availability.
pub fn render_flights<W: Write>(out: &mut W, flights: &[FlightSummary]) -> io::Result<()> {
    writeln!(out, "Flight Details:")?;
    if flights.is_empty() {
        writeln!(out, "No flights loaded.")?;
    }
    for flight in flights {
        writeln!(out, "Flight Number: {}", flight.flight_number)?;
        writeln!(out, "Source: {}", flight.source)?;
        writeln!(out, "Destination: {}", flight.destination)?;
        render_cabins(out, flight)?;
    }
    Ok(())
}

/// Flights matching a route search.
pub fn render_search<W: Write>(
    out: &mut W,
    source: &str,
    destination: &str,
    flights: &[FlightSummary],
) -> io::Result<()> {
    if flights.is_empty() {
        return writeln!(out, "No flights found between {source} and {destination}");
    }
    writeln!(out, "Available Flights:")?;
    for flight in flights {
        writeln!(out, "Flight Number: {}", flight.flight_number)?;
        render_cabins(out, flight)?;
    }
    Ok(())
}

fn seat_list(labels: &[String]) -> String {
    format!("[{}]", labels.join(", "))
}

/// Unbooked seats per flight and cabin.
pub fn render_availability<W: Write>(out: &mut W, flights: &[SeatAvailability]) -> io::Result<()> {
    for flight in flights {
        writeln!(out, "Flight Number: {}", flight.flight_number)?;
        writeln!(
            out,
            "Available Business Class Seats: {}",
            seat_list(&flight.business)
        )?;
        writeln!(
            out,
            "Available Economy Class Seats: {}",
            seat_list(&flight.economy)
        )?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}

/// Seats with meals ordered per flight.
pub fn render_meals<W: Write>(out: &mut W, reports: &[MealReport]) -> io::Result<()> {
    for report in reports {
        writeln!(out, "Flight Number: {}", report.flight_number)?;
        writeln!(out, "Seats with meals ordered: {}", report.seats.join(" "))?;
        writeln!(out, "{RULE}")?;
    }
    Ok(())
}

/// Booking summary block.
pub fn render_booking<W: Write>(out: &mut W, summary: &BookingSummary) -> io::Result<()> {
    writeln!(out, "{summary}")
}

/// Confirmation printed after a successful booking.
pub fn render_confirmation<W: Write>(
    out: &mut W,
    palette: &ColorPalette,
    summary: &BookingSummary,
) -> io::Result<()> {
    writeln!(out, "{}Booking successful!{}", palette.success, palette.reset)?;
    writeln!(out, "Booking ID: {}", summary.booking_id)?;
    writeln!(out, "Total Price: {}", format_amount(summary.total_price))?;
    if summary.total_meal_cost > 0 {
        writeln!(
            out,
            "Total Meal Cost: {}",
            format_amount(summary.total_meal_cost)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatbook_lib::{BookingId, CabinAvailability, CabinClass};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    fn summary() -> FlightSummary {
        FlightSummary {
            flight_number: "A112".into(),
            source: "Chennai".into(),
            destination: "Mumbai".into(),
            total_bookings: 0,
            business: CabinAvailability {
                available: 8,
                total: 8,
            },
            economy: CabinAvailability {
                available: 16,
                total: 18,
            },
        }
    }

    #[test]
    fn flight_listing_shows_route_and_cabins() {
        let text = render(|out| render_flights(out, &[summary()]));
        assert!(text.contains("Flight Number: A112\nSource: Chennai\nDestination: Mumbai\n"));
        assert!(text.contains("Economy Class Seats: 16 available out of 18"));
        assert!(text.trim_end().ends_with(RULE));
    }

    #[test]
    fn empty_search_names_the_route() {
        let text = render(|out| render_search(out, "Pune", "Goa", &[]));
        assert_eq!(text, "No flights found between Pune and Goa\n");
    }

    #[test]
    fn availability_lists_labels_in_brackets() {
        let seats = SeatAvailability {
            flight_number: "B205".into(),
            business: vec![],
            economy: vec!["1_A".into(), "1_M".into()],
        };
        let text = render(|out| render_availability(out, &[seats]));
        assert!(text.contains("Available Business Class Seats: []"));
        assert!(text.contains("Available Economy Class Seats: [1_A, 1_M]"));
    }

    #[test]
    fn confirmation_formats_amounts() {
        let booking = BookingSummary {
            booking_id: BookingId(4),
            flight_number: "A112".into(),
            source: "Chennai".into(),
            destination: "Mumbai".into(),
            class: CabinClass::Business,
            total_price: 2400,
            total_meal_cost: 0,
            seats: vec!["1_A".into()],
        };
        let text = render(|out| render_confirmation(out, &ColorPalette::plain(), &booking));
        assert_eq!(text, "Booking successful!\nBooking ID: 4\nTotal Price: 2,400\n");
    }

    #[test]
    fn json_output_is_pretty_and_terminated() {
        let text = render(|out| render_json(out, &[summary()]));
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"flight_number\": \"A112\""));
        assert!(text.ends_with("]\n"));
    }
}
