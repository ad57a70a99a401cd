//! Interactive operator menu.
//!
//! The loop reads from any [`BufRead`] and writes to any [`Write`], so it
//! runs the same against a terminal or an in-memory script.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use seatbook_lib::{BookingId, CabinClass, Error, Session};

use crate::output::{
    render_availability, render_booking, render_confirmation, render_flights, render_meals,
    render_search,
};
use crate::terminal::ColorPalette;

pub const EXIT_MESSAGE: &str = "Exiting. Thank you for using the Flight Ticket Booking System!";

/// One numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListFlights,
    SearchFlights,
    Book,
    Cancel,
    AvailableSeats,
    MealSeats,
    BookingSummary,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ListFlights,
        MenuChoice::SearchFlights,
        MenuChoice::Book,
        MenuChoice::Cancel,
        MenuChoice::AvailableSeats,
        MenuChoice::MealSeats,
        MenuChoice::BookingSummary,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> usize {
        MenuChoice::ALL
            .iter()
            .position(|c| *c == self)
            .map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ListFlights => "List flight details",
            MenuChoice::SearchFlights => "Search flights",
            MenuChoice::Book => "Handle booking",
            MenuChoice::Cancel => "Handle cancellation",
            MenuChoice::AvailableSeats => "Print all available seats for each flight",
            MenuChoice::MealSeats => "Print seat numbers with meals ordered for each flight",
            MenuChoice::BookingSummary => "Print booking summary",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s.trim().parse().map_err(|_| ())?;
        n.checked_sub(1)
            .and_then(|i| MenuChoice::ALL.get(i))
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Run the menu until the operator exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: W,
    palette: ColorPalette,
) -> io::Result<()> {
    Menu {
        session,
        input,
        out,
        palette,
    }
    .run()
}

struct Menu<'a, R, W> {
    session: &'a mut Session,
    input: R,
    out: W,
    palette: ColorPalette,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };
            let Ok(choice) = line.parse::<MenuChoice>() else {
                self.error("Invalid choice. Please try again.")?;
                continue;
            };
            match choice {
                MenuChoice::ListFlights => {
                    render_flights(&mut self.out, &self.session.flight_summaries())?
                }
                MenuChoice::SearchFlights => self.search()?,
                MenuChoice::Book => self.book()?,
                MenuChoice::Cancel => self.cancel()?,
                MenuChoice::AvailableSeats => {
                    render_availability(&mut self.out, &self.session.availability())?
                }
                MenuChoice::MealSeats => render_meals(&mut self.out, &self.session.meal_report())?,
                MenuChoice::BookingSummary => self.summary()?,
                MenuChoice::Exit => break,
            }
        }
        writeln!(self.out, "{EXIT_MESSAGE}")?;
        self.out.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}Menu:{}", self.palette.heading, self.palette.reset)?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{choice}")?;
        }
        Ok(())
    }

    /// Print `text` and read one line. `None` means input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a value, reporting `invalid` when it does not parse.
    fn prompt_parsed<T: FromStr>(&mut self, text: &str, invalid: &str) -> io::Result<Option<T>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.error(invalid)?;
                Ok(None)
            }
        }
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{}{}",
            self.palette.error, message, self.palette.reset
        )
    }

    fn report(&mut self, err: &Error) -> io::Result<()> {
        let message = match err {
            Error::InsufficientSeats { .. } => "Not enough seats available.".to_string(),
            other => capitalize(&other.to_string()),
        };
        self.error(&message)
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(source) = self.prompt("Enter the source location: ")? else {
            return Ok(());
        };
        let Some(destination) = self.prompt("Enter the destination location: ")? else {
            return Ok(());
        };
        let found: Vec<_> = self
            .session
            .search(&source, &destination)
            .into_iter()
            .map(seatbook_lib::FlightSummary::from_flight)
            .collect();
        render_search(&mut self.out, &source, &destination, &found)
    }

    fn book(&mut self) -> io::Result<()> {
        let Some(number) = self.prompt("Enter the flight number: ")? else {
            return Ok(());
        };
        let number = number.to_ascii_uppercase();
        if let Some(err) = self.session.flight(&number).err() {
            return self.report(&err);
        }

        writeln!(self.out, "Select Class: ")?;
        writeln!(self.out, "1. Business Class")?;
        writeln!(self.out, "2. Economy Class")?;
        let Some(class) = self.prompt_parsed::<CabinClass>("", "Invalid class selection.")? else {
            return Ok(());
        };
        let Some(count) = self.prompt_parsed::<usize>(
            "Enter the number of seats to book: ",
            "Invalid number of seats.",
        )?
        else {
            return Ok(());
        };

        if count == 0 {
            return self.report(&Error::EmptySeatRequest);
        }
        let lookup = self.session.flight(&number).map(|flight| {
            let available = flight.available_seats(class);
            let take = count.min(available.len());
            (available.len(), flight.seat_labels(&available[..take]))
        });
        let chosen = match lookup {
            Ok((available, _)) if count > available => {
                return self.error("Not enough seats available.");
            }
            Ok((_, chosen)) => chosen,
            Err(err) => return self.report(&err),
        };
        writeln!(self.out, "Available Seats:")?;
        writeln!(self.out, "{}", chosen.join(" "))?;

        let Some(meal) = self.prompt("Do you want to order meals? (Y/N) ")? else {
            return Ok(());
        };
        let with_meals = meal.eq_ignore_ascii_case("y");

        let summary = self
            .session
            .book(&number, class, count, with_meals)
            .and_then(|id| self.session.booking_summary(id));
        match summary {
            Ok(summary) => render_confirmation(&mut self.out, &self.palette, &summary),
            Err(err) => self.report(&err),
        }
    }

    fn cancel(&mut self) -> io::Result<()> {
        let Some(id) =
            self.prompt_parsed::<BookingId>("Enter the Booking ID: ", "Invalid booking ID.")?
        else {
            return Ok(());
        };
        match self.session.cancel(id) {
            Ok(_) => writeln!(
                self.out,
                "{}Cancellation successful!{}",
                self.palette.success, self.palette.reset
            ),
            Err(err) => self.report(&err),
        }
    }

    fn summary(&mut self) -> io::Result<()> {
        let Some(id) =
            self.prompt_parsed::<BookingId>("Enter the Booking ID: ", "Invalid booking ID.")?
        else {
            return Ok(());
        };
        match self.session.booking_summary(id) {
            Ok(summary) => render_booking(&mut self.out, &summary),
            Err(err) => self.report(&err),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
