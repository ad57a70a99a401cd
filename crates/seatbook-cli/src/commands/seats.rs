//! Seat availability and meal report handlers.

use std::io;

use anyhow::Result;

use seatbook_lib::Session;

use seatbook_cli::output::{render_availability, render_json, render_meals, OutputFormat};

/// Handle the seats subcommand.
pub fn handle_seats(session: &Session, format: OutputFormat) -> Result<()> {
    let availability = session.availability();
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => render_availability(&mut stdout, &availability)?,
        OutputFormat::Json => render_json(&mut stdout, &availability)?,
    }
    Ok(())
}

/// Handle the meals subcommand.
pub fn handle_meals(session: &Session, format: OutputFormat) -> Result<()> {
    let reports = session.meal_report();
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => render_meals(&mut stdout, &reports)?,
        OutputFormat::Json => render_json(&mut stdout, &reports)?,
    }
    Ok(())
}
