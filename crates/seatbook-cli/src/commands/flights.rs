//! Flight listing and route search handlers.

use std::io;

use anyhow::Result;

use seatbook_lib::{FlightSummary, Session};

use seatbook_cli::output::{render_flights, render_json, render_search, OutputFormat};

/// Handle the flights subcommand.
pub fn handle_list_flights(session: &Session, format: OutputFormat) -> Result<()> {
    let summaries = session.flight_summaries();
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => render_flights(&mut stdout, &summaries)?,
        OutputFormat::Json => render_json(&mut stdout, &summaries)?,
    }
    Ok(())
}

/// Handle the search subcommand.
pub fn handle_search(session: &Session, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let found: Vec<FlightSummary> = session
        .search(from, to)
        .into_iter()
        .map(FlightSummary::from_flight)
        .collect();
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => render_search(&mut stdout, from, to, &found)?,
        OutputFormat::Json => render_json(&mut stdout, &found)?,
    }
    Ok(())
}
