mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use seatbook_cli::output::OutputFormat;
use seatbook_lib::RefundPolicy;

use crate::commands::{flights, load_session, menu, seats};

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight seat inventory and booking console")]
struct Cli {
    /// Directory holding one flight definition file per flight.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON file overriding base fares, surge increments and meal cost.
    #[arg(long, global = true)]
    pricing: Option<PathBuf>,

    /// How cancellations adjust the booking price and surge counter.
    #[arg(long, value_enum, default_value_t = RefundPolicyArg::Recompute, global = true)]
    refund_policy: RefundPolicyArg,

    /// Output format for one-shot subcommands.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner shown before the interactive menu.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive booking menu (default).
    Menu,
    /// List all flights with seat availability.
    Flights,
    /// Search flights by route, ignoring case.
    Search {
        /// Source location.
        #[arg(long = "from")]
        from: String,
        /// Destination location.
        #[arg(long = "to")]
        to: String,
    },
    /// Print every available seat per flight.
    Seats,
    /// Print seats with meals ordered per flight.
    Meals,
}

/// Refund policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RefundPolicyArg {
    /// Subtract the fare re-evaluated at the current surge counter.
    Recompute,
    /// Refund the charged fare and release the surge booking event.
    Exact,
}

impl From<RefundPolicyArg> for RefundPolicy {
    fn from(arg: RefundPolicyArg) -> Self {
        match arg {
            RefundPolicyArg::Recompute => RefundPolicy::Recompute,
            RefundPolicyArg::Exact => RefundPolicy::Exact,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut session = load_session(
        cli.data_dir.as_deref(),
        cli.pricing.as_deref(),
        cli.refund_policy.into(),
    )?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => menu::handle_menu(&mut session, !cli.no_logo),
        Command::Flights => flights::handle_list_flights(&session, cli.format),
        Command::Search { from, to } => flights::handle_search(&session, &from, &to, cli.format),
        Command::Seats => seats::handle_seats(&session, cli.format),
        Command::Meals => seats::handle_meals(&session, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
