// Module exports for CLI subcommands.
//
// Each module handles one subcommand. main.rs parses arguments, builds the
// session once and dispatches here.

pub mod flights;
pub mod menu;
pub mod seats;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use seatbook_lib::{
    load_flights_from_dir, load_pricing_config, resolve_flight_dir, PricingConfig, RefundPolicy,
    Session,
};

/// Resolve the flight directory and pricing, then load every flight into a session.
pub fn load_session(
    data_dir: Option<&Path>,
    pricing: Option<&Path>,
    refund_policy: RefundPolicy,
) -> Result<Session> {
    let pricing = match pricing {
        Some(path) => load_pricing_config(path)
            .with_context(|| format!("failed to load pricing from {}", path.display()))?,
        None => PricingConfig::default(),
    };

    let dir = resolve_flight_dir(data_dir).context("failed to locate the flight directory")?;
    let report = load_flights_from_dir(&dir, &pricing)
        .with_context(|| format!("failed to load flights from {}", dir.display()))?;

    for skipped in &report.skipped {
        warn!(error = %skipped.error, "skipped {}", skipped.path.display());
    }

    Ok(Session::new(report.flights).with_refund_policy(refund_policy))
}
