//! Interactive menu handler bound to the process's stdin and stdout.

use std::io;

use anyhow::{Context, Result};

use seatbook_cli::menu::run_menu;
use seatbook_cli::output::print_logo;
use seatbook_cli::terminal::ColorPalette;
use seatbook_lib::Session;

/// Handle the menu subcommand (the default when none is given).
pub fn handle_menu(session: &mut Session, show_logo: bool) -> Result<()> {
    let palette = ColorPalette::detect();
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    if show_logo {
        print_logo(&mut stdout, &palette)?;
    }
    run_menu(session, stdin, stdout, palette).context("interactive menu failed")
}
