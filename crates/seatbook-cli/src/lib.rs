//! Seatbook CLI library.
//!
//! Provides the interactive operator menu, output renderers and terminal
//! styling used by the `seatbook-cli` binary.

pub mod menu;
pub mod output;
pub mod terminal;
