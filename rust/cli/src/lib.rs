//! # sevenstud CLI
//!
//! Command-line frontend for the sevenstud engine: `sim` runs reproducible
//! self-play between bundled providers and records JSONL hand histories;
//! `deal` deals a single hand for inspection.
//!
//! The entry point is [`run`], which parses arguments and writes to the
//! injected output streams, returning a process exit code.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;

pub mod cli;
mod commands;
mod error;

use cli::{Commands, SevenstudCli};
use commands::{handle_deal_command, handle_sim_command};
pub use error::CliError;

/// Parses command-line arguments and dispatches to the matching subcommand.
///
/// Returns `0` on success and `2` on any error; help and version output go
/// to `out` and exit cleanly.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let parsed = match SevenstudCli::try_parse_from(args) {
        Ok(p) => p,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{}", e);
                    0
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    2
                }
            };
        }
    };

    let result = match parsed.command {
        Commands::Sim {
            hands,
            players,
            seed,
            output,
        } => handle_sim_command(hands, players, seed, output, out),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            2
        }
    }
}
