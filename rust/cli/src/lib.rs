//! # Yahtzee CLI Library
//!
//! Command-line front end for the Yahtzee engine. [`run`] parses the
//! arguments and dispatches to one of the subcommands:
//!
//! - `play`: play one game, interactively or with a strategy
//! - `sim`: let a strategy play many games and summarize the scores
//! - `roll`: roll one hand and preview every rule
//! - `rules`: list the configured rule table
//! - `cfg`: show the resolved configuration
//!
//! ```no_run
//! use std::io;
//! let args = vec!["yahtzee", "sim", "--games", "10", "--seed", "1"];
//! let code = yahtzee_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::{Cursor, Write};

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, YahtzeeCli};
use commands::{
    handle_cfg_command, handle_play_command, handle_roll_command, handle_rules_command,
    handle_sim_command,
};

pub use cli::Vs;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "roll", "rules", "cfg"];

/// Parses `args` and runs the selected command.
///
/// Returns the process exit code: `0` on success, `2` on errors and `130`
/// when a game or simulation was interrupted.
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = yahtzee_cli::run(["yahtzee", "roll", "--seed", "42"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("die 1 has value"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match YahtzeeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout with success
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: yahtzee <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: yahtzee --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play { vs, seed, ai, log } => match std::env::var(io_utils::TEST_INPUT_ENV) {
            Ok(script) => {
                let mut input = Cursor::new(script.into_bytes());
                handle_play_command(vs, seed, ai, log, out, err, &mut input)
            }
            Err(_) => {
                let stdin = std::io::stdin();
                let mut lock = stdin.lock();
                handle_play_command(vs, seed, ai, log, out, err, &mut lock)
            }
        },
        Commands::Sim {
            games,
            seed,
            ai,
            log,
        } => handle_sim_command(games, seed, ai, log, out),
        Commands::Roll { seed } => handle_roll_command(seed, out),
        Commands::Rules { json } => handle_rules_command(json, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            write_or_exit!(err, "Interrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
