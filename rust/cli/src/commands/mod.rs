//! Command handlers.
//!
//! Each subcommand lives in its own module and exposes
//! `handle_COMMAND_command(...) -> Result<(), CliError>`, writing through
//! the `&mut dyn Write` streams it is handed.

pub mod cfg;
pub mod play;
pub mod roll;
pub mod rules;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use roll::handle_roll_command;
pub use rules::handle_rules_command;
pub use sim::handle_sim_command;

use crate::config::Config;
use crate::error::CliError;
use yahtzee_engine::game::Game;
use yahtzee_engine::logger::GameLogger;

/// Flag, then configured seed, then a fresh random one.
pub(crate) fn resolve_seed(flag: Option<u64>, cfg: &Config) -> u64 {
    flag.or(cfg.seed).unwrap_or_else(rand::random)
}

pub(crate) fn open_logger(path: Option<&str>) -> Result<Option<GameLogger>, CliError> {
    match path {
        Some(p) => Ok(Some(GameLogger::create(p)?)),
        None => Ok(None),
    }
}

pub(crate) fn write_history(logger: Option<&mut GameLogger>, game: &Game) -> Result<(), CliError> {
    if let Some(logger) = logger {
        for record in game.history() {
            logger.write(record)?;
        }
    }
    Ok(())
}
