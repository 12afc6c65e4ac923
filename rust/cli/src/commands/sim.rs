//! Simulation command: a strategy plays many games, each seeded with
//! `base_seed + game_index`, and the totals are summarized.
//!
//! # Environment Variables
//!
//! - `YAHTZEE_SIM_BREAK_AFTER`: stop after N games as if interrupted (for testing)

use super::{open_logger, resolve_seed, write_history};
use crate::config;
use crate::error::CliError;
use std::io::Write;
use yahtzee_ai::{create_strategy, play_game};
use yahtzee_engine::game::Game;

pub const BREAK_AFTER_ENV: &str = "YAHTZEE_SIM_BREAK_AFTER";

/// Aggregate of final totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSummary {
    pub games: usize,
    pub mean: f64,
    pub min: u32,
    pub max: u32,
}

impl SimSummary {
    pub fn from_totals(totals: &[u32]) -> Option<Self> {
        let min = *totals.iter().min()?;
        let max = *totals.iter().max()?;
        let sum: u64 = totals.iter().map(|&t| u64::from(t)).sum();
        Some(Self {
            games: totals.len(),
            mean: sum as f64 / totals.len() as f64,
            min,
            max,
        })
    }
}

pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    ai: Option<String>,
    log: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("--games must be at least 1".into()));
    }
    let cfg = config::load()?;
    let base_seed = resolve_seed(seed, &cfg);
    let name = ai.unwrap_or_else(|| cfg.ai.clone());
    let strategy = create_strategy(&name)?;
    let mut logger = open_logger(log.as_deref())?;
    let break_after: Option<u32> = std::env::var(BREAK_AFTER_ENV)
        .ok()
        .and_then(|v| v.parse().ok());

    let mut totals = Vec::with_capacity(games as usize);
    for i in 0..games {
        if break_after.is_some_and(|n| i >= n) {
            writeln!(out, "Interrupted: completed {}/{}", i, games)?;
            return Err(CliError::Interrupted(format!("{} of {} games", i, games)));
        }
        let mut game = Game::new(cfg.game_settings(base_seed.wrapping_add(u64::from(i))))?;
        if let Some(l) = logger.as_mut() {
            game.set_game_id(l.next_id());
        }
        let total = play_game(strategy.as_ref(), &mut game)?;
        write_history(logger.as_mut(), &game)?;
        tracing::debug!(game = i + 1, total, "simulated game");
        totals.push(total);
    }

    let summary = SimSummary::from_totals(&totals)
        .ok_or_else(|| CliError::InvalidInput("no games were played".into()))?;
    writeln!(
        out,
        "Simulated: {} games (strategy={}, seed={})",
        summary.games,
        strategy.name(),
        base_seed
    )?;
    writeln!(out, "Mean: {:.2}", summary.mean)?;
    writeln!(out, "Min: {}", summary.min)?;
    writeln!(out, "Max: {}", summary.max)?;
    Ok(())
}
