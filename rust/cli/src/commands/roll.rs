//! `roll`: roll one hand and show what every rule would pay for it.

use super::resolve_seed;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use std::io::Write;
use yahtzee_engine::game::Game;

pub fn handle_roll_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = resolve_seed(seed, &cfg);
    let mut game = Game::new(cfg.game_settings(seed))?;
    game.roll()?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "{}", format_hand(game.hand()))?;
    writeln!(out, "{}", format_board(&game.overview()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(seed: u64) -> String {
        let mut out = Vec::new();
        handle_roll_command(Some(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(roll(42), roll(42));
        assert!(roll(42).contains("Seed: 42"));
    }

    #[test]
    fn shows_five_dice_and_every_rule() {
        let text = roll(7);
        assert_eq!(text.matches("has value").count(), 5);
        assert!(text.contains("14. Chance: +"));
    }
}
