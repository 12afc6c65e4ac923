//! # Play Command
//!
//! One full game, driven either by a human on stdin or by a strategy.
//!
//! Human input per turn:
//! - reroll choice: comma-separated die numbers, `all`, or `0`/empty to keep
//! - rule choice: the 1-based number shown on the score board
//! - `q` or `quit` at either prompt stops the game and prints the partial result
//!
//! Invalid answers are reported on the error stream and asked again.

use super::{open_logger, resolve_seed, write_history};
use crate::cli::Vs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use crate::io_utils::prompt_line;
use crate::ui;
use crate::validation::{ParseResult, parse_reroll_selection, parse_rule_selection};
use std::io::{BufRead, Write};
use yahtzee_ai::{Strategy, create_strategy, play_turn};
use yahtzee_engine::errors::GameError;
use yahtzee_engine::game::Game;
use yahtzee_engine::turn::TurnPhase;

const REROLL_PROMPT: &str =
    "Choose which dice to re-roll (comma-separated, 'all', or 0 to continue): ";
const RULE_PROMPT: &str = "Choose which scoring rule to use: ";

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Finished,
    Quit,
    InputClosed,
}

/// Handle the play command.
///
/// Quitting is a normal exit; running out of input before the game ends is
/// reported as [`CliError::Interrupted`]. Turn records are written to `log`
/// in both cases.
pub fn handle_play_command(
    vs: Vs,
    seed: Option<u64>,
    ai: Option<String>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = resolve_seed(seed, &cfg);
    let mut game = Game::new(cfg.game_settings(seed))?;
    let mut logger = open_logger(log.as_deref())?;
    if let Some(l) = logger.as_mut() {
        game.set_game_id(l.next_id());
    }
    let rule_count = game.board().rule_count();

    writeln!(
        out,
        "play: vs={} seed={} rules={}",
        vs.as_str(),
        seed,
        rule_count
    )?;

    let outcome = match vs {
        Vs::Human => {
            if ai.is_some() {
                ui::warn_parameter_unused(err, "ai", vs.as_str())?;
            }
            play_human(&mut game, out, err, stdin)?
        }
        Vs::Ai => {
            let name = ai.unwrap_or_else(|| cfg.ai.clone());
            let strategy = create_strategy(&name)?;
            play_ai(strategy.as_ref(), &mut game, out)?
        }
    };

    write_history(logger.as_mut(), &game)?;

    writeln!(out)?;
    if outcome == Outcome::Finished {
        writeln!(out, "Congratulations! You have finished the game!")?;
    } else {
        writeln!(
            out,
            "Game stopped after {} of {} turns",
            game.turns_played(),
            rule_count
        )?;
    }
    writeln!(out, "{}", format_board(&game.overview()))?;
    writeln!(out, "Total points: {}", game.total_points())?;

    match outcome {
        Outcome::InputClosed => Err(CliError::Interrupted(
            "input ended before the game finished".to_string(),
        )),
        _ => Ok(()),
    }
}

fn play_human(
    game: &mut Game,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Outcome, CliError> {
    let rule_count = game.board().rule_count();
    let dice_count = game.hand().dice_count();

    while !game.is_over() {
        writeln!(out)?;
        writeln!(out, "Turn {}/{}", game.turns_played() + 1, rule_count)?;
        writeln!(out, "Rolling dice...")?;
        game.roll()?;
        writeln!(out, "{}", format_hand(game.hand()))?;

        while game.phase() == TurnPhase::AwaitingRerollChoice {
            let Some(line) = prompt_line(REROLL_PROMPT, out, stdin)? else {
                return Ok(Outcome::InputClosed);
            };
            let selection = match parse_reroll_selection(&line, dice_count) {
                ParseResult::Value(s) => s,
                ParseResult::Quit => return Ok(Outcome::Quit),
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
            };
            let before = game.turn().rolls_used();
            match game.reroll(selection) {
                Ok(rolls) if rolls > before => {
                    writeln!(out, "Rolling dice...")?;
                    writeln!(out, "{}", format_hand(game.hand()))?;
                }
                Ok(_) => {}
                Err(e @ GameError::OutOfRange { .. }) => ui::write_error(err, &e.to_string())?,
                Err(e) => return Err(e.into()),
            }
        }

        writeln!(out, "{}", format_board(&game.overview()))?;
        loop {
            let Some(line) = prompt_line(RULE_PROMPT, out, stdin)? else {
                return Ok(Outcome::InputClosed);
            };
            let number = match parse_rule_selection(&line, rule_count) {
                ParseResult::Value(n) => n,
                ParseResult::Quit => return Ok(Outcome::Quit),
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
            };
            match game.score(number) {
                Ok(points) => {
                    let rule = game.history().last().map(|r| r.rule.as_str()).unwrap_or("");
                    writeln!(out, "Adding {} points to {}", points, rule)?;
                    break;
                }
                Err(e @ (GameError::AlreadyScored(_) | GameError::RuleOutOfRange { .. })) => {
                    ui::write_error(err, &e.to_string())?
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(Outcome::Finished)
}

fn play_ai(
    strategy: &dyn Strategy,
    game: &mut Game,
    out: &mut dyn Write,
) -> Result<Outcome, CliError> {
    writeln!(out, "Strategy: {}", strategy.name())?;
    while !game.is_over() {
        play_turn(strategy, game)?;
        if let Some(rec) = game.history().last() {
            writeln!(
                out,
                "Turn {}: {:?} -> {} points on {} (total {})",
                rec.turn,
                rec.final_faces(),
                rec.points,
                rec.rule,
                rec.total
            )?;
        }
    }
    Ok(Outcome::Finished)
}
