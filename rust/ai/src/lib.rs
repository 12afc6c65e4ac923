//! # yahtzee-ai: Automated Players
//!
//! Strategies that stand in for the player at the two decision points of a
//! turn: which dice to reroll, and which rule to score.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait defining the two decisions
//! - [`greedy`] - Keeps the most frequent face and scores the best open rule
//! - [`create_strategy`] - Factory function for creating strategies by name
//! - [`play_turn`] / [`play_game`] - Drive a [`Game`] with a strategy
//!
//! ## Quick Start
//!
//! ```rust
//! use yahtzee_ai::{create_strategy, play_game};
//! use yahtzee_engine::game::Game;
//!
//! let strategy = create_strategy("greedy").unwrap();
//! let mut game = Game::new_with_seed(42).unwrap();
//! let total = play_game(strategy.as_ref(), &mut game).unwrap();
//! assert!(game.is_over());
//! assert_eq!(total, game.total_points());
//! ```

use thiserror::Error;
use yahtzee_engine::errors::GameError;
use yahtzee_engine::game::Game;
use yahtzee_engine::hand::Hand;
use yahtzee_engine::scoreboard::ScoreBoard;
use yahtzee_engine::turn::{RerollSelection, TurnPhase};

pub mod greedy;

/// Names accepted by [`create_strategy`].
pub const STRATEGIES: &[&str] = &["greedy", "first"];

/// Decision-making for one player.
///
/// # Example Implementation
///
/// ```rust
/// use yahtzee_ai::Strategy;
/// use yahtzee_engine::hand::Hand;
/// use yahtzee_engine::scoreboard::ScoreBoard;
/// use yahtzee_engine::turn::RerollSelection;
///
/// struct AlwaysChance;
///
/// impl Strategy for AlwaysChance {
///     fn choose_reroll(
///         &self,
///         _faces: &[u8],
///         _board: &ScoreBoard,
///         _rolls_used: u8,
///     ) -> RerollSelection {
///         RerollSelection::All
///     }
///
///     fn choose_rule(&self, board: &ScoreBoard, _hand: &Hand) -> Option<usize> {
///         board.unscored_indices().last().map(|i| i + 1)
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysChance"
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Which dice to reroll given the current faces.
    fn choose_reroll(&self, faces: &[u8], board: &ScoreBoard, rolls_used: u8) -> RerollSelection;

    /// 1-based number of the rule to score, `None` once the board is full.
    fn choose_rule(&self, board: &ScoreBoard, hand: &Hand) -> Option<usize>;

    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown strategy '{0}' (expected one of: greedy, first)")]
pub struct UnknownStrategy(pub String);

/// Factory function to create strategies by name.
///
/// ```rust
/// use yahtzee_ai::create_strategy;
///
/// assert_eq!(create_strategy("greedy").unwrap().name(), "greedy");
/// assert!(create_strategy("oracle").is_err());
/// ```
pub fn create_strategy(name: &str) -> Result<Box<dyn Strategy>, UnknownStrategy> {
    match name {
        "greedy" => Ok(Box::new(greedy::GreedyStrategy::new())),
        "first" => Ok(Box::new(FirstOpenStrategy)),
        _ => Err(UnknownStrategy(name.to_string())),
    }
}

/// Never rerolls and scores the first open rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOpenStrategy;

impl Strategy for FirstOpenStrategy {
    fn choose_reroll(
        &self,
        _faces: &[u8],
        _board: &ScoreBoard,
        _rolls_used: u8,
    ) -> RerollSelection {
        RerollSelection::Keep
    }

    fn choose_rule(&self, board: &ScoreBoard, _hand: &Hand) -> Option<usize> {
        board.unscored_indices().first().map(|i| i + 1)
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Plays one full turn and returns the points scored.
pub fn play_turn(strategy: &dyn Strategy, game: &mut Game) -> Result<u32, GameError> {
    game.roll()?;
    while game.phase() == TurnPhase::AwaitingRerollChoice {
        let selection =
            strategy.choose_reroll(&game.hand().snapshot(), game.board(), game.turn().rolls_used());
        game.reroll(selection)?;
    }
    let rule = strategy
        .choose_rule(game.board(), game.hand())
        .ok_or(GameError::GameOver)?;
    game.score(rule)
}

/// Plays turns until every rule is scored and returns the final total.
pub fn play_game(strategy: &dyn Strategy, game: &mut Game) -> Result<u32, GameError> {
    while !game.is_over() {
        play_turn(strategy, game)?;
    }
    Ok(game.total_points())
}
