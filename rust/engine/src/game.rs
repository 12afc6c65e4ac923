use crate::die::DEFAULT_SIDES;
use crate::errors::GameError;
use crate::hand::{Hand, DEFAULT_DICE};
use crate::logger::TurnRecord;
use crate::rules::{standard_rules, Rule};
use crate::scoreboard::{OverviewEntry, ScoreBoard};
use crate::turn::{RerollSelection, Turn, TurnPhase, MAX_ROLLS};

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Parameters for a new game.
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub dice: usize,
    pub sides: u8,
    pub max_rolls: u8,
    pub seed: u64,
    pub rules: Vec<Rule>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            dice: DEFAULT_DICE,
            sides: DEFAULT_SIDES,
            max_rolls: MAX_ROLLS,
            seed: DEFAULT_SEED,
            rules: standard_rules(),
        }
    }
}

/// A single-player game: one hand, one score board and the turn in progress.
/// The game ends once every registered rule is scored, one rule per turn.
///
/// # Examples
///
/// ```
/// use yahtzee_engine::game::{Game, GameSettings};
/// use yahtzee_engine::turn::RerollSelection;
///
/// let mut game = Game::new(GameSettings { seed: 12345, ..GameSettings::default() }).unwrap();
/// while !game.is_over() {
///     game.roll().unwrap();
///     game.reroll(RerollSelection::Keep).unwrap();
///     let next = game.board().unscored_indices()[0] + 1;
///     game.score(next).unwrap();
/// }
/// assert_eq!(game.turns_played(), 14);
/// assert_eq!(game.total_points(), game.history().iter().map(|r| r.points).sum::<u32>());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    hand: Hand,
    board: ScoreBoard,
    turn: Turn,
    max_rolls: u8,
    seed: u64,
    game_id: String,
    history: Vec<TurnRecord>,
}

impl Game {
    pub fn new(settings: GameSettings) -> Result<Self, GameError> {
        let hand = Hand::new_with_seed(settings.dice, settings.sides, settings.seed)?;
        Ok(Self {
            hand,
            board: ScoreBoard::with_rules(settings.rules),
            turn: Turn::with_max_rolls(settings.max_rolls),
            max_rolls: settings.max_rolls,
            seed: settings.seed,
            game_id: String::new(),
            history: Vec::new(),
        })
    }

    pub fn new_with_seed(seed: u64) -> Result<Self, GameError> {
        Self::new(GameSettings {
            seed,
            ..GameSettings::default()
        })
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Direct access to the dice, for fixtures and restoring a position.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn set_game_id(&mut self, id: impl Into<String>) {
        self.game_id = id.into();
    }

    pub fn is_over(&self) -> bool {
        self.board.is_complete()
    }

    pub fn turns_played(&self) -> usize {
        self.history.len()
    }

    pub fn total_points(&self) -> u32 {
        self.board.total_points()
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Opening roll of a turn. Starts the next turn when the previous one is scored.
    pub fn roll(&mut self) -> Result<u8, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if matches!(self.turn.phase(), TurnPhase::Scored { .. }) {
            self.turn = Turn::with_max_rolls(self.max_rolls);
        }
        self.turn.roll(&mut self.hand)
    }

    pub fn reroll(&mut self, selection: RerollSelection) -> Result<u8, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.turn.reroll(&mut self.hand, selection)
    }

    /// Scores the current dice on the rule with 1-based `rule_number`.
    pub fn score(&mut self, rule_number: usize) -> Result<u32, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let points = self.turn.score(&mut self.board, &self.hand, rule_number)?;
        let rule = self
            .board
            .rule(rule_number - 1)
            .map(|r| r.name().to_string())
            .unwrap_or_default();
        self.history.push(TurnRecord {
            game_id: self.game_id.clone(),
            turn: self.history.len() + 1,
            rolls: self.turn.rolled().to_vec(),
            rule,
            points,
            total: self.board.total_points(),
            seed: Some(self.seed),
            ts: None,
        });
        Ok(points)
    }

    /// Score board lines, with previews while dice are in play.
    pub fn overview(&self) -> Vec<OverviewEntry> {
        match self.turn.phase() {
            TurnPhase::AwaitingRerollChoice | TurnPhase::AwaitingScoring => {
                self.board.points_overview(Some(&self.hand))
            }
            _ => self.board.points_overview(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_turn_starts_after_scoring() {
        let mut game = Game::new_with_seed(1).unwrap();
        game.roll().unwrap();
        game.reroll(RerollSelection::Keep).unwrap();
        game.score(14).unwrap();
        assert!(matches!(game.phase(), TurnPhase::Scored { .. }));
        assert_eq!(game.roll(), Ok(1));
        assert_eq!(game.phase(), TurnPhase::AwaitingRerollChoice);
    }

    #[test]
    fn overview_previews_only_during_turn() {
        let mut game = Game::new_with_seed(2).unwrap();
        assert!(game.overview().iter().all(|e| e.preview.is_none()));
        game.roll().unwrap();
        assert!(game.overview().iter().all(|e| e.preview.is_some()));
    }

    #[test]
    fn zero_sided_settings_fail() {
        let settings = GameSettings {
            sides: 0,
            ..GameSettings::default()
        };
        assert_eq!(Game::new(settings).err(), Some(GameError::InvalidSides));
    }
}
