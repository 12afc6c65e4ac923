use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;
use crate::scoreboard::ScoreBoard;

/// Rolls allowed per turn: the opening roll plus two rerolls.
pub const MAX_ROLLS: u8 = 3;

/// Which dice the player wants to reroll.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RerollSelection {
    /// Reroll nothing and move on to scoring
    Keep,
    /// Reroll every die
    All,
    /// Reroll the dice at these 1-based positions; empty means `Keep`
    Dice(Vec<usize>),
}

/// Where a turn stands.
///
/// `AwaitingRoll → AwaitingRerollChoice ⇄ (reroll) → AwaitingScoring → Scored`.
/// Rolling itself happens inside [`Turn::roll`] and [`Turn::reroll`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing rolled yet; the opening roll takes all dice
    AwaitingRoll,
    /// Rolled at least once with rolls left
    AwaitingRerollChoice,
    /// Dice are final; a rule must be picked
    AwaitingScoring,
    /// Points committed for the rule at `rule_index` (0-based)
    Scored { rule_index: usize, points: u32 },
}

impl TurnPhase {
    fn label(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingRoll => "awaiting the opening roll",
            TurnPhase::AwaitingRerollChoice => "awaiting a reroll choice",
            TurnPhase::AwaitingScoring => "awaiting scoring",
            TurnPhase::Scored { .. } => "the turn is scored",
        }
    }
}

/// One turn of play: the reroll sub-loop followed by picking a rule.
///
/// # Examples
///
/// ```
/// use yahtzee_engine::hand::Hand;
/// use yahtzee_engine::rules::standard_rules;
/// use yahtzee_engine::scoreboard::ScoreBoard;
/// use yahtzee_engine::turn::{RerollSelection, Turn, TurnPhase};
///
/// let mut hand = Hand::new_with_seed(5, 6, 9).unwrap();
/// let mut board = ScoreBoard::with_rules(standard_rules());
/// let mut turn = Turn::new();
///
/// turn.roll(&mut hand).unwrap();
/// turn.reroll(&mut hand, RerollSelection::Dice(vec![1, 2])).unwrap();
/// turn.reroll(&mut hand, RerollSelection::Keep).unwrap();
/// assert_eq!(turn.phase(), TurnPhase::AwaitingScoring);
///
/// // 14 is Chance in the standard table
/// let points = turn.score(&mut board, &hand, 14).unwrap();
/// assert_eq!(points, hand.sum());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Turn {
    phase: TurnPhase,
    rolls: u8,
    max_rolls: u8,
    rolled: Vec<Vec<u8>>,
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}

impl Turn {
    pub fn new() -> Self {
        Self::with_max_rolls(MAX_ROLLS)
    }

    pub fn with_max_rolls(max_rolls: u8) -> Self {
        Self {
            phase: TurnPhase::AwaitingRoll,
            rolls: 0,
            max_rolls: max_rolls.max(1),
            rolled: Vec::new(),
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn rolls_used(&self) -> u8 {
        self.rolls
    }

    pub fn rolls_remaining(&self) -> u8 {
        self.max_rolls - self.rolls
    }

    /// Faces after each roll of this turn, oldest first.
    pub fn rolled(&self) -> &[Vec<u8>] {
        &self.rolled
    }

    /// Opening roll of all dice.
    pub fn roll(&mut self, hand: &mut Hand) -> Result<u8, GameError> {
        self.expect(TurnPhase::AwaitingRoll, "roll")?;
        hand.roll_all();
        self.after_roll(hand);
        Ok(self.rolls)
    }

    /// Rerolls the selected dice, or ends the reroll loop for `Keep`/an empty list.
    ///
    /// An out-of-range selection fails without moving any die and leaves the
    /// turn waiting for another choice.
    pub fn reroll(&mut self, hand: &mut Hand, selection: RerollSelection) -> Result<u8, GameError> {
        self.expect(TurnPhase::AwaitingRerollChoice, "reroll")?;
        match selection {
            RerollSelection::Keep => {
                self.phase = TurnPhase::AwaitingScoring;
                return Ok(self.rolls);
            }
            RerollSelection::Dice(indices) if indices.is_empty() => {
                self.phase = TurnPhase::AwaitingScoring;
                return Ok(self.rolls);
            }
            RerollSelection::Dice(indices) => hand.roll_subset(&indices)?,
            RerollSelection::All => hand.roll_all(),
        }
        self.after_roll(hand);
        Ok(self.rolls)
    }

    /// Commits the rule with 1-based `rule_number` for the final dice.
    ///
    /// An out-of-range number or an already scored rule is rejected and the
    /// turn stays in `AwaitingScoring`.
    pub fn score(
        &mut self,
        board: &mut ScoreBoard,
        hand: &Hand,
        rule_number: usize,
    ) -> Result<u32, GameError> {
        self.expect(TurnPhase::AwaitingScoring, "score")?;
        let rule_count = board.rule_count();
        if rule_number < 1 || rule_number > rule_count {
            return Err(GameError::RuleOutOfRange {
                number: rule_number,
                rule_count,
            });
        }
        let rule_index = rule_number - 1;
        let points = board.assign_points_at(rule_index, hand)?;
        self.phase = TurnPhase::Scored { rule_index, points };
        Ok(points)
    }

    fn after_roll(&mut self, hand: &Hand) {
        self.rolls += 1;
        self.rolled.push(hand.snapshot());
        self.phase = if self.rolls >= self.max_rolls {
            TurnPhase::AwaitingScoring
        } else {
            TurnPhase::AwaitingRerollChoice
        };
    }

    fn expect(&self, phase: TurnPhase, action: &'static str) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::InvalidTransition {
                phase: self.phase.label(),
                action,
            })
        }
    }
}
