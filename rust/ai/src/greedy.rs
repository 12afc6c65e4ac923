//! Greedy strategy.
//!
//! Chases multiples of the most common face and scores whichever open rule
//! pays the most right now. No lookahead; deterministic for a given position.

use crate::Strategy;
use yahtzee_engine::hand::Hand;
use yahtzee_engine::rules::RuleKind;
use yahtzee_engine::scoreboard::ScoreBoard;
use yahtzee_engine::turn::RerollSelection;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        Self
    }

    /// True when an open fixed-bonus rule already pays for `faces`.
    fn holds_made_pattern(faces: &[u8], board: &ScoreBoard) -> bool {
        board.unscored_indices().into_iter().any(|i| {
            board.rule(i).is_some_and(|rule| {
                let pattern = matches!(
                    rule.kind(),
                    RuleKind::FullHouse
                        | RuleKind::Straight { .. }
                        | RuleKind::AllEqual
                        | RuleKind::ExactMultiset { .. }
                );
                pattern && rule.points(faces) > 0
            })
        })
    }

    /// Most frequent face; ties go to the higher face.
    fn target_face(faces: &[u8]) -> Option<u8> {
        faces
            .iter()
            .copied()
            .max_by_key(|&f| (faces.iter().filter(|&&g| g == f).count(), f))
    }
}

impl Strategy for GreedyStrategy {
    fn choose_reroll(&self, faces: &[u8], board: &ScoreBoard, _rolls_used: u8) -> RerollSelection {
        if Self::holds_made_pattern(faces, board) {
            return RerollSelection::Keep;
        }
        let Some(target) = Self::target_face(faces) else {
            return RerollSelection::Keep;
        };
        let reroll: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f != target)
            .map(|(i, _)| i + 1)
            .collect();
        if reroll.is_empty() {
            RerollSelection::Keep
        } else {
            RerollSelection::Dice(reroll)
        }
    }

    fn choose_rule(&self, board: &ScoreBoard, hand: &Hand) -> Option<usize> {
        board
            .points_overview(Some(hand))
            .into_iter()
            .filter_map(|e| e.preview.map(|p| (e.number, p)))
            // max_by_key keeps the last maximum, so reverse to prefer the lowest number
            .rev()
            .max_by_key(|&(_, p)| p)
            .map(|(number, _)| number)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
