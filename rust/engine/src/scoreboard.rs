use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;
use crate::rules::Rule;

/// One line of the score board overview.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct OverviewEntry {
    /// 1-based position of the rule, as offered to the player
    pub number: usize,
    pub name: String,
    /// Committed points (0 while unscored)
    pub points: u32,
    /// Whether the rule has been committed
    pub scored: bool,
    /// Points the current hand would earn, for unscored rules when a hand is supplied
    pub preview: Option<u32>,
}

/// Ordered registry of rules with at-most-once point assignment per rule.
///
/// Each rule carries an explicit committed flag, so a category that was
/// scored for 0 points stays closed.
///
/// # Examples
///
/// ```
/// use yahtzee_engine::hand::Hand;
/// use yahtzee_engine::rules::{standard_rules, Rule};
/// use yahtzee_engine::scoreboard::ScoreBoard;
///
/// let mut board = ScoreBoard::new();
/// board.register_rules(standard_rules());
///
/// let hand = Hand::from_faces(&[1, 1, 2, 3, 5], 6, 0).unwrap();
/// assert_eq!(board.assign_points(&Rule::fibonyahtzee(), &hand), Ok(100));
/// assert!(board.assign_points(&Rule::fibonyahtzee(), &hand).is_err());
/// assert_eq!(board.total_points(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    rules: Vec<Rule>,
    points: Vec<u32>,
    committed: Vec<bool>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        let mut board = Self::new();
        board.register_rules(rules);
        board
    }

    /// Replaces the rule list and clears every score. Setup only: calling it
    /// mid-game discards the points collected so far.
    pub fn register_rules(&mut self, rules: Vec<Rule>) {
        self.points = vec![0; rules.len()];
        self.committed = vec![false; rules.len()];
        self.rules = rules;
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule at a 0-based index.
    pub fn rule(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn points(&self) -> &[u32] {
        &self.points
    }

    pub fn is_scored(&self, index: usize) -> bool {
        self.committed.get(index).copied().unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.committed.iter().all(|&c| c)
    }

    /// 0-based indices of rules still open for scoring.
    pub fn unscored_indices(&self) -> Vec<usize> {
        (0..self.rules.len())
            .filter(|&i| !self.committed[i])
            .collect()
    }

    /// Commits `rule`'s points for `hand` and returns them.
    pub fn assign_points(&mut self, rule: &Rule, hand: &Hand) -> Result<u32, GameError> {
        let index = self
            .rules
            .iter()
            .position(|r| r == rule)
            .ok_or_else(|| GameError::UnknownRule(rule.name().to_string()))?;
        self.assign_points_at(index, hand)
    }

    /// Commits the points of the rule at a 0-based index.
    pub fn assign_points_at(&mut self, index: usize, hand: &Hand) -> Result<u32, GameError> {
        let rule = self
            .rules
            .get(index)
            .ok_or_else(|| GameError::UnknownRule(format!("#{}", index + 1)))?;
        if self.committed[index] {
            tracing::warn!(rule = rule.name(), "rejected commit to scored rule");
            return Err(GameError::AlreadyScored(rule.name().to_string()));
        }
        let points = rule.points_for(hand);
        self.points[index] = points;
        self.committed[index] = true;
        tracing::info!(rule = rule.name(), points, "points assigned");
        Ok(points)
    }

    pub fn total_points(&self) -> u32 {
        self.points.iter().sum()
    }

    /// Every rule in order with its committed score and, when `hand` is given,
    /// the points it would earn if still open. Does not change the board.
    pub fn points_overview(&self, hand: Option<&Hand>) -> Vec<OverviewEntry> {
        let faces = hand.map(Hand::snapshot);
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| OverviewEntry {
                number: i + 1,
                name: rule.name().to_string(),
                points: self.points[i],
                scored: self.committed[i],
                preview: match &faces {
                    Some(f) if !self.committed[i] => Some(rule.points(f)),
                    _ => None,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::standard_rules;

    fn hand(faces: &[u8]) -> Hand {
        Hand::from_faces(faces, 6, 0).unwrap()
    }

    #[test]
    fn register_resets_points() {
        let mut board = ScoreBoard::with_rules(standard_rules());
        board.assign_points_at(0, &hand(&[1, 1, 1, 2, 2])).unwrap();
        assert_eq!(board.total_points(), 3);
        board.register_rules(vec![Rule::chance()]);
        assert_eq!(board.rule_count(), 1);
        assert_eq!(board.total_points(), 0);
        assert!(!board.is_scored(0));
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let mut board = ScoreBoard::with_rules(vec![Rule::chance()]);
        assert_eq!(
            board.assign_points(&Rule::yahtzee(), &hand(&[1, 1, 1, 1, 1])),
            Err(GameError::UnknownRule("Yahtzee".into()))
        );
        assert!(board.assign_points_at(4, &hand(&[1, 1, 1, 1, 1])).is_err());
    }

    #[test]
    fn zero_score_closes_the_rule() {
        let mut board = ScoreBoard::with_rules(vec![Rule::yahtzee()]);
        assert_eq!(board.assign_points(&Rule::yahtzee(), &hand(&[1, 2, 3, 4, 6])), Ok(0));
        assert_eq!(
            board.assign_points(&Rule::yahtzee(), &hand(&[6, 6, 6, 6, 6])),
            Err(GameError::AlreadyScored("Yahtzee".into()))
        );
        assert_eq!(board.points(), &[0]);
        assert!(board.is_complete());
    }

    #[test]
    fn overview_previews_only_open_rules() {
        let mut board = ScoreBoard::with_rules(vec![Rule::same_value("Aces", 1), Rule::chance()]);
        board.assign_points_at(0, &hand(&[1, 1, 2, 2, 2])).unwrap();
        let h = hand(&[1, 3, 3, 3, 3]);
        let overview = board.points_overview(Some(&h));
        assert_eq!(overview[0].points, 2);
        assert!(overview[0].scored);
        assert_eq!(overview[0].preview, None);
        assert_eq!(overview[1].preview, Some(13));
        assert!(board.points_overview(None).iter().all(|e| e.preview.is_none()));
        assert_eq!(board.unscored_indices(), vec![1]);
    }
}
