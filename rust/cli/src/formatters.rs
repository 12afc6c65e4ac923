//! Text rendering of dice, score boards and rule tables for the terminal.
//!
//! ```rust
//! use yahtzee_engine::hand::Hand;
//! use yahtzee_cli::formatters::format_hand;
//!
//! let hand = Hand::from_faces(&[3, 1], 6, 0).unwrap();
//! assert_eq!(format_hand(&hand), "die 1 has value 3\ndie 2 has value 1");
//! ```

use yahtzee_engine::hand::Hand;
use yahtzee_engine::rules::Rule;
use yahtzee_engine::scoreboard::OverviewEntry;

const BOARD_RULE: &str = "----------------------------------------";

pub fn format_hand(hand: &Hand) -> String {
    hand.to_string()
}

/// One overview line, e.g. `3. Threes: +9 possible points`.
///
/// Unscored rules show their preview when it is positive; committed rules
/// are marked so a zero-point commit reads differently from an open rule.
pub fn format_overview_entry(entry: &OverviewEntry) -> String {
    match entry.preview {
        Some(p) if !entry.scored && p > 0 => {
            format!("{}. {}: +{} possible points", entry.number, entry.name, p)
        }
        _ if entry.scored => {
            format!("{}. {}: +{} points [scored]", entry.number, entry.name, entry.points)
        }
        _ => format!("{}. {}: +{} points", entry.number, entry.name, entry.points),
    }
}

pub fn format_board(entries: &[OverviewEntry]) -> String {
    let mut lines = vec![" SCORE BOARD".to_string(), BOARD_RULE.to_string()];
    lines.extend(entries.iter().map(format_overview_entry));
    lines.push(BOARD_RULE.to_string());
    lines.join("\n")
}

pub fn format_rules(rules: &[Rule]) -> String {
    rules
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}", i + 1, r.name()))
        .collect::<Vec<_>>()
        .join("\n")
}
