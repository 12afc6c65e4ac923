//! Parsing of interactive input for the `play` command.
//!
//! Malformed input is reported with a message and never clamped or
//! silently repaired; the caller re-prompts.

use yahtzee_engine::turn::RerollSelection;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult<T> {
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit")
}

/// Parses a reroll answer.
///
/// - `all` rerolls every die
/// - empty input, or a `0` anywhere in the list, keeps the dice
/// - otherwise a comma-separated list of 1-based die positions
///
/// ```rust
/// # use yahtzee_cli::validation::{parse_reroll_selection, ParseResult};
/// use yahtzee_engine::turn::RerollSelection;
///
/// assert_eq!(
///     parse_reroll_selection("1, 3,5", 5),
///     ParseResult::Value(RerollSelection::Dice(vec![1, 3, 5]))
/// );
/// assert_eq!(parse_reroll_selection("ALL", 5), ParseResult::Value(RerollSelection::All));
/// assert_eq!(parse_reroll_selection("2,0", 5), ParseResult::Value(RerollSelection::Keep));
/// assert!(matches!(parse_reroll_selection("6", 5), ParseResult::Invalid(_)));
/// ```
pub fn parse_reroll_selection(input: &str, dice_count: usize) -> ParseResult<RerollSelection> {
    let compact: String = input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if is_quit(&compact) {
        return ParseResult::Quit;
    }
    if compact.is_empty() {
        return ParseResult::Value(RerollSelection::Keep);
    }
    if compact == "all" {
        return ParseResult::Value(RerollSelection::All);
    }

    let mut indices = Vec::new();
    for part in compact.split(',') {
        match part.parse::<usize>() {
            Ok(n) => indices.push(n),
            Err(_) => {
                return ParseResult::Invalid(format!(
                    "'{}' is not a die number. Enter numbers separated by commas, 'all', or 0",
                    part
                ));
            }
        }
    }

    if indices.contains(&0) {
        return ParseResult::Value(RerollSelection::Keep);
    }
    if let Some(bad) = indices.iter().find(|&&n| n > dice_count) {
        return ParseResult::Invalid(format!(
            "There is no die {}, you only have {} dice",
            bad, dice_count
        ));
    }
    ParseResult::Value(RerollSelection::Dice(indices))
}

/// Parses a 1-based rule number.
pub fn parse_rule_selection(input: &str, rule_count: usize) -> ParseResult<usize> {
    let input = input.trim().to_lowercase();
    if is_quit(&input) {
        return ParseResult::Quit;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=rule_count).contains(&n) => ParseResult::Value(n),
        Ok(_) => ParseResult::Invalid("Please select an existing scoring rule.".to_string()),
        Err(_) => ParseResult::Invalid(format!(
            "Enter a rule number between 1 and {}",
            rule_count
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reroll_accepts_lists_and_keywords() {
        assert_eq!(
            parse_reroll_selection("2", 5),
            ParseResult::Value(RerollSelection::Dice(vec![2]))
        );
        assert_eq!(
            parse_reroll_selection(" 1 , 5 ", 5),
            ParseResult::Value(RerollSelection::Dice(vec![1, 5]))
        );
        assert_eq!(
            parse_reroll_selection("", 5),
            ParseResult::Value(RerollSelection::Keep)
        );
        assert_eq!(
            parse_reroll_selection("0", 5),
            ParseResult::Value(RerollSelection::Keep)
        );
        assert_eq!(parse_reroll_selection("Quit", 5), ParseResult::Quit);
    }

    #[test]
    fn reroll_rejects_garbage() {
        for input in ["x", "1,,2", "1,", "-1", "1;2", "all,1"] {
            assert!(
                matches!(parse_reroll_selection(input, 5), ParseResult::Invalid(_)),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn reroll_out_of_range_is_not_clamped() {
        match parse_reroll_selection("1,9", 5) {
            ParseResult::Invalid(msg) => assert!(msg.contains("no die 9")),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(
            parse_reroll_selection("6", 6),
            ParseResult::Value(RerollSelection::Dice(vec![6]))
        );
    }

    #[test]
    fn rule_numbers_are_one_based() {
        assert_eq!(parse_rule_selection("1", 14), ParseResult::Value(1));
        assert_eq!(parse_rule_selection(" 14 ", 14), ParseResult::Value(14));
        assert!(matches!(parse_rule_selection("0", 14), ParseResult::Invalid(_)));
        assert!(matches!(parse_rule_selection("15", 14), ParseResult::Invalid(_)));
        assert!(matches!(parse_rule_selection("chance", 14), ParseResult::Invalid(_)));
        assert_eq!(parse_rule_selection("q", 14), ParseResult::Quit);
    }
}
