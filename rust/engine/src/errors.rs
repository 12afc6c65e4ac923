use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Die index {index} is out of range, you only have {dice_count} dice")]
    OutOfRange { index: usize, dice_count: usize },
    #[error("Rule '{0}' is not registered on the score board")]
    UnknownRule(String),
    #[error("Rule '{0}' has already been scored")]
    AlreadyScored(String),
    #[error("Face {face} is not valid for a die with {sides} sides")]
    InvalidFace { face: u8, sides: u8 },
    #[error("A die needs at least one side")]
    InvalidSides,
    #[error("Expected {expected} face values, got {actual}")]
    DiceCountMismatch { expected: usize, actual: usize },
    #[error("Rule number {number} is out of range (1..={rule_count})")]
    RuleOutOfRange { number: usize, rule_count: usize },
    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        phase: &'static str,
        action: &'static str,
    },
    #[error("Game is over, every rule has been scored")]
    GameOver,
}
