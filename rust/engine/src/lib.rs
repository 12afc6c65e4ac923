//! # yahtzee-engine: Dice Game Scoring Core
//!
//! Rule evaluation, score board bookkeeping and the turn state machine of a
//! Yahtzee-style dice game. Dice are rolled by a seeded ChaCha20 generator
//! owned by the hand, so every game can be replayed from its seed.
//!
//! ## Core Modules
//!
//! - [`die`] - A single die with a face value and side count
//! - [`hand`] - The fixed set of dice, selective rerolls by 1-based position
//! - [`rules`] - Scoring categories and the standard rule table
//! - [`scoreboard`] - At-most-once point assignment per rule, totals, overview
//! - [`turn`] - Roll / reroll / score state machine for one turn
//! - [`game`] - A full game: one hand, one score board, turn after turn
//! - [`logger`] - Per-turn records and JSONL game history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use yahtzee_engine::hand::Hand;
//! use yahtzee_engine::rules::Rule;
//!
//! let hand = Hand::from_faces(&[1, 2, 3, 4, 5], 6, 0).unwrap();
//! assert_eq!(Rule::large_straight().points_for(&hand), 40);
//! assert_eq!(Rule::small_straight().points_for(&hand), 30);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use yahtzee_engine::hand::Hand;
//!
//! let mut a = Hand::new_with_seed(5, 6, 42).unwrap();
//! let mut b = Hand::new_with_seed(5, 6, 42).unwrap();
//! a.roll_all();
//! b.roll_all();
//! assert_eq!(a.snapshot(), b.snapshot());
//! ```

pub mod die;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod rules;
pub mod scoreboard;
pub mod turn;
