use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::die::{validate_face, Die};
use crate::errors::GameError;

/// Default number of dice in a hand.
pub const DEFAULT_DICE: usize = 5;

/// The fixed-size set of dice in play, together with the generator that rolls them.
///
/// A game keeps one `Hand` for its whole lifetime; faces change in place from
/// turn to turn, the number of dice never does.
///
/// # Examples
///
/// ```
/// use yahtzee_engine::hand::Hand;
///
/// let mut hand = Hand::new_with_seed(5, 6, 42).unwrap();
/// hand.roll_subset(&[1, 3]).unwrap();
/// assert_eq!(hand.snapshot().len(), 5);
/// assert!(hand.roll_subset(&[6]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    dice: Vec<Die>,
    sides: u8,
    rng: ChaCha20Rng,
}

impl Hand {
    pub fn new_with_seed(dice: usize, sides: u8, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(dice, sides, ChaCha20Rng::seed_from_u64(seed))
    }

    /// Builds a hand whose dice are rolled by the supplied generator.
    pub fn with_rng(dice: usize, sides: u8, mut rng: ChaCha20Rng) -> Result<Self, GameError> {
        if sides == 0 {
            return Err(GameError::InvalidSides);
        }
        let dice = (0..dice)
            .map(|_| Die::new(sides, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dice, sides, rng })
    }

    /// Builds a hand showing exactly `faces`; later rolls draw from `seed`.
    pub fn from_faces(faces: &[u8], sides: u8, seed: u64) -> Result<Self, GameError> {
        if sides == 0 {
            return Err(GameError::InvalidSides);
        }
        let dice = faces
            .iter()
            .map(|&f| Die::with_face(f, sides))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            dice,
            sides,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }

    /// Positions `1..=dice_count`, the selection meaning "reroll everything".
    pub fn all_indices(&self) -> Vec<usize> {
        (1..=self.dice.len()).collect()
    }

    /// Rerolls the dice at the given 1-based positions.
    ///
    /// Every index is checked before any die moves, so an invalid selection
    /// leaves the hand untouched.
    pub fn roll_subset(&mut self, indices: &[usize]) -> Result<(), GameError> {
        let dice_count = self.dice.len();
        if let Some(&index) = indices.iter().find(|&&i| i < 1 || i > dice_count) {
            return Err(GameError::OutOfRange { index, dice_count });
        }
        for &i in indices {
            self.dice[i - 1].roll(&mut self.rng);
        }
        tracing::debug!(?indices, faces = ?self.snapshot(), "rolled dice");
        Ok(())
    }

    pub fn roll_all(&mut self) {
        for die in &mut self.dice {
            die.roll(&mut self.rng);
        }
        tracing::debug!(faces = ?self.snapshot(), "rolled all dice");
    }

    /// Copy of the current face values, in die order.
    pub fn snapshot(&self) -> Vec<u8> {
        self.dice.iter().map(Die::face).collect()
    }

    pub fn count_face(&self, value: u8) -> usize {
        self.dice.iter().filter(|d| d.face() == value).count()
    }

    pub fn sum(&self) -> u32 {
        self.dice.iter().map(|d| u32::from(d.face())).sum()
    }

    /// Forces the faces of every die. All values are validated first.
    pub fn set_faces(&mut self, values: &[u8]) -> Result<(), GameError> {
        if values.len() != self.dice.len() {
            return Err(GameError::DiceCountMismatch {
                expected: self.dice.len(),
                actual: values.len(),
            });
        }
        for &v in values {
            validate_face(v, self.sides)?;
        }
        for (die, &v) in self.dice.iter_mut().zip(values) {
            die.set_face(v)?;
        }
        Ok(())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, die) in self.dice.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "die {} has value {}", idx + 1, die)?;
        }
        Ok(())
    }
}
