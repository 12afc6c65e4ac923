use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Default number of sides on a die.
pub const DEFAULT_SIDES: u8 = 6;

/// A single die showing one face out of `sides`.
/// The face is always kept within `1..=sides`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Die {
    face: u8,
    sides: u8,
}

impl Die {
    /// Creates a die with a random initial face drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(sides: u8, rng: &mut R) -> Result<Self, GameError> {
        if sides == 0 {
            return Err(GameError::InvalidSides);
        }
        let mut die = Self { face: 1, sides };
        die.roll(rng);
        Ok(die)
    }

    /// Creates a die showing an explicit face, for fixtures and restoration.
    pub fn with_face(face: u8, sides: u8) -> Result<Self, GameError> {
        if sides == 0 {
            return Err(GameError::InvalidSides);
        }
        validate_face(face, sides)?;
        Ok(Self { face, sides })
    }

    /// Draws a new face uniformly from `1..=sides` and returns it.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        self.face = rng.random_range(1..=self.sides);
        self.face
    }

    pub fn face(&self) -> u8 {
        self.face
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }

    pub fn set_face(&mut self, face: u8) -> Result<(), GameError> {
        validate_face(face, self.sides)?;
        self.face = face;
        Ok(())
    }
}

pub(crate) fn validate_face(face: u8, sides: u8) -> Result<(), GameError> {
    if face == 0 || face > sides {
        Err(GameError::InvalidFace { face, sides })
    } else {
        Ok(())
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)
    }
}
