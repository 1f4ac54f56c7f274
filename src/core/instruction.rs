//! The four-letter instruction alphabet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rover instruction.
///
/// The alphabet is closed: `F`, `B`, `L`, `R`, upper case only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    #[serde(rename = "F")]
    Forward,
    #[serde(rename = "B")]
    Backward,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Instruction {
    pub const ALL: [Instruction; 4] = [Self::Forward, Self::Backward, Self::Left, Self::Right];

    /// Decode one instruction character, `None` if it is outside the alphabet.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Self::Forward),
            'B' => Some(Self::Backward),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Backward => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// The instruction that undoes this one from the resulting pose.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl TryFrom<char> for Instruction {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
