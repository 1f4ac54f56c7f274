//! The complete state of a rover: where it is and which way it faces.

use super::heading::{Heading, Turn};
use super::instruction::Instruction;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading plus position.
///
/// Poses are immutable values; every operation returns a new pose. This is
/// the pure transition function the [`Rover`](crate::Rover) shell drives.
///
/// # Example
///
/// ```rust
/// use grid_rover::core::{Heading, Instruction, Pose, Position};
///
/// let pose = Pose::new(Heading::North, Position::new(5, 5));
/// let pose = pose
///     .after(Instruction::Right)
///     .after(Instruction::Forward)
///     .after(Instruction::Forward);
///
/// assert_eq!(pose, Pose::new(Heading::East, Position::new(7, 5)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub heading: Heading,
    pub position: Position,
}

impl Pose {
    pub const fn new(heading: Heading, position: Position) -> Self {
        Self { heading, position }
    }

    /// Facing `heading` at the origin.
    pub const fn facing(heading: Heading) -> Self {
        Self::new(heading, Position::ORIGIN)
    }

    pub const fn turned(self, turn: Turn) -> Self {
        Self::new(self.heading.turned(turn), self.position)
    }

    pub const fn forward(self) -> Self {
        Self::new(self.heading, self.position.forward(self.heading))
    }

    pub const fn backward(self) -> Self {
        Self::new(self.heading, self.position.backward(self.heading))
    }

    /// The pose after applying a single instruction.
    pub const fn after(self, instruction: Instruction) -> Self {
        match instruction {
            Instruction::Forward => self.forward(),
            Instruction::Backward => self.backward(),
            Instruction::Left => self.turned(Turn::Left),
            Instruction::Right => self.turned(Turn::Right),
        }
    }

    /// Fold a sequence of instructions over this pose, left to right.
    pub fn after_all<I>(self, instructions: I) -> Self
    where
        I: IntoIterator<Item = Instruction>,
    {
        instructions.into_iter().fold(self, Self::after)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.heading, self.position)
    }
}
