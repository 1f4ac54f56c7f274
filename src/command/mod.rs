//! Decoding instruction strings.
//!
//! [`decode`] walks an instruction string lazily, yielding each
//! instruction with its character index or stopping at the first invalid
//! character. [`Program`] is the eager form: a string that has already
//! been validated end to end.

pub mod error;

pub use error::InvalidInstructionError;

use crate::core::Instruction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lazily decode `input`, one `(index, instruction)` pair per character.
///
/// The iterator yields an error for an invalid character and keeps going,
/// so callers decide whether to stop (see
/// [`Rover::execute`](crate::Rover::execute)).
pub fn decode(
    input: &str,
) -> impl Iterator<Item = Result<(usize, Instruction), InvalidInstructionError>> + '_ {
    input.chars().enumerate().map(|(index, c)| {
        Instruction::from_char(c)
            .map(|instruction| (index, instruction))
            .ok_or(InvalidInstructionError::new(c, index))
    })
}

/// A fully validated instruction sequence.
///
/// # Example
///
/// ```rust
/// use grid_rover::command::Program;
/// use grid_rover::core::Instruction;
///
/// let program: Program = "RFF".parse().unwrap();
/// assert_eq!(program.instructions(), &[Instruction::Right, Instruction::Forward, Instruction::Forward]);
///
/// let err = Program::parse("FX").unwrap_err();
/// assert_eq!((err.character, err.index), ('X', 1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Validate the whole string, failing on the first invalid character.
    pub fn parse(input: &str) -> Result<Self, InvalidInstructionError> {
        let instructions = decode(input)
            .map(|decoded| decoded.map(|(_, instruction)| instruction))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { instructions })
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The program that walks back to the starting pose: every instruction
    /// inverted, in reverse order.
    pub fn reversed(&self) -> Self {
        let instructions = self
            .instructions
            .iter()
            .rev()
            .map(|instruction| instruction.inverse())
            .collect();
        Self { instructions }
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = Instruction;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Instruction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter().copied()
    }
}

impl FromStr for Program {
    type Err = InvalidInstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Heading, Pose, Position};

    #[test]
    fn decode_yields_indexed_instructions() {
        let decoded: Vec<_> = decode("RFL").collect();
        assert_eq!(
            decoded,
            vec![
                Ok((0, Instruction::Right)),
                Ok((1, Instruction::Forward)),
                Ok((2, Instruction::Left)),
            ]
        );
    }

    #[test]
    fn decode_reports_each_bad_character() {
        let decoded: Vec<_> = decode("FxB?").collect();
        assert_eq!(decoded[1], Err(InvalidInstructionError::new('x', 1)));
        assert_eq!(decoded[2], Ok((2, Instruction::Backward)));
        assert_eq!(decoded[3], Err(InvalidInstructionError::new('?', 3)));
    }

    #[test]
    fn index_counts_characters_not_bytes() {
        let err = Program::parse("Fé!").unwrap_err();
        assert_eq!(err, InvalidInstructionError::new('é', 1));

        let err = Program::parse("éF").unwrap_err();
        assert_eq!(err.index, 0);

        let decoded: Vec<_> = decode("ééX").collect();
        assert_eq!(decoded[2], Err(InvalidInstructionError::new('X', 2)));
    }

    #[test]
    fn parse_accepts_empty_string() {
        let program = Program::parse("").unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn parse_stops_at_first_error() {
        let err = Program::parse("FFZQ").unwrap_err();
        assert_eq!(err, InvalidInstructionError::new('Z', 2));
    }

    #[test]
    fn lowercase_is_rejected() {
        let err = Program::parse("rff").unwrap_err();
        assert_eq!(err, InvalidInstructionError::new('r', 0));
    }

    #[test]
    fn error_message_names_character_and_index() {
        let err = InvalidInstructionError::new('X', 1);
        assert_eq!(err.to_string(), "invalid instruction 'X' at index 1");
    }

    #[test]
    fn display_round_trips() {
        let program = Program::parse("LRFBBF").unwrap();
        assert_eq!(program.to_string(), "LRFBBF");
        assert_eq!(program.len(), 6);
    }

    #[test]
    fn reversed_program_returns_home() {
        let start = Pose::new(Heading::North, Position::new(5, 5));
        let program = Program::parse("RFFLBRRF").unwrap();

        let out = start.after_all(&program);
        let back = out.after_all(&program.reversed());

        assert_ne!(out, start);
        assert_eq!(back, start);
    }
}
