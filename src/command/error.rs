//! Instruction decoding errors.

use thiserror::Error;

/// A character outside the `F`/`B`/`L`/`R` alphabet.
///
/// `index` counts characters, not bytes, from the start of the
/// instruction string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid instruction '{character}' at index {index}")]
pub struct InvalidInstructionError {
    pub character: char,
    pub index: usize,
}

impl InvalidInstructionError {
    pub fn new(character: char, index: usize) -> Self {
        Self { character, index }
    }
}
