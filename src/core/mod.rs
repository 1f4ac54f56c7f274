//! Pure rover state and transition logic.
//!
//! This module contains the functional core of the rover:
//! - Headings and the cyclic turn table
//! - Grid positions and directional moves
//! - The instruction alphabet
//! - Poses and the pure `Pose::after` transition
//! - An immutable travel log
//!
//! Nothing here mutates shared state; the [`Rover`](crate::Rover) shell
//! owns a pose and advances it through these functions.

mod heading;
mod history;
mod instruction;
mod pose;
mod position;

pub use heading::{Heading, ParseHeadingError, Turn};
pub use history::{Step, TravelLog};
pub use instruction::Instruction;
pub use pose::Pose;
pub use position::Position;
