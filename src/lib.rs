//! grid-rover: a deterministic rover state machine on an unbounded grid.
//!
//! The crate follows a "pure core, imperative shell" split. The core holds
//! immutable value types and pure transition functions; [`Rover`] owns a
//! pose and advances it through them.
//!
//! # Core Concepts
//!
//! - **Heading**: one of four compass points, turned through a single
//!   cyclic table
//! - **Position**: signed integer grid coordinates moved relative to the heading
//! - **Instruction**: the closed alphabet `F`, `B`, `L`, `R`
//! - **Travel log**: an immutable record of every applied instruction
//! - **Checkpoint**: a versioned, validated snapshot that can be resumed
//!
//! # Example
//!
//! ```rust
//! use grid_rover::{InvalidInstructionError, Rover};
//! use grid_rover::core::{Heading, Position};
//!
//! let mut rover = Rover::at(Heading::North, 5, 5);
//! rover.execute("RFF").unwrap();
//! assert_eq!(rover.heading(), Heading::East);
//! assert_eq!(rover.position(), Position::new(7, 5));
//!
//! // Instructions before a bad character stay applied.
//! let err = rover.execute("FX").unwrap_err();
//! assert_eq!(err, InvalidInstructionError { character: 'X', index: 1 });
//! assert_eq!(rover.position(), Position::new(8, 5));
//! ```
//!
//! The [`inventory`], [`basket`] and [`catalogue`] modules are unrelated
//! standalone utilities and do not interact with the rover.

pub mod basket;
pub mod builder;
pub mod catalogue;
pub mod checkpoint;
pub mod command;
pub mod config;
pub mod core;
pub mod inventory;
mod rover;

// Re-export commonly used types
pub use builder::{BuildError, RoverBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use command::{InvalidInstructionError, Program};
pub use config::{ConfigError, RoverConfig};
pub use crate::core::{Heading, Instruction, Pose, Position};
pub use rover::Rover;
