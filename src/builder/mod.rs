//! Builder API for rover construction.

pub mod error;
pub mod rover;

pub use error::BuildError;
pub use rover::RoverBuilder;
