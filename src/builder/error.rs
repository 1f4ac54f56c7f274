//! Build errors for the rover builder.

use thiserror::Error;

/// Errors that can occur when building a rover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial heading not specified. Call .facing(heading) or .config(config) before .build()")]
    MissingHeading,
}
