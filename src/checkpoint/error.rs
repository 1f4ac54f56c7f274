//! Checkpoint error types.

use std::fmt;
use thiserror::Error;

/// Encoding a checkpoint was being read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Binary,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Binary => "binary",
        })
    }
}

/// Errors that can occur during checkpoint operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error("could not encode checkpoint as {format}: {message}")]
    SerializationFailed { format: Format, message: String },

    #[error("could not decode {format} checkpoint: {message}")]
    DeserializationFailed { format: Format, message: String },

    #[error("checkpoint version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot is well formed but describes an impossible rover
    #[error("inconsistent checkpoint: {0}")]
    ValidationFailed(String),
}

impl CheckpointError {
    pub(crate) fn encode(format: Format, err: impl fmt::Display) -> Self {
        Self::SerializationFailed {
            format,
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(format: Format, err: impl fmt::Display) -> Self {
        Self::DeserializationFailed {
            format,
            message: err.to_string(),
        }
    }
}
