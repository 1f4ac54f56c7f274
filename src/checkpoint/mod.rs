//! Checkpoint and resume for rovers.
//!
//! A checkpoint is a self-contained snapshot of a rover: its initial pose,
//! current pose and travel log. It serializes to JSON for inspection or to
//! bincode for compactness. The crate never writes the bytes anywhere; the
//! caller owns storage.

use crate::core::{Pose, TravelLog};
use crate::rover::Rover;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, Format};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a rover.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Pose the rover was created with
    pub initial: Pose,

    /// Pose at checkpoint time
    pub current: Pose,

    /// Whether the rover records history
    pub track_history: bool,

    /// Complete travel log
    pub log: TravelLog,
}

impl Checkpoint {
    /// Check the version and, when a log is present, that it is continuous
    /// and runs from `initial` to `current`.
    ///
    /// A rover that tracks history logs every step, so an empty log with
    /// history on means the rover never moved. With history off an empty
    /// log says nothing and any pair of poses is accepted.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if self.log.is_empty() {
            if self.track_history && self.initial != self.current {
                return Err(CheckpointError::ValidationFailed(format!(
                    "empty travel log but rover moved from {} to {}",
                    self.initial, self.current
                )));
            }
            return Ok(());
        }

        if !self.log.is_continuous() {
            return Err(CheckpointError::ValidationFailed(
                "travel log is not continuous".to_string(),
            ));
        }
        if self.log.start() != Some(&self.initial) {
            return Err(CheckpointError::ValidationFailed(format!(
                "travel log does not start at initial pose {}",
                self.initial
            )));
        }
        if self.log.end() != Some(&self.current) {
            return Err(CheckpointError::ValidationFailed(format!(
                "travel log does not end at current pose {}",
                self.current
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::encode(Format::Json, e))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::decode(Format::Json, e))
    }

    /// Compact bincode encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::encode(Format::Binary, e))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::decode(Format::Binary, e))
    }
}

impl Rover {
    /// Snapshot this rover.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grid_rover::Rover;
    /// use grid_rover::checkpoint::Checkpoint;
    /// use grid_rover::core::Heading;
    ///
    /// let mut rover = Rover::at(Heading::North, 5, 5);
    /// rover.execute("RFF").unwrap();
    ///
    /// let json = rover.checkpoint().to_json().unwrap();
    /// let resumed = Rover::resume(Checkpoint::from_json(&json).unwrap()).unwrap();
    ///
    /// assert_eq!(resumed.pose(), rover.pose());
    /// ```
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            initial: self.initial_pose(),
            current: self.pose(),
            track_history: self.tracks_history(),
            log: self.log().clone(),
        }
    }

    /// Validate a checkpoint and rebuild the rover it describes.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        if let Err(err) = checkpoint.validate() {
            warn!("rejected checkpoint {}: {err}", checkpoint.id);
            return Err(err);
        }
        debug!(
            "resuming rover at {} from checkpoint {} ({} step(s))",
            checkpoint.current,
            checkpoint.id,
            checkpoint.log.len()
        );
        Ok(Rover::restore(
            checkpoint.initial,
            checkpoint.current,
            checkpoint.log,
            checkpoint.track_history,
        ))
    }
}
