//! Rover configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration: a rover facing north at the origin, recording history.

use crate::core::{Heading, Pose, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid rover configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Starting conditions for a rover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoverConfig {
    /// Initial heading.
    /// Default: north
    pub heading: Heading,

    /// Initial x coordinate.
    /// Default: 0
    pub x: i64,

    /// Initial y coordinate.
    /// Default: 0
    pub y: i64,

    /// Record every applied instruction in the travel log.
    /// Default: true
    pub track_history: bool,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            heading: Heading::North,
            x: 0,
            y: 0,
            track_history: true,
        }
    }
}

impl RoverConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grid_rover::config::RoverConfig;
    /// use grid_rover::core::Heading;
    ///
    /// let config = RoverConfig::from_json(r#"{ "heading": "E", "x": 5 }"#).unwrap();
    /// assert_eq!(config.heading, Heading::East);
    /// assert_eq!((config.x, config.y), (5, 0));
    /// assert!(config.track_history);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The starting pose these values describe.
    pub fn pose(&self) -> Pose {
        Pose::new(self.heading, Position::new(self.x, self.y))
    }
}
