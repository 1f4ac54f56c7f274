//! Builder for constructing rovers.

use crate::builder::error::BuildError;
use crate::config::RoverConfig;
use crate::core::{Heading, Pose, Position};
use crate::rover::Rover;

/// Builder for constructing rovers with a fluent API.
///
/// A heading is required; position defaults to the origin and history
/// tracking defaults to on.
#[derive(Clone, Debug)]
pub struct RoverBuilder {
    heading: Option<Heading>,
    position: Position,
    track_history: bool,
}

impl RoverBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            heading: None,
            position: Position::ORIGIN,
            track_history: true,
        }
    }

    /// Set the initial heading (required).
    pub fn facing(mut self, heading: Heading) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Set the initial position.
    pub fn at(mut self, x: i64, y: i64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Enable or disable the travel log.
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.track_history = enabled;
        self
    }

    /// Take heading, position and history settings from a configuration.
    pub fn config(self, config: &RoverConfig) -> Self {
        self.facing(config.heading)
            .at(config.x, config.y)
            .track_history(config.track_history)
    }

    /// Build the rover.
    /// Returns an error if no heading was given.
    pub fn build(self) -> Result<Rover, BuildError> {
        let heading = self.heading.ok_or(BuildError::MissingHeading)?;
        Ok(Rover::with_options(
            Pose::new(heading, self.position),
            self.track_history,
        ))
    }
}

impl Default for RoverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_heading() {
        let result = RoverBuilder::new().at(1, 2).build();
        assert_eq!(result, Err(BuildError::MissingHeading));
    }

    #[test]
    fn fluent_api_builds_rover() {
        let rover = RoverBuilder::new()
            .facing(Heading::South)
            .at(-4, 7)
            .track_history(false)
            .build()
            .unwrap();

        assert_eq!(rover.pose(), Pose::new(Heading::South, Position::new(-4, 7)));
        assert!(!rover.tracks_history());
    }

    #[test]
    fn defaults_to_origin_with_history() {
        let rover = RoverBuilder::default().facing(Heading::East).build().unwrap();

        assert_eq!(rover.position(), Position::ORIGIN);
        assert!(rover.tracks_history());
    }

    #[test]
    fn config_supplies_every_field() {
        let config = RoverConfig {
            heading: Heading::West,
            x: 9,
            y: -9,
            track_history: false,
        };
        let rover = RoverBuilder::new().config(&config).build().unwrap();

        assert_eq!(rover, Rover::from_config(&config));
    }

    #[test]
    fn later_calls_override_config() {
        let rover = RoverBuilder::new()
            .config(&RoverConfig::default())
            .facing(Heading::South)
            .build()
            .unwrap();

        assert_eq!(rover.heading(), Heading::South);
    }
}
