//! Compass headings and the turn state machine.
//!
//! A heading is one of four compass points. Turning is a pure function
//! over a single clockwise table, so right and left turns share one
//! implementation and differ only by their offset into that table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four compass points a rover can face.
///
/// Serialized (and displayed) as its single-letter code.
///
/// # Example
///
/// ```rust
/// use grid_rover::core::Heading;
///
/// assert_eq!(Heading::North.right(), Heading::East);
/// assert_eq!(Heading::North.left(), Heading::West);
/// assert_eq!("S".parse::<Heading>().unwrap(), Heading::South);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

/// Clockwise order of the compass. Index arithmetic on this table is the
/// only place turn logic lives.
const COMPASS: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    /// Clockwise steps through [`COMPASS`] this turn advances, modulo 4.
    const fn offset(self) -> usize {
        match self {
            Self::Right => 1,
            Self::Left => 3,
        }
    }

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

impl Heading {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Heading; 4] = COMPASS;

    const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// The heading after a quarter turn in the given direction.
    pub const fn turned(self, turn: Turn) -> Self {
        COMPASS[(self.index() + turn.offset()) % COMPASS.len()]
    }

    /// One step clockwise: N -> E -> S -> W -> N.
    pub const fn right(self) -> Self {
        self.turned(Turn::Right)
    }

    /// One step counter-clockwise: N -> W -> S -> E -> N.
    pub const fn left(self) -> Self {
        self.turned(Turn::Left)
    }

    /// The heading facing the other way.
    pub const fn opposite(self) -> Self {
        COMPASS[(self.index() + 2) % COMPASS.len()]
    }

    /// Unit displacement `(dx, dy)` of a forward move along this heading.
    ///
    /// North is `+y` and east is `+x`.
    pub const fn unit(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Single-letter code (`N`, `E`, `S`, `W`).
    pub const fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Full name, for logging.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Text that names no compass heading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heading '{0}', expected one of N, E, S, W")]
pub struct ParseHeadingError(pub String);

impl FromStr for Heading {
    type Err = ParseHeadingError;

    /// Accepts the exact single-letter codes, or the full names in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let heading = match s {
            "N" => Self::North,
            "E" => Self::East,
            "S" => Self::South,
            "W" => Self::West,
            other => match other.to_ascii_lowercase().as_str() {
                "north" => Self::North,
                "east" => Self::East,
                "south" => Self::South,
                "west" => Self::West,
                _ => return Err(ParseHeadingError(s.to_string())),
            },
        };
        Ok(heading)
    }
}
