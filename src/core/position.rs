//! Integer grid coordinates.

use super::heading::Heading;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on an unbounded integer grid.
///
/// No grid limits are enforced. Coordinates are `i64` and moves wrap at the
/// edges: one step north from `y = i64::MAX` lands on `y = i64::MIN`. Moves
/// therefore never panic, and `backward` always undoes `forward`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// One unit forward along `heading`.
    pub const fn forward(self, heading: Heading) -> Self {
        let (dx, dy) = heading.unit();
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// One unit backward relative to `heading`; the exact inverse of
    /// [`forward`](Self::forward) for the same heading.
    pub const fn backward(self, heading: Heading) -> Self {
        let (dx, dy) = heading.unit();
        Self::new(self.x.wrapping_sub(dx), self.y.wrapping_sub(dy))
    }

    /// Manhattan distance to `other`, saturating at `u64::MAX`.
    pub fn manhattan(self, other: Position) -> u64 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i64, i64) {
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_follows_heading() {
        let start = Position::new(5, 5);
        assert_eq!(start.forward(Heading::North), Position::new(5, 6));
        assert_eq!(start.forward(Heading::East), Position::new(6, 5));
        assert_eq!(start.forward(Heading::South), Position::new(5, 4));
        assert_eq!(start.forward(Heading::West), Position::new(4, 5));
    }

    #[test]
    fn backward_opposes_heading() {
        let start = Position::new(5, 5);
        assert_eq!(start.backward(Heading::North), Position::new(5, 4));
        assert_eq!(start.backward(Heading::East), Position::new(4, 5));
        assert_eq!(start.backward(Heading::South), Position::new(5, 6));
        assert_eq!(start.backward(Heading::West), Position::new(6, 5));
    }

    #[test]
    fn negative_coordinates_are_allowed() {
        let p = Position::ORIGIN.forward(Heading::West).forward(Heading::South);
        assert_eq!(p, Position::new(-1, -1));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Position::new(-2, 3).manhattan(Position::new(1, -1)), 7);
        assert_eq!(Position::ORIGIN.manhattan(Position::ORIGIN), 0);
    }

    #[test]
    fn forward_wraps_at_the_edges() {
        let top = Position::new(0, i64::MAX);
        assert_eq!(top.forward(Heading::North), Position::new(0, i64::MIN));

        let left = Position::new(i64::MIN, 3);
        assert_eq!(left.forward(Heading::West), Position::new(i64::MAX, 3));
    }

    #[test]
    fn backward_wraps_at_the_edges() {
        let bottom = Position::new(0, i64::MIN);
        assert_eq!(bottom.backward(Heading::North), Position::new(0, i64::MAX));

        let right = Position::new(i64::MAX, 0);
        assert_eq!(right.backward(Heading::West), Position::new(i64::MIN, 0));
    }

    #[test]
    fn moves_stay_inverse_across_the_edge() {
        for heading in Heading::ALL {
            for p in [
                Position::new(i64::MAX, i64::MAX),
                Position::new(i64::MIN, i64::MIN),
            ] {
                assert_eq!(p.forward(heading).backward(heading), p);
                assert_eq!(p.backward(heading).forward(heading), p);
            }
        }
    }

    #[test]
    fn manhattan_saturates() {
        let a = Position::new(i64::MIN, i64::MIN);
        let b = Position::new(i64::MAX, i64::MAX);
        assert_eq!(a.manhattan(b), u64::MAX);
    }

    #[test]
    fn tuple_conversions() {
        let p: Position = (3, -4).into();
        assert_eq!(p, Position::new(3, -4));
        let t: (i64, i64) = p.into();
        assert_eq!(t, (3, -4));
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Position::new(7, -5).to_string(), "(7, -5)");
    }
}
