//! Immutable position and facing of the piece.
//!
//! Every transform returns a new [`Position`]; nothing here mutates.
//! Bounds are not enforced by the value itself; the board decides
//! whether a transform may be applied.

use super::bounds::Bounds;
use super::command::Command;
use super::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of the piece: cell coordinates plus facing.
///
/// Displays as `(x,y D)`, for example `(2,2 N)`.
///
/// # Example
///
/// ```rust
/// use grid_piece::core::{Direction, Position};
///
/// let start = Position::default();
/// let next = start.move_forward();
///
/// assert_eq!(next, Position::new(0, 1, Direction::North));
/// assert_eq!(start.to_string(), "(0,0 N)"); // original untouched
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
    facing: Direction,
}

impl Position {
    /// Create a position at cell `(x, y)` facing `facing`.
    pub fn new(x: i32, y: i32, facing: Direction) -> Self {
        Self { x, y, facing }
    }

    /// Column, growing eastward.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row, growing northward.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Direction a forward move will take.
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Cell coordinates without the facing.
    pub fn cell(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Step one cell in the facing direction.
    ///
    /// North increases `y`, East increases `x`. No bounds are checked;
    /// consult [`is_on_boundary_edge`](Self::is_on_boundary_edge) first.
    pub fn move_forward(self) -> Self {
        let (x, y) = match self.facing {
            Direction::North => (self.x, self.y + 1),
            Direction::South => (self.x, self.y - 1),
            Direction::East => (self.x + 1, self.y),
            Direction::West => (self.x - 1, self.y),
        };
        Self { x, y, ..self }
    }

    /// Turn counterclockwise in place.
    pub fn rotate_left(self) -> Self {
        Self {
            facing: self.facing.rotate_left(),
            ..self
        }
    }

    /// Turn clockwise in place.
    pub fn rotate_right(self) -> Self {
        Self {
            facing: self.facing.rotate_right(),
            ..self
        }
    }

    /// Whether the piece already sits on the limit it faces.
    ///
    /// True when facing North on `max_y`, South on `min_y`, East on
    /// `max_x` or West on `min_x`. A forward move from such a position
    /// would leave the grid.
    pub fn is_on_boundary_edge(&self, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> bool {
        match self.facing {
            Direction::North => self.y == max_y,
            Direction::South => self.y == min_y,
            Direction::East => self.x == max_x,
            Direction::West => self.x == min_x,
        }
    }

    /// [`is_on_boundary_edge`](Self::is_on_boundary_edge) against a [`Bounds`] value.
    pub fn is_on_edge_of(&self, bounds: &Bounds) -> bool {
        self.is_on_boundary_edge(bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y)
    }

    /// Apply a command with no boundary check.
    pub fn apply(self, command: Command) -> Self {
        match command {
            Command::Move => self.move_forward(),
            Command::RotateLeft => self.rotate_left(),
            Command::RotateRight => self.rotate_right(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{} {})", self.x, self.y, self.facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin_facing_north() {
        let position = Position::default();
        assert_eq!(position.x(), 0);
        assert_eq!(position.y(), 0);
        assert_eq!(position.facing(), Direction::North);
    }

    #[test]
    fn move_forward_in_each_direction() {
        let at = |facing| Position::new(2, 2, facing);

        assert_eq!(at(Direction::North).move_forward().cell(), (2, 3));
        assert_eq!(at(Direction::South).move_forward().cell(), (2, 1));
        assert_eq!(at(Direction::East).move_forward().cell(), (3, 2));
        assert_eq!(at(Direction::West).move_forward().cell(), (1, 2));
    }

    #[test]
    fn move_forward_keeps_facing() {
        for facing in Direction::ALL {
            assert_eq!(Position::new(1, 1, facing).move_forward().facing(), facing);
        }
    }

    #[test]
    fn rotation_keeps_cell() {
        let position = Position::new(3, 1, Direction::East);
        assert_eq!(
            position.rotate_left(),
            Position::new(3, 1, Direction::North)
        );
        assert_eq!(
            position.rotate_right(),
            Position::new(3, 1, Direction::South)
        );
    }

    #[test]
    fn edge_detection_depends_on_facing() {
        // Top-right corner: only North and East face outward.
        let corner = |facing| Position::new(4, 4, facing);
        assert!(corner(Direction::North).is_on_boundary_edge(0, 4, 0, 4));
        assert!(corner(Direction::East).is_on_boundary_edge(0, 4, 0, 4));
        assert!(!corner(Direction::South).is_on_boundary_edge(0, 4, 0, 4));
        assert!(!corner(Direction::West).is_on_boundary_edge(0, 4, 0, 4));

        let origin = |facing| Position::new(0, 0, facing);
        assert!(!origin(Direction::North).is_on_boundary_edge(0, 4, 0, 4));
        assert!(!origin(Direction::East).is_on_boundary_edge(0, 4, 0, 4));
        assert!(origin(Direction::South).is_on_boundary_edge(0, 4, 0, 4));
        assert!(origin(Direction::West).is_on_boundary_edge(0, 4, 0, 4));
    }

    #[test]
    fn edge_detection_uses_each_axis_limit() {
        let bounds = Bounds {
            min_x: -1,
            max_x: 6,
            min_y: 2,
            max_y: 3,
        };
        assert!(Position::new(6, 2, Direction::East).is_on_edge_of(&bounds));
        assert!(Position::new(-1, 2, Direction::West).is_on_edge_of(&bounds));
        assert!(Position::new(0, 3, Direction::North).is_on_edge_of(&bounds));
        assert!(Position::new(0, 2, Direction::South).is_on_edge_of(&bounds));
        assert!(!Position::new(0, 2, Direction::North).is_on_edge_of(&bounds));
    }

    #[test]
    fn apply_dispatches_each_command() {
        let start = Position::default();
        assert_eq!(start.apply(Command::Move), start.move_forward());
        assert_eq!(start.apply(Command::RotateLeft), start.rotate_left());
        assert_eq!(start.apply(Command::RotateRight), start.rotate_right());
    }

    #[test]
    fn display_form() {
        assert_eq!(Position::new(2, 2, Direction::North).to_string(), "(2,2 N)");
        assert_eq!(Position::new(0, 4, Direction::South).to_string(), "(0,4 S)");
        assert_eq!(Position::new(-1, 10, Direction::West).to_string(), "(-1,10 W)");
    }

    #[test]
    fn position_serializes_correctly() {
        let position = Position::new(1, 3, Direction::East);
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, r#"{"x":1,"y":3,"facing":"East"}"#);
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(position, deserialized);
    }
}
