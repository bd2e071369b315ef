//! Compass direction the piece is facing.
//!
//! Rotations are explicit lookup tables rather than arithmetic on the
//! variant order, so inserting or reordering variants cannot silently
//! change the cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four compass directions.
///
/// The clockwise cycle is North → East → South → West → North.
///
/// # Example
///
/// ```rust
/// use grid_piece::core::Direction;
///
/// assert_eq!(Direction::North.rotate_right(), Direction::East);
/// assert_eq!(Direction::North.rotate_left(), Direction::West);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order starting from North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Rotate 90 degrees clockwise.
    pub fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Rotate 90 degrees counterclockwise.
    pub fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Single-letter symbol used in the display form of a position.
    pub fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Full name for logging.
    pub fn name(&self) -> &str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
