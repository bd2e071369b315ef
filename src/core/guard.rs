//! Guard predicates for controlling forward moves.
//!
//! Guards are pure boolean functions evaluated against the current
//! position before a move is attempted.

use super::bounds::Bounds;
use super::position::Position;
use std::fmt;

/// Pure predicate that determines if a forward move may execute.
///
/// # Example
///
/// ```rust
/// use grid_piece::core::{Bounds, Direction, Guard, Position};
///
/// let guard = Guard::forward_within(Bounds::square(5));
///
/// assert!(guard.check(&Position::new(0, 3, Direction::North)));
/// assert!(!guard.check(&Position::new(0, 4, Direction::North)));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&Position) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Position) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Allow a forward move only when the piece is not already on the
    /// edge it faces.
    pub fn forward_within(bounds: Bounds) -> Self {
        Self::new(move |position: &Position| !position.is_on_edge_of(&bounds))
    }

    /// Check if the guard allows a move from this position.
    pub fn check(&self, position: &Position) -> bool {
        (self.predicate)(position)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
