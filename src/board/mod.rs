//! Board controller.
//!
//! The board owns the grid limits and the single mutable piece position.
//! It delegates geometry to [`Position`] and refuses forward moves that
//! its [`Guard`] rejects.

use crate::core::{Bounds, Command, Guard, MoveHistory, MoveOutcome, MoveRecord, Position};
use tracing::{debug, trace};

pub mod error;

pub use error::BoardError;

/// Side length used by [`Board::default`].
pub const DEFAULT_SIZE: u32 = 5;

/// Largest side length whose coordinates fit in `i32`.
pub const MAX_SIZE: u32 = i32::MAX as u32;

/// A bounded grid holding one piece.
///
/// The piece starts at `(0,0 N)`. Rotations always apply; a move is
/// ignored when the piece already faces the edge it stands on.
///
/// # Example
///
/// ```rust
/// use grid_piece::{Board, Command, Direction, Position};
///
/// let mut board = Board::new(5).unwrap();
/// board.apply_many([Command::Move, Command::RotateRight, Command::Move]);
///
/// assert_eq!(board.current_position(), Position::new(1, 1, Direction::East));
/// assert_eq!(board.current_position().to_string(), "(1,1 E)");
/// ```
#[derive(Debug)]
pub struct Board {
    bounds: Bounds,
    guard: Guard,
    current: Position,
    history: MoveHistory,
    track_history: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_valid_bounds(Bounds::square(DEFAULT_SIZE as i32))
    }
}

impl Board {
    /// Create a square board with coordinates `[0, size - 1]` on both axes.
    pub fn new(size: u32) -> Result<Self, BoardError> {
        let side = i32::try_from(size)
            .ok()
            .filter(|side| *side > 0)
            .ok_or(BoardError::InvalidSize {
                size,
                max: MAX_SIZE,
            })?;
        Ok(Self::from_valid_bounds(Bounds::square(side)))
    }

    /// Create a board with arbitrary inclusive limits.
    ///
    /// The piece starts at `(0,0 N)`, so the limits must contain the origin.
    /// Inverted limits or limits that exclude the origin are rejected.
    pub fn with_bounds(bounds: Bounds) -> Result<Self, BoardError> {
        if !bounds.is_valid() || !bounds.contains(&Position::default()) {
            return Err(BoardError::InvalidBounds {
                min_x: bounds.min_x,
                max_x: bounds.max_x,
                min_y: bounds.min_y,
                max_y: bounds.max_y,
            });
        }
        Ok(Self::from_valid_bounds(bounds))
    }

    fn from_valid_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            guard: Guard::forward_within(bounds),
            current: Position::default(),
            history: MoveHistory::new(),
            track_history: true,
        }
    }

    /// Stop recording applied commands.
    ///
    /// For long-running drivers that only need the current position;
    /// [`history`](Self::history) stays empty afterwards.
    pub fn without_history(mut self) -> Self {
        self.track_history = false;
        self.history.clear();
        self
    }

    /// Get current position (pure).
    pub fn current_position(&self) -> Position {
        self.current
    }

    /// Get the inclusive limits fixed at construction (pure).
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Get command history (pure).
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Apply a single command and return the resulting position.
    ///
    /// `None` leaves the board untouched. A blocked move is not an error:
    /// the position is returned unchanged.
    pub fn apply_one(&mut self, command: impl Into<Option<Command>>) -> Position {
        let Some(command) = command.into() else {
            return self.current;
        };

        let from = self.current;
        let (to, outcome) = match command {
            Command::Move if !self.guard.check(&from) => {
                debug!(position = %from, "move blocked at boundary edge");
                (from, MoveOutcome::Blocked)
            }
            Command::Move => (from.apply(command), MoveOutcome::Moved),
            Command::RotateLeft | Command::RotateRight => (from.apply(command), MoveOutcome::Rotated),
        };
        trace!(
            %command,
            %from,
            %to,
            facing = to.facing().name(),
            ?outcome,
            "applied command"
        );

        if self.track_history {
            self.history.record(MoveRecord {
                command,
                from,
                to,
                outcome,
            });
        }
        self.current = to;
        to
    }

    /// Apply commands in order and return the final position.
    ///
    /// An empty sequence is a no-op. Each command either applies or is
    /// safely ignored at an edge, so there is nothing to roll back.
    pub fn apply_many<I>(&mut self, commands: I) -> Position
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.apply_one(command);
        }
        self.current
    }

    /// Return the piece to `(0,0 N)` and forget the history.
    ///
    /// History tracking keeps whatever setting the board had.
    pub fn reset(&mut self) {
        self.current = Position::default();
        self.history.clear();
    }
}
