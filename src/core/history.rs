//! Command history tracking.
//!
//! Records each command the board applied together with the position
//! before and after, so callers can replay or audit a walk.

use super::command::Command;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// What a command did to the piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The piece advanced one cell.
    Moved,
    /// The piece turned in place.
    Rotated,
    /// A forward move was refused at the boundary edge.
    Blocked,
}

/// Record of a single applied command.
///
/// For a [`MoveOutcome::Blocked`] record `from` and `to` are equal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveRecord {
    pub command: Command,
    pub from: Position,
    pub to: Position,
    pub outcome: MoveOutcome,
}

/// Ordered history of applied commands.
///
/// # Example
///
/// ```rust
/// use grid_piece::core::{Command, Direction, MoveHistory, MoveOutcome, MoveRecord, Position};
///
/// let mut history = MoveHistory::new();
/// let start = Position::default();
/// history.record(MoveRecord {
///     command: Command::Move,
///     from: start,
///     to: start.move_forward(),
///     outcome: MoveOutcome::Moved,
/// });
///
/// let path = history.path();
/// assert_eq!(path, vec![start, Position::new(0, 1, Direction::North)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn record(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Get all records in the order they were applied.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no command has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Positions traversed: the first record's `from`, then every `to`.
    ///
    /// Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<Position> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// Every cell entered, in order, starting from the initial cell.
    ///
    /// Rotations and blocked moves do not enter a cell, so a cell appears
    /// once per arrival.
    pub fn visited_cells(&self) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        if let Some(first) = self.records.first() {
            cells.push(first.from.cell());
        }
        cells.extend(
            self.records
                .iter()
                .filter(|record| record.outcome == MoveOutcome::Moved)
                .map(|record| record.to.cell()),
        );
        cells
    }

    /// Number of forward moves refused at an edge.
    pub fn blocked_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.outcome == MoveOutcome::Blocked)
            .count()
    }
}
