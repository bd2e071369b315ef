//! Inclusive rectangular limits of the grid.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Inclusive coordinate limits on both axes.
///
/// Boards are square today, but the limits are kept per axis so a
/// rectangular board needs no change to the edge check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Square of side `size` anchored at the origin: `[0, size - 1]` on both axes.
    ///
    /// The caller must pass `size >= 1`; [`Board::new`](crate::board::Board::new)
    /// validates this before calling.
    pub fn square(size: i32) -> Self {
        Self {
            min_x: 0,
            max_x: size - 1,
            min_y: 0,
            max_y: size - 1,
        }
    }

    /// True if min does not exceed max on either axis.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// True if the position's cell lies within the limits on both axes.
    pub fn contains(&self, position: &Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.x())
            && (self.min_y..=self.max_y).contains(&position.y())
    }

    /// Number of columns.
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x) + 1
    }

    /// Number of rows.
    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y) + 1
    }

    /// Number of cells inside the limits.
    pub fn cell_count(&self) -> i64 {
        self.width() * self.height()
    }
}
