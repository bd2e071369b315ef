//! Board construction errors.

use thiserror::Error;

/// Errors that can occur when creating a board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Side length is zero or does not fit the coordinate type
    #[error("Invalid board size {size}, expected 1..={max}")]
    InvalidSize { size: u32, max: u32 },

    /// Lower limit exceeds upper limit on an axis
    #[error("Invalid bounds x=[{min_x}, {max_x}] y=[{min_y}, {max_y}]")]
    InvalidBounds {
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    },
}
