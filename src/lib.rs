//! Grid Piece: a single directional piece walking a bounded square grid
//!
//! The crate follows the "pure core, imperative shell" split. The core
//! value types never mutate; the [`Board`] is the only holder of state
//! and the bundled binary is the only place that performs I/O.
//!
//! # Core Concepts
//!
//! - **Position**: immutable `(x, y, facing)` snapshot with pure transforms
//! - **Command**: `Move`, `RotateLeft` or `RotateRight`, parsed from `M`/`L`/`R`
//! - **Board**: owns the limits and the current position, refusing moves
//!   that would leave the grid
//!
//! # Example
//!
//! ```rust
//! use grid_piece::{parse_commands, Board, Direction, Position};
//!
//! let mut board = Board::default();
//! let commands = parse_commands("M M M M M M R R").unwrap();
//! let end = board.apply_many(commands);
//!
//! // Size 5 tops out at y = 4; the extra moves were ignored.
//! assert_eq!(end, Position::new(0, 4, Direction::South));
//! assert_eq!(end.to_string(), "(0,4 S)");
//! assert_eq!(board.history().blocked_count(), 2);
//! ```

pub mod board;
pub mod core;

// Re-export commonly used types
pub use board::{Board, BoardError, DEFAULT_SIZE};
pub use self::core::{parse_commands, Bounds, Command, Direction, ParseCommandError, Position};
