//! Core piece model.
//!
//! This module contains the pure value types of the simulation:
//! - Facing via [`Direction`]
//! - Immutable [`Position`] with move/rotate/edge transforms
//! - [`Command`] input and its token parsing
//! - [`Bounds`] and the [`Guard`] consulted before forward moves
//! - [`MoveHistory`] of applied commands
//!
//! Nothing in this module performs I/O or holds shared state.

mod bounds;
mod command;
mod direction;
mod guard;
mod history;
mod position;

pub use bounds::Bounds;
pub use command::{parse_commands, Command, ParseCommandError};
pub use direction::Direction;
pub use guard::Guard;
pub use history::{MoveHistory, MoveOutcome, MoveRecord};
pub use position::Position;
