//! Commands accepted by the board and their textual tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One atomic instruction for the piece.
///
/// Tokens are the single letters `M`, `L` and `R`.
///
/// # Example
///
/// ```rust
/// use grid_piece::core::Command;
///
/// let command: Command = "M".parse().unwrap();
/// assert_eq!(command, Command::Move);
/// assert!("X".parse::<Command>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Advance one cell in the facing direction.
    Move,
    /// Turn 90 degrees counterclockwise in place.
    RotateLeft,
    /// Turn 90 degrees clockwise in place.
    RotateRight,
}

impl Command {
    /// Input token for this command.
    pub fn token(self) -> &'static str {
        match self {
            Self::Move => "M",
            Self::RotateLeft => "L",
            Self::RotateRight => "R",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Errors raised when turning input text into commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Unknown command token {token:?}, expected one of M, L, R")]
    UnknownToken { token: String },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "M" => Ok(Self::Move),
            "L" => Ok(Self::RotateLeft),
            "R" => Ok(Self::RotateRight),
            other => Err(ParseCommandError::UnknownToken {
                token: other.to_string(),
            }),
        }
    }
}

/// Parse a whitespace-separated list of tokens.
///
/// Fails on the first unknown token; nothing is returned for the tokens
/// before it.
///
/// # Example
///
/// ```rust
/// use grid_piece::core::{parse_commands, Command};
///
/// let commands = parse_commands("M R\nM").unwrap();
/// assert_eq!(commands, vec![Command::Move, Command::RotateRight, Command::Move]);
/// ```
pub fn parse_commands(input: &str) -> Result<Vec<Command>, ParseCommandError> {
    input.split_whitespace().map(str::parse).collect()
}
