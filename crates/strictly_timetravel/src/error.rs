//! Error types for rejected intents.

use super::{Mark, Position};

/// A move the board engine refused to apply.
///
/// Rejections are ordinary outcomes of user input (clicking a filled
/// cell, playing after the game ended) and never change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is outside 0-8.
    #[display("Position {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },

    /// The cell already holds a mark.
    #[display("Square {position} is already occupied")]
    SquareOccupied {
        /// The occupied position.
        position: Position,
    },

    /// A line is already complete.
    #[display("Game is already over ({winner} won)")]
    GameOver {
        /// The mark holding the completed line.
        winner: Mark,
    },
}

impl std::error::Error for MoveError {}

/// A jump target outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// Target is not in `0..len`.
    #[display("Move {requested} is out of range (history has {len} entries)")]
    OutOfRange {
        /// The requested move.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Any error raised by a history operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// A rejected move.
    #[display("{_0}")]
    Move(MoveError),
    /// A rejected jump.
    #[display("{_0}")]
    Jump(JumpError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(err) => Some(err),
            GameError::Jump(err) => Some(err),
        }
    }
}
