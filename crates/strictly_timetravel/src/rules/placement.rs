//! Move application.

use super::win::winner;
use crate::{Board, Mark, MoveError, Position};
use tracing::instrument;

/// Places `mark` at `index`, returning the resulting board.
///
/// Checks, in order: the game is not already decided, the index is on
/// the board, the cell is empty. The input board is never modified.
///
/// Only a completed line yields [`MoveError::GameOver`]. A drawn board
/// has no empty cell, so every move on it is [`MoveError::SquareOccupied`].
#[instrument(level = "debug")]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    if let Some(winner) = winner(board) {
        return Err(MoveError::GameOver { winner });
    }

    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds { index })?;

    if !board.is_empty(index) {
        return Err(MoveError::SquareOccupied { position });
    }

    Ok(board.with(index, mark.into()))
}
