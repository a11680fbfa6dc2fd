//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
