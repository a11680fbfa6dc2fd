//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark};
use tracing::instrument;

/// The eight winning lines as index triples.
///
/// Rows top-to-bottom, columns left-to-right, then the two diagonals.
/// [`winner`] scans them in this order and reports the first match.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark holds all three cells of a line,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        cells[a]
            .mark()
            .filter(|_| cells[a] == cells[b] && cells[a] == cells[c])
    })
}
