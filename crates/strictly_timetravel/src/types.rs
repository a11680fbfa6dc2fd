//! Core domain types for tic-tac-toe.

use serde::Serialize;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark that moves after `moves_played` moves.
    ///
    /// X moves on even counts, O on odd.
    pub fn for_move(moves_played: usize) -> Self {
        if moves_played % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Playing a move produces a new board and
/// leaves the original untouched, so a board stored in history is
/// never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns a copy of this board with `index` set to `cell`.
    ///
    /// Callers validate `index` first; see [`crate::rules::apply_move`].
    pub(crate) fn with(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Status of the game at the current point in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum GameStatus {
    /// A mark completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board is full with no line.
    #[display("Draw")]
    Draw,
    /// Game is ongoing; holds the mark to play next.
    #[display("Next player: {}", _0)]
    InProgress(Mark),
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_move_alternates() {
        assert_eq!(Mark::for_move(0), Mark::X);
        assert_eq!(Mark::for_move(1), Mark::O);
        assert_eq!(Mark::for_move(8), Mark::X);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_mark_and_from() {
        assert_eq!(Cell::from(Mark::O), Cell::Occupied(Mark::O));
        assert_eq!(Cell::from(Mark::X).mark(), Some(Mark::X));
        assert_eq!(Cell::Empty.mark(), None);
    }

    #[test]
    fn test_board_display() {
        let board = Board::new()
            .with(0, Cell::Occupied(Mark::X))
            .with(4, Cell::Occupied(Mark::O));
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_with_leaves_original() {
        let board = Board::new();
        let next = board.with(3, Cell::Occupied(Mark::O));
        assert!(board.is_empty(3));
        assert_eq!(next.get(3), Some(Cell::Occupied(Mark::O)));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        assert!(!Board::new().is_empty(9));
        assert_eq!(Board::new().get(9), None);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Winner(Mark::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::InProgress(Mark::O).to_string(), "Next player: O");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_is_decided() {
        assert!(GameStatus::Winner(Mark::O).is_decided());
        assert!(GameStatus::Draw.is_decided());
        assert!(!GameStatus::InProgress(Mark::X).is_decided());
    }
}
