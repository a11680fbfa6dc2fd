//! Move history with time travel.
//!
//! [`GameHistory`] owns every board snapshot since the start of the game
//! plus a pointer to the one being shown. Jumping moves the pointer.
//! Playing from an earlier point discards the snapshots after it.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{apply_move, is_full, winner};
use super::{Board, GameStatus, JumpError, Mark, Move, MoveError};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Ordered board snapshots and the current move pointer.
///
/// Invariants:
/// - `snapshots` is never empty; index 0 is the empty board.
/// - `current_move < snapshots.len()`.
/// - consecutive snapshots differ by one newly placed mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Board>,
    current_move: usize,
}

/// One row of the move list a renderer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Move number (index into history).
    pub index: usize,
    /// Button text for jumping here.
    pub label: String,
    /// Whether this entry is the one currently shown.
    pub is_current: bool,
}

/// Read-only snapshot of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryView {
    /// Board at the current move.
    pub board: Board,
    /// Status at the current move.
    pub status: GameStatus,
    /// Current move pointer.
    pub current_move: usize,
    /// One entry per snapshot.
    pub entries: Vec<HistoryEntry>,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Builds a history by playing `indices` in order from the start.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for &index in indices {
            history.play(index)?;
        }
        Ok(history)
    }

    /// Board at the current move.
    pub fn current_board(&self) -> Board {
        self.snapshots[self.current_move]
    }

    /// Current move pointer.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Mark that plays next from the current move.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Status of the board at the current move.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(mark) = winner(&board) {
            GameStatus::Winner(mark)
        } else if is_full(&board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_mark())
        }
    }

    /// Plays the next mark at `index` from the current move.
    ///
    /// Snapshots after the current move are discarded, the new board is
    /// appended, and the pointer moves to it. A rejected move leaves the
    /// history untouched.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.snapshots.len()))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let mark = self.next_mark();
        let next = apply_move(&self.current_board(), index, mark).map_err(|err| {
            warn!(%err, "Move rejected");
            err
        })?;

        let discarded = self.snapshots.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Branching history");
        }
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(next);
        self.current_move = self.snapshots.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after play"
        );

        let status = self.status();
        debug!(%mark, index, %status, "Move played");
        Ok(status)
    }

    /// Moves the pointer to `target` without altering history.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), JumpError> {
        if target >= self.snapshots.len() {
            warn!(target, "Jump out of range");
            return Err(JumpError::OutOfRange {
                requested: target,
                len: self.snapshots.len(),
            });
        }
        self.current_move = target;
        debug!(target, "Jumped");
        Ok(())
    }

    /// Returns to the initial empty board, dropping all history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Button text for jumping to `index`.
    pub fn move_label(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        }
    }

    /// The move that produced each snapshot after the first.
    ///
    /// Includes moves past the current pointer that have not yet been
    /// discarded.
    pub fn moves(&self) -> Vec<Move> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| Move::between(&pair[0], &pair[1]))
            .collect()
    }

    /// Move list entries for every snapshot.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.snapshots.len())
            .map(|index| HistoryEntry {
                index,
                label: Self::move_label(index),
                is_current: index == self.current_move,
            })
            .collect()
    }

    /// Everything a renderer needs to redraw.
    pub fn view(&self) -> HistoryView {
        HistoryView {
            board: self.current_board(),
            status: self.status(),
            current_move: self.current_move,
            entries: self.entries(),
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), Board::new());
        assert_eq!(history.status(), GameStatus::InProgress(Mark::X));
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut history = GameHistory::new();
        let status = history.play(4).unwrap();
        assert_eq!(status, GameStatus::InProgress(Mark::O));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.current_board().get(4), Some(Cell::Occupied(Mark::X)));
        // The initial snapshot is untouched.
        assert_eq!(history.snapshots()[0], Board::new());
    }

    #[test]
    fn test_rejected_play_is_noop() {
        let mut history = GameHistory::replay(&[4]).unwrap();
        let before = history.clone();
        assert_eq!(
            history.play(4),
            Err(MoveError::SquareOccupied {
                position: Position::Center
            })
        );
        assert_eq!(history.play(42), Err(MoveError::OutOfBounds { index: 42 }));
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut history = GameHistory::replay(&[0, 1, 2]).unwrap();
        history.jump_to(1).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.next_mark(), Mark::O);
        assert_eq!(history.current_board().occupied(), 1);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut history = GameHistory::replay(&[0]).unwrap();
        assert_eq!(
            history.jump_to(2),
            Err(JumpError::OutOfRange { requested: 2, len: 2 })
        );
        assert_eq!(history.current_move(), 1);
    }

    #[test]
    fn test_play_after_jump_discards_future() {
        let mut history = GameHistory::replay(&[0, 1, 2, 3]).unwrap();
        history.jump_to(2).unwrap();
        history.play(8).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_move(), 3);
        assert_eq!(
            history.moves().last().copied(),
            Some(Move::new(Mark::X, Position::BottomRight))
        );
    }

    #[test]
    fn test_jump_back_from_won_reenables_play() {
        let mut history = GameHistory::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(history.status(), GameStatus::Winner(Mark::X));
        history.jump_to(4).unwrap();
        assert_eq!(history.status(), GameStatus::InProgress(Mark::X));
        assert_eq!(history.play(8).unwrap(), GameStatus::InProgress(Mark::O));
        assert_eq!(history.len(), 6);
    }

    #[test]
    fn test_move_labels() {
        assert_eq!(GameHistory::move_label(0), "Go to game start");
        assert_eq!(GameHistory::move_label(3), "Go to move #3");
    }

    #[test]
    fn test_entries_mark_current() {
        let mut history = GameHistory::replay(&[0, 1]).unwrap();
        history.jump_to(1).unwrap();
        let entries = history.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "Go to game start");
        assert!(entries[1].is_current);
        assert!(!entries[2].is_current);
    }

    #[test]
    fn test_reset() {
        let mut history = GameHistory::replay(&[0, 1, 2]).unwrap();
        history.reset();
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_invariants_detect_corruption() {
        let mut history = GameHistory::replay(&[0, 1]).unwrap();
        // Two marks placed in one step.
        history.snapshots[2] = Board::from_cells([
            Cell::Occupied(Mark::X),
            Cell::Occupied(Mark::O),
            Cell::Occupied(Mark::X),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        history.current_move = 5;

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        assert_eq!(
            GameHistory::replay(&[0, 0]),
            Err(MoveError::SquareOccupied {
                position: Position::TopLeft
            })
        );
    }
}
