//! First-class move records.
//!
//! History stores boards, not moves. A [`Move`] is recovered by
//! comparing two consecutive snapshots.

use super::{Board, Cell, Mark, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct Move {
    /// The mark placed.
    mark: Mark,
    /// Where it was placed.
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Recovers the move leading from `before` to `after`.
    ///
    /// Returns `None` unless the boards differ in exactly one cell
    /// and that cell went from empty to occupied.
    #[instrument(skip(before, after))]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        let mut changed = before
            .cells()
            .iter()
            .zip(after.cells())
            .enumerate()
            .filter(|(_, (b, a))| b != a);

        let (index, (was, now)) = changed.next()?;
        if changed.next().is_some() {
            return None;
        }

        match (was, now) {
            (Cell::Empty, Cell::Occupied(mark)) => {
                Position::from_index(index).map(|position| Self::new(*mark, position))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;

    #[test]
    fn test_between_single_placement() {
        let before = Board::new();
        let after = apply_move(&before, 4, Mark::X).unwrap();
        assert_eq!(
            Move::between(&before, &after),
            Some(Move::new(Mark::X, Position::Center))
        );
    }

    #[test]
    fn test_between_rejects_identical_and_double_changes() {
        let before = Board::new();
        assert_eq!(Move::between(&before, &before), None);

        let one = apply_move(&before, 0, Mark::X).unwrap();
        let two = apply_move(&one, 1, Mark::O).unwrap();
        assert_eq!(Move::between(&before, &two), None);
        // Removal is not a move.
        assert_eq!(Move::between(&one, &before), None);
    }

    #[test]
    fn test_display() {
        let mov = Move::new(Mark::O, Position::BottomLeft);
        assert_eq!(mov.to_string(), "O -> Bottom-left");
        assert_eq!(*mov.position(), Position::BottomLeft);
    }
}
