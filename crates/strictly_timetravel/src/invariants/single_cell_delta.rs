//! Snapshot invariant: each snapshot adds exactly one mark to the last.

use super::Invariant;
use crate::{Board, GameHistory, Move};

/// Invariant: the first snapshot is empty and every later snapshot
/// differs from its predecessor in exactly one cell, empty to occupied.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        snapshots.first() == Some(&Board::new())
            && snapshots
                .windows(2)
                .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark on an empty cell"
    }
}
