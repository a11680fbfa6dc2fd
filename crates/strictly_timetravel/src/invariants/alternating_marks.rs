//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameHistory, Mark};

/// Invariant: the move producing snapshot `k` placed X when `k` is odd
/// and O when `k` is even.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        let moves = history.moves();
        moves.len() + 1 == history.len()
            && moves.first().is_none_or(|first| *first.mark() == Mark::X)
            && moves
                .windows(2)
                .all(|pair| *pair[1].mark() == pair[0].mark().opponent())
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
