//! Pointer invariant: the current move indexes an existing snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `current_move < len` and history is never empty.
pub struct PointerInRangeInvariant;

impl Invariant<GameHistory> for PointerInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        !history.is_empty() && history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "Current move points at an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_jumps() {
        let mut history = GameHistory::replay(&[0, 1, 2]).unwrap();
        for target in [0, 3, 1, 2] {
            history.jump_to(target).unwrap();
            assert!(PointerInRangeInvariant::holds(&history));
        }
        assert!(history.jump_to(4).is_err());
        assert!(PointerInRangeInvariant::holds(&history));
    }
}
