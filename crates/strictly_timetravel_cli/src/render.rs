//! Text rendering of a history view.
//!
//! Rendering only reads; it never calls back into the game.

use strictly_timetravel::{GameHistory, HistoryView, Position};

/// Board, status line, and the cells still open for `play`.
pub fn frame(view: &HistoryView) -> String {
    let mut out = format!("{}\n\n{}", view.board, view.status);
    if !view.status.is_decided() {
        let open = Position::valid_moves(&view.board)
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\nOpen cells: {open}"));
    }
    out
}

/// Numbered move list, current entry marked with `>`.
pub fn move_list(game: &GameHistory) -> String {
    let moves = game.moves();
    game.entries()
        .iter()
        .map(|entry| {
            let cursor = if entry.is_current { '>' } else { ' ' };
            // Entry k was produced by move k-1.
            match entry.index.checked_sub(1).and_then(|i| moves.get(i)) {
                Some(mov) => format!("{cursor} {:>2}. {} ({mov})", entry.index, entry.label),
                None => format!("{cursor} {:>2}. {}", entry.index, entry.label),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame() {
        let game = GameHistory::replay(&[0, 4]).unwrap();
        assert_eq!(
            frame(&game.view()),
            "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9\n\nNext player: X\nOpen cells: 1, 2, 3, 5, 6, 7, 8"
        );
    }

    #[test]
    fn test_frame_omits_open_cells_once_decided() {
        let game = GameHistory::replay(&[0, 3, 1, 4, 2]).unwrap();
        let text = frame(&game.view());
        assert!(text.ends_with("Winner: X"));
        assert!(!text.contains("Open cells"));
    }

    #[test]
    fn test_move_list_marks_current() {
        let mut game = GameHistory::replay(&[4]).unwrap();
        game.jump_to(0).unwrap();
        assert_eq!(
            move_list(&game),
            ">  0. Go to game start\n   1. Go to move #1 (X -> Center)"
        );
    }
}
