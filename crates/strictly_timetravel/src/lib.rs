//! Strictly Timetravel - tic-tac-toe with move history and time travel
//!
//! The crate is the game core behind a board UI. A renderer sends
//! intents (play a cell, jump to a move) and reads back the board,
//! status and move list after each call.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a 9-cell [`Board`] ([`rules::winner`],
//!   [`rules::apply_move`])
//! - **History**: [`GameHistory`] owns the snapshots and the current move
//! - **Invariants**: checkable properties of a history ([`invariants`])
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameHistory, GameStatus, Mark};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.play(cell)?;
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Mark::X));
//!
//! game.jump_to(0)?;
//! game.play(4)?;
//! assert_eq!(game.len(), 2);
//! # Ok::<(), strictly_timetravel::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use error::{GameError, JumpError, MoveError};
pub use history::{GameHistory, HistoryEntry, HistoryView};
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Mark};
