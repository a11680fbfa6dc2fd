//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here holds
//! state; the history store calls in to validate and apply moves.

pub mod draw;
pub mod placement;
pub mod win;

pub use draw::{is_draw, is_full};
pub use placement::apply_move;
pub use win::{LINES, winner};
