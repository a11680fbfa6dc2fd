//! One interactive game: applies commands and decides what to redraw.

use crate::command::{Command, HELP};
use crate::render;
use strictly_timetravel::{GameError, GameHistory};
use tracing::{info, instrument};

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Show(String),
    /// Stop reading input.
    Quit,
}

/// A renderer session owning one game history.
#[derive(Debug, Default)]
pub struct Session {
    game: GameHistory,
}

impl Session {
    /// Starts a session from a replayed sequence of cells.
    #[instrument]
    pub fn with_moves(moves: &[usize]) -> Result<Self, GameError> {
        let game = GameHistory::replay(moves)?;
        info!(moves = moves.len(), "Session ready");
        Ok(Self { game })
    }

    /// The game being played.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Applies a command. Rejected intents leave the game unchanged.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Result<Reply, GameError> {
        let reply = match command {
            Command::Play(index) => {
                self.game.play(index)?;
                Reply::Show(self.frame())
            }
            Command::Jump(target) => {
                self.game.jump_to(target)?;
                Reply::Show(self.frame())
            }
            Command::Reset => {
                self.game.reset();
                Reply::Show(self.frame())
            }
            Command::Board => Reply::Show(self.frame()),
            Command::History => Reply::Show(render::move_list(&self.game)),
            Command::Json => Reply::Show(self.json()),
            Command::Help => Reply::Show(HELP.to_string()),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    /// Advice after a rejected play, when the game at the current move
    /// is already won or drawn.
    pub fn rejection_hint(&self) -> Option<&'static str> {
        self.game
            .status()
            .is_decided()
            .then_some("Game over; use 'jump <move>' to go back and play on.")
    }

    /// Board and status for the current move.
    pub fn frame(&self) -> String {
        render::frame(&self.game.view())
    }

    /// Current view as pretty JSON.
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(&self.game.view())
            .unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"))
    }
}
