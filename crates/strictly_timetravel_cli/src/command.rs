//! Parsing of typed user intents.

use strictly_timetravel::Position;
use tracing::instrument;

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark at a cell.
    Play(usize),
    /// Move the history pointer.
    Jump(usize),
    /// Show the move list.
    History,
    /// Redraw the board and status.
    Board,
    /// Start over.
    Reset,
    /// Print the current view as JSON.
    Json,
    /// Show available commands.
    Help,
    /// Leave the prompt.
    Quit,
}

/// Input that does not name a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty input")]
    Empty,
    /// First word is not a command.
    #[display("Unknown command '{_0}' (try 'help')")]
    Unknown(String),
    /// Command needs an argument.
    #[display("'{_0}' needs an argument")]
    MissingArgument(&'static str),
    /// Argument could not be read.
    #[display("Cannot read '{_0}' as {_1}")]
    BadArgument(String, &'static str),
}

impl std::error::Error for CommandError {}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  play <cell>   place the next mark (0-8 or a label such as 'center')
  jump <move>   go to a move in history (0 is the game start)
  history       list moves
  board         redraw the board
  reset         start a new game
  json          print the current view as JSON
  help          show this text
  quit          exit";

impl Command {
    /// Parses one line of input.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "play" | "p" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("play"));
                }
                // Out-of-range numbers go through so the engine reports them.
                match rest.parse::<usize>() {
                    Ok(index) => Ok(Command::Play(index)),
                    Err(_) => Position::parse(rest)
                        .map(|pos| Command::Play(pos.to_index()))
                        .ok_or_else(|| CommandError::BadArgument(rest.to_string(), "a cell")),
                }
            }
            "jump" | "j" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("jump"));
                }
                rest.parse::<usize>()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::BadArgument(rest.to_string(), "a move number"))
            }
            "history" | "h" => Ok(Command::History),
            "board" | "b" => Ok(Command::Board),
            "reset" => Ok(Command::Reset),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
