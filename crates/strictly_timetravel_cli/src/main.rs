//! Timetravel - line-oriented tic-tac-toe renderer
//!
//! Reads one intent per line from stdin, hands it to the game, and
//! redraws from what the game reports back.

#![warn(missing_docs)]

mod cli;
mod command;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use command::{Command, CommandError};
use session::{Reply, Session};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting timetravel");

    let mut session = Session::with_moves(&cli.moves).context("Replaying --moves")?;
    run_prompt(&mut session)?;

    if cli.json {
        println!("{}", session.json());
    }

    Ok(())
}

/// Reads commands until `quit` or end of input.
fn run_prompt(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n", session.frame())?;
    writeln!(stdout, "Type 'help' for commands.")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        match session.handle(command) {
            Ok(Reply::Show(text)) => writeln!(stdout, "{text}")?,
            Ok(Reply::Quit) => break,
            Err(err) => {
                debug!(%err, "Intent rejected");
                writeln!(stdout, "Rejected: {err}")?;
                if matches!(command, Command::Play(_)) {
                    if let Some(hint) = session.rejection_hint() {
                        writeln!(stdout, "{hint}")?;
                    }
                    writeln!(stdout, "{}", session.frame())?;
                }
            }
        }
    }

    info!(moves = session.game().len() - 1, "Session finished");
    Ok(())
}
