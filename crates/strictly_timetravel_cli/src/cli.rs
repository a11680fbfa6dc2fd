//! Command-line interface for the timetravel renderer.

use clap::Parser;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Play tic-tac-toe and jump through move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Comma-separated cell indices (0-8) to replay before the prompt
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<usize>,

    /// Print the final view as JSON on exit
    #[arg(long)]
    pub json: bool,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["timetravel"]);
        assert!(cli.moves.is_empty());
        assert!(!cli.json);
        assert_eq!(cli.log_filter, "warn");
    }

    #[test]
    fn test_moves_list() {
        let cli = Cli::parse_from(["timetravel", "--moves", "0,3,1", "--json"]);
        assert_eq!(cli.moves, vec![0, 3, 1]);
        assert!(cli.json);
    }
}
