//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use derive_more::{Display, Error};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Cells to replay before starting, as keypad keys 1-9 or labels, comma separated
        #[arg(long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,
    },

    /// Print the position reached by replaying moves, then exit
    Show {
        /// Cells to replay, as keypad keys 1-9 (as printed on the board) or labels, comma separated
        #[arg(long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// History index to view after replaying (defaults to the latest)
        #[arg(long)]
        at: Option<usize>,

        /// List the newest move first
        #[arg(long)]
        descending: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { moves: Vec::new() }
    }
}

/// A `--moves` entry that names no cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("'{}' is not a cell (use 1-9 or a label such as top-left)", input)]
pub struct ParsePositionError {
    /// The rejected text.
    pub input: String,
}

/// Parses one `--moves` entry.
pub fn parse_position(s: &str) -> Result<Position, ParsePositionError> {
    Position::parse(s).ok_or_else(|| ParsePositionError {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_play() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
    }

    #[test]
    fn test_show_parses_moves() {
        let cli = Cli::try_parse_from([
            "rewind",
            "show",
            "--moves",
            "1,5,top-center",
            "--at",
            "1",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Show {
                moves: vec![Position::TopLeft, Position::Center, Position::TopCenter],
                at: Some(1),
                descending: false,
                json: true,
            })
        );
    }

    #[test]
    fn test_bad_cell_is_rejected() {
        assert!(Cli::try_parse_from(["rewind", "show", "--moves", "1,0"]).is_err());
        assert_eq!(
            parse_position("nowhere").unwrap_err().to_string(),
            "'nowhere' is not a cell (use 1-9 or a label such as top-left)"
        );
    }

    #[test]
    fn test_moves_use_board_keys() {
        // The key printed on an empty cell plays that cell.
        assert_eq!(parse_position("7"), Ok(Position::BottomLeft));
        assert_eq!(parse_position("9"), Ok(Position::BottomRight));
    }
}
