//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells forming a row, column, or diagonal.
pub type Line = [Position; 3];

/// The 8 winning lines, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board for three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete.
    NoWinner,
    /// `player` owns every cell of `line`.
    Winner {
        /// The winning mark.
        player: Player,
        /// The completed line.
        line: Line,
    },
}

impl WinResult {
    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner { player, .. } => Some(*player),
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner { line, .. } => Some(*line),
        }
    }
}

/// Evaluates a board for a completed line.
///
/// Works on any board, including ones unreachable in play. When more than
/// one line is complete the first in [`LINES`] order is reported.
#[instrument]
pub fn evaluate(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return WinResult::Winner { player, line };
        }
    }

    WinResult::NoWinner
}

/// Returns the winning player, if any.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}
