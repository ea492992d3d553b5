//! Moves and the outcomes of trying to play or navigate.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a play request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed position already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejection {}

/// Result of a play request.
///
/// Rejected requests are a normal no-op, so callers are free to ignore
/// the outcome entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The mark was placed.
    Placed(Move),
    /// Nothing changed.
    Ignored(MoveRejection),
}

impl PlayOutcome {
    /// Returns true if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}

/// Request to view a history index that was never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NavigationError {
    /// Index is past the end of the recorded history.
    #[display("History index {} is out of range (history holds {} entries)", requested, len)]
    OutOfRange {
        /// Index that was requested.
        requested: usize,
        /// Number of recorded entries.
        len: usize,
    },
}

impl std::error::Error for NavigationError {}
