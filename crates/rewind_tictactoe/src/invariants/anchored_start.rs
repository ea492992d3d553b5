//! Anchored start invariant: history begins at the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: the first snapshot is the empty board with no move, and the
/// viewed index points inside the history.
pub struct AnchoredStartInvariant;

impl Invariant<GameState> for AnchoredStartInvariant {
    fn holds(game: &GameState) -> bool {
        let Some(first) = game.snapshots().first() else {
            return false;
        };

        first.board() == &Board::new()
            && first.played().is_none()
            && game.current() < game.snapshots().len()
    }

    fn description() -> &'static str {
        "History starts at the empty board and the viewed index is recorded"
    }
}
