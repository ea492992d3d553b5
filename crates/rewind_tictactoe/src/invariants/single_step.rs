//! Single step invariant: each snapshot adds exactly one mark.

use super::super::GameState;
use super::Invariant;

/// Invariant: snapshot k is snapshot k-1 plus one mark, placed on a
/// previously empty square named by move k.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match after.played() {
                Some(mv) => {
                    before.board().is_empty(mv.position)
                        && *after.board() == before.board().with_mark(mv.position, mv.player)
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each recorded move fills exactly one previously empty square"
    }
}
