//! Alternating turn invariant: plies alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the k-th ply (k from 1) is X when k is odd and O when even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(ply, snapshot)| {
                snapshot
                    .played()
                    .is_some_and(|mv| mv.player == Player::to_move_at(ply - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_replayed_game_holds() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
        ]);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_player_violates() {
        let mut game = GameState::replay(&[Position::TopLeft, Position::Center]);
        game.snapshots[2].played = Some(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
