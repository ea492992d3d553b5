//! Display order of the move list.

use rewind_tictactoe::MoveDescriptor;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is shown.
///
/// This is a display preference only; the game always reports moves oldest
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Oldest move at the top.
    #[default]
    Ascending,
    /// Newest move at the top.
    Descending,
}

impl MoveOrder {
    /// Toggles between ascending and descending.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Text of the sort toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort ↑",
            Self::Descending => "Sort ↓",
        }
    }

    /// Returns `moves` in this display order, leaving the input untouched.
    pub fn arrange(self, moves: &[MoveDescriptor]) -> Vec<MoveDescriptor> {
        match self {
            Self::Ascending => moves.to_vec(),
            Self::Descending => moves.iter().rev().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameState, Position};

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Descending.toggle(), MoveOrder::Ascending);
    }

    #[test]
    fn test_descending_reverses_without_touching_source() {
        let game = GameState::replay(&[Position::Center, Position::TopLeft]);
        let moves = game.list_moves();

        let shown = MoveOrder::Descending.arrange(&moves);
        let indices: Vec<usize> = shown.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![2, 1, 0]);

        assert_eq!(moves, game.list_moves());
        assert_eq!(MoveOrder::Ascending.arrange(&moves), moves);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MoveOrder::Ascending.label(), "Sort ↑");
        assert_eq!(MoveOrder::Descending.label(), "Sort ↓");
    }
}
