//! Move-list entries describing each recorded position.

use super::action::Move;
use serde::{Deserialize, Serialize};

/// One entry of the move list, derived from the history.
///
/// `row` and `col` locate the cell played to reach this entry; both are 0
/// for the start entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History index this entry navigates to.
    pub index: usize,
    /// True only for the empty starting board.
    pub is_start: bool,
    /// Row of the cell played (0-2).
    pub row: usize,
    /// Column of the cell played (0-2).
    pub col: usize,
    /// True only for the most recently recorded position.
    pub is_latest: bool,
}

impl MoveDescriptor {
    /// Describes history entry `index`, reached by `played`.
    pub fn new(index: usize, played: Option<Move>, is_latest: bool) -> Self {
        let (row, col) = played
            .map(|mv| (mv.position.row(), mv.position.col()))
            .unwrap_or((0, 0));
        Self {
            index,
            is_start: index == 0,
            row,
            col,
            is_latest,
        }
    }

    /// The latest entry is informational; every other entry can be jumped to.
    pub fn is_selectable(&self) -> bool {
        !self.is_latest
    }

    /// Text shown in the move list.
    pub fn label(&self) -> String {
        if self.is_latest {
            format!("You are at move #{}", self.index)
        } else if self.is_start {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{} ({}, {})", self.index, self.row, self.col)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_start_entry() {
        let entry = MoveDescriptor::new(0, None, false);
        assert!(entry.is_start);
        assert_eq!((entry.row, entry.col), (0, 0));
        assert_eq!(entry.label(), "Go to game start");
    }

    #[test]
    fn test_row_col_from_cell() {
        let entry = MoveDescriptor::new(3, Some(Move::new(Player::X, Position::MiddleRight)), false);
        assert_eq!((entry.row, entry.col), (1, 2));
        assert_eq!(entry.label(), "Go to move #3 (1, 2)");
        assert!(entry.is_selectable());
    }

    #[test]
    fn test_latest_entry_is_plain_text() {
        let entry = MoveDescriptor::new(2, Some(Move::new(Player::O, Position::BottomLeft)), true);
        assert_eq!(entry.label(), "You are at move #2");
        assert!(!entry.is_selectable());
    }

    #[test]
    fn test_fresh_game_latest_is_start() {
        let entry = MoveDescriptor::new(0, None, true);
        assert!(entry.is_start);
        assert_eq!(entry.label(), "You are at move #0");
    }
}
