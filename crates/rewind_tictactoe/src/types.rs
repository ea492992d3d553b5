//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the player to move at a given history index.
    ///
    /// X moves from even indices (including the empty board at 0), O from odd.
    pub fn to_move_at(index: usize) -> Self {
        if index % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares in row-major order.
    ///
    /// Any mix of marks is accepted, reachable or not.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    pub fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Empty squares show their 1-based key so the text doubles as a keypad.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pos in Position::ALL {
            match self.get(pos) {
                Square::Empty => write!(f, "{}", pos.key())?,
                Square::Occupied(player) => write!(f, "{}", player)?,
            }
            match pos.col() {
                2 if pos.row() < 2 => f.write_str("\n-+-+-\n")?,
                2 => {}
                _ => f.write_str("|")?,
            }
        }
        Ok(())
    }
}

/// Status of the currently viewed position.
///
/// The display forms are the exact status-line texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing; carries the player to move.
    #[display("Next player: {_0}")]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Board is full with no winner.
    #[display("Draw!")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game can take no further moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Player::to_move_at(0), Player::X);
        assert_eq!(Player::to_move_at(1), Player::O);
        assert_eq!(Player::to_move_at(4), Player::X);
        assert_eq!(Player::to_move_at(7), Player::O);
    }

    #[test]
    fn test_board_display() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Draw.to_string(), "Draw!");
        assert_eq!(GameStatus::InProgress(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_with_mark_fills_one_square() {
        let board = Board::new().with_mark(Position::BottomRight, Player::X);
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
        assert!(!board.is_empty(Position::BottomRight));
        assert!(board.is_empty(Position::TopLeft));
    }
}
