//! Game state with a navigable, truncate-on-branch move history.
//!
//! Every recorded position is a [`Snapshot`]: the board plus the move that
//! produced it. Keeping both in one entry means the board list and the move
//! list can never drift apart in length. `current` points at the snapshot
//! being viewed; playing from an earlier snapshot discards everything after
//! it before the new move is appended.

use super::action::{Move, MoveRejection, NavigationError, PlayOutcome};
use super::invariants::{HistoryInvariants, InvalidHistory, InvariantSet, assert_invariants};
use super::moves::MoveDescriptor;
use super::rules::{self, Line, WinResult};
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One recorded position in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) played: Option<Move>,
}

impl Snapshot {
    /// The empty starting position.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// Board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this board, `None` for the start.
    pub fn played(&self) -> Option<Move> {
        self.played
    }
}

/// Authoritative game state: the recorded history and the viewed position.
///
/// Deserialized states are checked against the history invariants, so a
/// value that would index outside its own history is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordedHistory")]
pub struct GameState {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) current: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RecordedHistory {
    snapshots: Vec<Snapshot>,
    current: usize,
}

impl TryFrom<RecordedHistory> for GameState {
    type Error = InvalidHistory;

    fn try_from(raw: RecordedHistory) -> Result<Self, Self::Error> {
        let game = Self {
            snapshots: raw.snapshots,
            current: raw.current,
        };
        HistoryInvariants::check_all(&game).map_err(InvalidHistory::new)?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::start()],
            current: 0,
        }
    }

    /// Builds a state by playing `positions` in order from the empty board.
    ///
    /// Positions that would be ignored by [`GameState::play_move`] are skipped.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Self {
        let mut game = Self::new();
        for pos in positions {
            let _ = game.play_move(*pos);
        }
        game
    }

    /// Plays the side to move at `position`.
    ///
    /// Playing into an occupied square, or on a board that already has a
    /// winner, leaves the state unchanged and reports why.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn play_move(&mut self, position: Position) -> PlayOutcome {
        let board = *self.board();

        if !board.is_empty(position) {
            debug!(?position, "Ignoring move into occupied square");
            return PlayOutcome::Ignored(MoveRejection::SquareOccupied(position));
        }
        if rules::check_winner(&board).is_some() {
            debug!(?position, "Ignoring move after game over");
            return PlayOutcome::Ignored(MoveRejection::GameOver);
        }

        let player = Player::to_move_at(self.current);
        let action = Move::new(player, position);
        let discarded = self.snapshots.len() - self.current - 1;

        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(Snapshot {
            board: board.with_mark(position, player),
            played: Some(action),
        });
        self.current = self.snapshots.len() - 1;

        debug!(%action, discarded, ply = self.current, "Move applied");
        assert_invariants(self);

        PlayOutcome::Placed(action)
    }

    /// Views the recorded position at `index` without altering history.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if index >= self.snapshots.len() {
            return Err(NavigationError::OutOfRange {
                requested: index,
                len: self.snapshots.len(),
            });
        }
        debug!(from = self.current, to = index, "Jumping through history");
        self.current = index;
        Ok(())
    }

    /// Board at the viewed position.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.current].board
    }

    /// Index of the viewed position.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of recorded positions (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the start position is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All recorded positions, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Index of the most recently recorded position.
    pub fn latest(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Move that produced the viewed board.
    pub fn latest_move(&self) -> Option<Move> {
        self.snapshots[self.current].played
    }

    /// Player whose turn it is at the viewed position.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.current)
    }

    /// Win evaluation of the viewed board.
    pub fn evaluation(&self) -> WinResult {
        rules::evaluate(self.board())
    }

    /// Status of the viewed position.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn status(&self) -> GameStatus {
        match self.evaluation() {
            WinResult::Winner { player, .. } => GameStatus::Won(player),
            WinResult::NoWinner if rules::is_draw(self.board()) => GameStatus::Draw,
            WinResult::NoWinner => GameStatus::InProgress(self.next_player()),
        }
    }

    /// Winning line at the viewed position, for highlighting.
    pub fn highlighted_line(&self) -> Option<Line> {
        self.evaluation().line()
    }

    /// Squares that would accept a move at the viewed position.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::empty_squares(self.board())
        }
    }

    /// Descriptors of every recorded position, oldest first.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn list_moves(&self) -> Vec<MoveDescriptor> {
        let latest = self.latest();
        self.snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| MoveDescriptor::new(index, snapshot.played, index == latest))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_new_game_starts_empty() {
        let game = GameState::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.current(), 0);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.latest_move(), None);
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_marks_alternate() {
        let mut game = GameState::new();
        assert_eq!(
            game.play_move(Center),
            PlayOutcome::Placed(Move::new(Player::X, Center))
        );
        assert_eq!(
            game.play_move(TopLeft),
            PlayOutcome::Placed(Move::new(Player::O, TopLeft))
        );
        assert_eq!(game.next_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut game = GameState::replay(&[Center]);
        let before = game.clone();
        assert_eq!(
            game.play_move(Center),
            PlayOutcome::Ignored(MoveRejection::SquareOccupied(Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_win_is_ignored() {
        let mut game = GameState::replay(&[TopLeft, Center, TopCenter, MiddleLeft, TopRight]);
        let before = game.clone();
        assert_eq!(
            game.play_move(BottomRight),
            PlayOutcome::Ignored(MoveRejection::GameOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_back_to_win_still_blocks() {
        let mut game = GameState::replay(&[TopLeft, Center, TopCenter, MiddleLeft, TopRight]);
        game.jump_to(5).unwrap();
        assert!(!game.play_move(BottomLeft).is_placed());
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = GameState::replay(&[Center]);
        assert_eq!(
            game.jump_to(2),
            Err(NavigationError::OutOfRange { requested: 2, len: 2 })
        );
        assert_eq!(game.current(), 1);
    }

    #[test]
    fn test_turn_follows_viewed_position() {
        let mut game = GameState::replay(&[Center, TopLeft, BottomRight]);
        game.jump_to(1).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress(Player::O));
        assert_eq!(
            game.play_move(TopRight),
            PlayOutcome::Placed(Move::new(Player::O, TopRight))
        );
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let game = GameState::replay(&[
            TopLeft,
            TopCenter,
            TopRight,
            Center,
            MiddleLeft,
            MiddleRight,
            BottomCenter,
            BottomRight,
            BottomLeft,
        ]);
        assert!(rules::is_full(game.board()));
        assert_eq!(game.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_serialized_game_reloads() {
        let mut game = GameState::replay(&[TopLeft, Center, TopRight]);
        game.jump_to(1).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let loaded: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, game);
    }

    #[test]
    fn test_empty_history_rejected_on_load() {
        let err = serde_json::from_str::<GameState>(r#"{"snapshots":[],"current":3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("History starts at the empty board"));
    }

    #[test]
    fn test_dangling_index_rejected_on_load() {
        let mut game = GameState::replay(&[Center]);
        game.current = 5;
        let json = serde_json::to_string(&game).unwrap();
        assert!(serde_json::from_str::<GameState>(&json).is_err());
    }

    #[test]
    fn test_skipped_turn_rejected_on_load() {
        let mut game = GameState::replay(&[Center, TopLeft]);
        game.snapshots[2].played = Some(Move::new(Player::X, TopLeft));
        game.snapshots[2].board = game.snapshots[1].board.with_mark(TopLeft, Player::X);
        let json = serde_json::to_string(&game).unwrap();
        let err = serde_json::from_str::<GameState>(&json).unwrap_err();
        assert!(err.to_string().contains("Players alternate turns"));
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let game = GameState::replay(&[TopLeft, Center, TopCenter, MiddleLeft, TopRight]);
        assert!(game.valid_moves().is_empty());
        let fresh = GameState::new();
        assert_eq!(fresh.valid_moves().len(), 9);
    }
}
