//! Tests for history navigation and branch truncation.

use rewind_tictactoe::{
    Board, GameState, GameStatus, Move, MoveRejection, PlayOutcome, Player, Position, WinResult,
};
use Position::*;

#[test]
fn test_top_row_win_scenario() {
    let mut game = GameState::new();
    for pos in [TopLeft, Center, TopCenter, MiddleLeft, TopRight] {
        assert!(game.play_move(pos).is_placed());
    }

    assert_eq!(
        game.evaluation(),
        WinResult::Winner {
            player: Player::X,
            line: [TopLeft, TopCenter, TopRight],
        }
    );
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
    assert_eq!(game.highlighted_line(), Some([TopLeft, TopCenter, TopRight]));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let game = GameState::replay(&[
        TopLeft,
        TopCenter,
        TopRight,
        Center,
        MiddleLeft,
        MiddleRight,
        BottomCenter,
        BottomLeft,
        BottomRight,
    ]);

    assert_eq!(game.len(), 10);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw!");
    assert_eq!(game.highlighted_line(), None);
}

#[test]
fn test_draw_rejects_further_moves() {
    let mut game = GameState::replay(&[
        TopLeft,
        TopCenter,
        TopRight,
        Center,
        MiddleLeft,
        MiddleRight,
        BottomCenter,
        BottomLeft,
        BottomRight,
    ]);
    let before = game.clone();
    for pos in Position::ALL {
        assert_eq!(
            game.play_move(pos),
            PlayOutcome::Ignored(MoveRejection::SquareOccupied(pos))
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_occupied_square_never_changes_state() {
    let mut game = GameState::replay(&[Center, TopLeft, BottomRight]);
    game.jump_to(2).unwrap();
    let before = game.clone();

    let _ = game.play_move(Center);
    let _ = game.play_move(TopLeft);

    assert_eq!(game, before);
    assert_eq!(game.len(), 4);
    assert_eq!(game.current(), 2);
}

#[test]
fn test_play_after_jump_truncates_future() {
    let mut game = GameState::replay(&[TopLeft, Center, BottomRight, TopRight, BottomLeft]);
    assert_eq!(game.len(), 6);

    game.jump_to(2).unwrap();
    let outcome = game.play_move(MiddleLeft);

    assert_eq!(outcome, PlayOutcome::Placed(Move::new(Player::X, MiddleLeft)));
    assert_eq!(game.len(), 4);
    assert_eq!(game.current(), 3);
    assert_eq!(game.latest_move(), Some(Move::new(Player::X, MiddleLeft)));
    assert!(game.board().is_empty(BottomRight));
}

#[test]
fn test_successful_play_lands_on_new_tip() {
    let mut game = GameState::replay(&[TopLeft, Center, BottomRight, TopRight]);
    for target in [0, 1, 3] {
        let mut branch = game.clone();
        branch.jump_to(target).unwrap();
        let free = branch.valid_moves()[0];
        assert!(branch.play_move(free).is_placed());
        assert_eq!(branch.len(), target + 2);
        assert_eq!(branch.current(), branch.len() - 1);
    }
    // Original untouched by the branches above.
    assert!(game.play_move(BottomLeft).is_placed());
    assert_eq!(game.len(), 6);
}

#[test]
fn test_jump_to_start_keeps_history() {
    let mut game = GameState::replay(&[TopLeft, Center, BottomRight]);
    game.jump_to(0).unwrap();

    assert_eq!(game.current(), 0);
    assert_eq!(game.len(), 4);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.status(), GameStatus::InProgress(Player::X));

    game.jump_to(3).unwrap();
    assert_eq!(Position::empty_squares(game.board()).len(), 6);
}

#[test]
fn test_list_moves_is_chronological() {
    let mut game = GameState::replay(&[TopLeft, Center, MiddleRight]);
    game.jump_to(1).unwrap();

    let moves = game.list_moves();
    let labels: Vec<String> = moves.iter().map(|m| m.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 (0, 0)",
            "Go to move #2 (1, 1)",
            "You are at move #3",
        ]
    );
    assert!(moves[0].is_start);
    assert!(moves.iter().skip(1).all(|m| !m.is_start));
    assert_eq!(moves.iter().filter(|m| m.is_latest).count(), 1);
    assert_eq!((moves[3].row, moves[3].col), (1, 2));
}

#[test]
fn test_status_serializes_by_variant() {
    let json = serde_json::to_value(GameStatus::Won(Player::O)).unwrap();
    assert_eq!(json, serde_json::json!({ "Won": "O" }));
}
