//! Rewind tic-tac-toe - game rules and a time-travelling move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a single [`Board`]
//! - **History**: [`GameState`] records every position reached, lets callers
//!   view any of them, and discards the abandoned future when a new move is
//!   played from an earlier position
//! - **Invariants**: properties of the history checked after every move in
//!   debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, GameStatus, Player, Position};
//!
//! let mut game = GameState::new();
//! let _ = game.play_move(Position::Center);
//! let _ = game.play_move(Position::TopLeft);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//!
//! game.jump_to(1).unwrap();
//! let _ = game.play_move(Position::BottomRight);
//! assert_eq!(game.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
mod moves;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveRejection, NavigationError, PlayOutcome};
pub use history::{GameState, Snapshot};
pub use moves::MoveDescriptor;
pub use position::Position;
pub use rules::{Line, WinResult};
pub use types::{Board, GameStatus, Player, Square};
