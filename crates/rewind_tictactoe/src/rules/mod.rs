//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! history, so the same rules apply to any snapshot being viewed.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, evaluate, Line, WinResult, LINES};
