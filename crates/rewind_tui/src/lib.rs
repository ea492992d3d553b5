//! Terminal renderer for rewind tic-tac-toe.
//!
//! The game rules and history live in [`rewind_tictactoe`]; this crate only
//! draws them and turns key presses into `play_move` and `jump_to` calls.
//! The move-list order is a display preference held here, never in the game.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod order;
mod report;
mod runner;
mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command, ParsePositionError, parse_position};
pub use config::{ConfigError, TuiConfig};
pub use input::{digit_position, move_cursor};
pub use order::MoveOrder;
pub use report::{Report, ReportEntry};
pub use runner::{run_app, run_tui};
pub use ui::draw;
