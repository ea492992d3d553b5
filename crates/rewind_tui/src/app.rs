//! Application state and key handling.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use rewind_tictactoe::{GameState, MoveDescriptor, PlayOutcome, Position};
use tracing::{debug, instrument};

use crate::input::{digit_position, move_cursor};
use crate::order::MoveOrder;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Owns the game plus everything that is purely about presentation: the
/// board cursor, the move-list selection, and the move-list order.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    order: MoveOrder,
    focus: Focus,
    /// History index of the highlighted move-list entry.
    selected: usize,
    /// Feedback about the last ignored action.
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application around `game`.
    #[instrument(skip(game), fields(len = game.len()))]
    pub fn new(game: GameState, order: MoveOrder) -> Self {
        let selected = game.current();
        Self {
            game,
            cursor: Position::Center,
            order,
            focus: Focus::default(),
            selected,
            message: None,
            should_quit: false,
        }
    }

    /// The move list in display order.
    pub fn displayed_moves(&self) -> Vec<MoveDescriptor> {
        self.order.arrange(&self.game.list_moves())
    }

    /// Row of the selected entry within [`App::displayed_moves`].
    pub fn selected_row(&self) -> usize {
        self.displayed_moves()
            .iter()
            .position(|m| m.index == self.selected)
            .unwrap_or(0)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('s') => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "Move order toggled");
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let moves = self.displayed_moves();
        let row = self.selected_row();
        match key {
            KeyCode::Up => {
                let row = row.saturating_sub(1);
                self.selected = moves[row].index;
            }
            KeyCode::Down => {
                let row = (row + 1).min(moves.len() - 1);
                self.selected = moves[row].index;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(moves[row]),
            _ => {}
        }
    }

    /// Plays the side to move at `pos`.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        match self.game.play_move(pos) {
            PlayOutcome::Placed(action) => {
                debug!(%action, "Move placed");
                self.selected = self.game.current();
                self.message = None;
            }
            PlayOutcome::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                self.message = Some(reason.to_string());
            }
        }
    }

    /// Jumps to the entry's history index; the latest entry is not a link.
    #[instrument(skip(self))]
    pub fn activate(&mut self, entry: MoveDescriptor) {
        if !entry.is_selectable() {
            debug!(index = entry.index, "Latest entry is not selectable");
            return;
        }
        // Entries come from the current history, so the index is recorded.
        if let Err(err) = self.game.jump_to(entry.index) {
            self.message = Some(err.to_string());
            return;
        }
        self.selected = entry.index;
        self.message = None;
    }
}
