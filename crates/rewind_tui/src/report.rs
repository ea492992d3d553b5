//! Headless rendering of a game position as text or JSON.

use rewind_tictactoe::{Board, GameState, MoveDescriptor};
use serde::Serialize;
use tracing::instrument;

use crate::order::MoveOrder;

/// A move-list entry together with its display text.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    descriptor: MoveDescriptor,
    label: String,
}

/// Everything the renderer shows for one position.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    board: Board,
    current: usize,
    status: String,
    winning_keys: Option<Vec<usize>>,
    moves: Vec<ReportEntry>,
}

impl Report {
    /// Builds the report for the viewed position of `game`.
    #[instrument(skip(game), fields(current = game.current()))]
    pub fn new(game: &GameState, order: MoveOrder) -> Self {
        let moves = order
            .arrange(&game.list_moves())
            .into_iter()
            .map(|descriptor| ReportEntry {
                label: descriptor.label(),
                descriptor,
            })
            .collect();

        Self {
            board: *game.board(),
            current: game.current(),
            status: game.status().to_string(),
            winning_keys: game
                .highlighted_line()
                .map(|line| line.iter().map(|p| p.key()).collect()),
            moves,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Plain text: board, status, optional winning line, then the move list.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.board, self.status);
        if let Some(line) = &self.winning_keys {
            let cells: Vec<String> = line.iter().map(|i| i.to_string()).collect();
            out.push_str(&format!("Winning line: {}\n", cells.join(", ")));
        }
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.descriptor.index == self.current { '*' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, entry.label));
        }
        out
    }
}
