//! Terminal session: setup, event loop, teardown.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use rewind_tictactoe::GameState;
use std::io;
use tracing::{error, info, instrument};

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;

/// Runs the interactive UI until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip_all, fields(len = game.len()))]
pub fn run_tui(config: &TuiConfig, game: GameState) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game, *config.move_order());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(len = app.game().len(), "Rewind TUI finished");
    res
}

/// Draws and handles key presses until the app asks to quit.
///
/// Each key press is handled to completion before the next one is read.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if *app.should_quit() {
            return Ok(());
        }
    }
}
