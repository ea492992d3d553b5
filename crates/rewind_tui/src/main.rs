//! Rewind - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::GameState;
use rewind_tui::{Cli, Command, MoveOrder, Report, TuiConfig, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { moves } => {
            init_file_tracing(&config)?;
            run_tui(&config, GameState::replay(&moves))
        }
        Command::Show {
            moves,
            at,
            descending,
            json,
        } => {
            init_stderr_tracing(&config);
            let config = if descending {
                config.with_move_order(MoveOrder::Descending)
            } else {
                config
            };
            show(&moves, at, *config.move_order(), json)
        }
    }
}

/// Logs to a file so tracing output does not corrupt the terminal UI.
fn init_file_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints the position reached by replaying `moves`.
#[instrument(skip(moves), fields(count = moves.len()))]
fn show(
    moves: &[rewind_tictactoe::Position],
    at: Option<usize>,
    order: MoveOrder,
    json: bool,
) -> Result<()> {
    let mut game = GameState::replay(moves);
    if let Some(index) = at {
        game.jump_to(index)?;
    }
    info!(current = game.current(), len = game.len(), "Rendering report");

    let report = Report::new(&game, order);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
