//! Emoji Tic Tac Toe - terminal game and replay tool.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use emoji_tictactoe_tui::{
    App, GameConfig,
    cli::{Cli, Command, StartArgs},
    replay, ui,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        start: StartArgs::default(),
    });

    match command {
        Command::Play { start } => {
            let config = load_config(cli.config.as_deref(), &start)?;
            init_tracing(config.log_file().as_deref(), true)?;
            run_tui(&config)
        }
        Command::Replay { moves, start, json } => {
            let config = load_config(cli.config.as_deref(), &start)?;
            init_tracing(config.log_file().as_deref(), false)?;
            let snapshot = replay::replay(&config, &moves)?;
            println!("{}", replay::render(&snapshot, json)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, start: &StartArgs) -> Result<GameConfig> {
    let config = GameConfig::load(path).context("Failed to load config")?;
    Ok(config.with_overrides(start.first_player, start.seed))
}

/// Installs the tracing subscriber.
///
/// The interactive game owns the terminal, so it logs only to a file.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting Emoji Tic Tac Toe TUI");

    enable_raw_mode()?;
    let res = setup_terminal().and_then(|mut terminal| {
        let res = run_app(&mut terminal, App::new(config));
        terminal.show_cursor()?;
        res
    });

    // Restore even when setup failed halfway.
    restore_terminal()?;
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    info!("Quit requested");
    Ok(())
}
