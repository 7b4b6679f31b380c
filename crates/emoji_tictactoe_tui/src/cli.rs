//! Command-line interface for emoji tic-tac-toe.

use crate::config::FirstPlayer;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Emoji Tic Tac Toe - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "emoji_tictactoe")]
#[command(about = "Two-player emoji tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command that starts a game.
#[derive(Args, Debug, Clone, Default)]
pub struct StartArgs {
    /// Who opens each round
    #[arg(long, value_enum)]
    pub first_player: Option<FirstPlayer>,

    /// Seed for the first-player coin flip
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Start options
        #[command(flatten)]
        start: StartArgs,
    },

    /// Apply a sequence of moves and print the final state
    Replay {
        /// Cell indices (0-8), comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Start options
        #[command(flatten)]
        start: StartArgs,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}
