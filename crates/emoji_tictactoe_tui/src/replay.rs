//! Non-interactive replay of a move sequence.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use emoji_tictactoe::{MoveError, Position, Snapshot};
use tracing::{info, instrument, warn};

/// Applies moves in order and returns the final snapshot.
///
/// The game starts exactly like a fresh interactive session, so moves
/// recorded from `play` replay to the same result. Ignored moves are
/// logged and skipped.
///
/// # Errors
///
/// Fails on the first index outside 0-8.
#[instrument(skip(config))]
pub fn replay(config: &GameConfig, moves: &[usize]) -> Result<Snapshot> {
    let mut game = config.new_game();

    for (ply, &index) in moves.iter().enumerate() {
        let pos = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds { index })
            .with_context(|| format!("Invalid move #{}", ply + 1))?;
        let outcome = game.place(pos);
        if !outcome.is_placed() {
            warn!(ply = ply + 1, index, ?outcome, "Move ignored");
        }
    }

    let snapshot = game.snapshot();
    info!(status = ?snapshot.status(), "Replay finished");
    Ok(snapshot)
}

/// Renders a snapshot as text or pretty JSON.
pub fn render(snapshot: &Snapshot, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")
    } else {
        Ok(snapshot.to_string())
    }
}
