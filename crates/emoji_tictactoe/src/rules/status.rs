//! Status evaluation: the single source of truth for game status.

use super::super::{Board, GameStatus};
use super::{is_full, winning_line};
use tracing::instrument;

/// Computes the status of a board from scratch.
///
/// A completed line is checked before fullness, so a board filled by a
/// winning move reports [`GameStatus::Won`].
#[instrument(skip(board))]
pub fn compute_status(board: &Board) -> GameStatus {
    if let Some((winner, line)) = winning_line(board) {
        GameStatus::Won { winner, line }
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}
