//! Move outcomes and errors.
//!
//! Occupied cells and finished games are normal game events: the move is
//! ignored and reported as a [`MoveOutcome`]. Only an index that does not
//! name a cell is a caller bug and surfaces as a [`MoveError`].

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The cell already holds a token.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game is won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Result of placing a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The token was written.
    Placed {
        /// Player whose token was written.
        player: Player,
        /// Cell that received the token.
        position: Position,
    },
    /// The move was rejected without changing state.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Whether the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Error that can occur when submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", index)]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },
}

impl std::error::Error for MoveError {}
