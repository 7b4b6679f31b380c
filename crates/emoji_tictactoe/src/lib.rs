//! Emoji tic-tac-toe game-state engine.
//!
//! Two players, 😺 and 🐶, take turns placing tokens on a 3x3 board.
//! The engine owns the board, the active player and the derived status,
//! and exposes two operations: submit a move and reset. Status is always
//! recomputed from the full board by [`rules::compute_status`].
//!
//! # Example
//!
//! ```
//! use emoji_tictactoe::{Game, GameStatus, Player, StartPolicy};
//!
//! let mut game = Game::new(StartPolicy::Fixed(Player::Cat));
//! for index in [0, 4, 1, 5] {
//!     game.submit_move(index).unwrap();
//! }
//! let snapshot = game.submit_move(2).unwrap();
//! assert_eq!(snapshot.winner(), Some(Player::Cat));
//! assert_eq!(snapshot.winning_line().unwrap().indices(), [0, 1, 2]);
//! assert!(matches!(snapshot.status(), GameStatus::Won { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod types;

pub use action::{IgnoreReason, MoveError, MoveOutcome};
pub use engine::{Game, StartPolicy};
pub use position::Position;
pub use snapshot::Snapshot;
pub use status::{GameStatus, WinningLine};
pub use types::{Board, Player, Square};
