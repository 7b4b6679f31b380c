//! Terminal front end for emoji tic-tac-toe.
//!
//! Reads engine snapshots to draw the board and forwards key presses as
//! move and reset requests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod ui;

pub use app::App;
pub use config::{ConfigError, FirstPlayer, GameConfig};
