//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! board storage so the engine and the invariants share one definition
//! of what a win or a draw is.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::compute_status;
pub use win::{WIN_LINES, check_winner, winning_line};
