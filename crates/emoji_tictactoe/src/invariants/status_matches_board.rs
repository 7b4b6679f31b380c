//! Status consistency invariant: status is a pure function of the board.

use super::super::{Game, rules::compute_status};
use super::Invariant;

/// Invariant: the stored status equals the status recomputed from the board.
pub struct StatusMatchesBoardInvariant;

impl Invariant<Game> for StatusMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        game.status() == compute_status(game.board())
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}
