//! Turn order invariant: the active player is consistent with the board.

use super::super::{Game, GameStatus, Player};
use super::Invariant;

/// Invariant: the active player agrees with the token counts.
///
/// - In progress with unequal counts, the player with fewer tokens moves.
/// - After a win, the turn was not handed over: the winner is active.
pub struct TurnOrderInvariant;

impl Invariant<Game> for TurnOrderInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let cats = board.count(Player::Cat);
        let dogs = board.count(Player::Dog);

        match game.status() {
            GameStatus::InProgress if cats > dogs => game.active_player() == Player::Dog,
            GameStatus::InProgress if dogs > cats => game.active_player() == Player::Cat,
            GameStatus::Won { winner, .. } => game.active_player() == winner,
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Active player agrees with the board"
    }
}
