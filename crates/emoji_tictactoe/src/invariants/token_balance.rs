//! Token balance invariant: players alternate, so counts never drift.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: token counts of the two players differ by at most one.
pub struct TokenBalanceInvariant;

impl Invariant<Game> for TokenBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        board.count(Player::Cat).abs_diff(board.count(Player::Dog)) <= 1
    }

    fn description() -> &'static str {
        "Token counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_game_holds() {
        assert!(TokenBalanceInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = Game::default();
        for index in [0, 4, 8, 2, 6] {
            game.submit_move(index).unwrap();
            assert!(TokenBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::default();
        game.board.set(Position::TopLeft, Square::Occupied(Player::Dog));
        game.board.set(Position::Center, Square::Occupied(Player::Dog));
        assert!(!TokenBalanceInvariant::holds(&game));
    }
}
