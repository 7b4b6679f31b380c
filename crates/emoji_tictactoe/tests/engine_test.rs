//! Tests for the game-state engine.

use emoji_tictactoe::{
    Board, Game, GameStatus, MoveError, Player, Position, Snapshot, Square, StartPolicy,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn cat_first() -> Game {
    Game::new(StartPolicy::Fixed(Player::Cat))
}

fn play(game: &mut Game, moves: &[usize]) -> Snapshot {
    let mut snapshot = game.snapshot();
    for &index in moves {
        snapshot = game.submit_move(index).expect("index in range");
    }
    snapshot
}

#[test]
fn test_top_row_scenario() {
    let mut game = cat_first();
    let snapshot = play(&mut game, &[0, 4, 1, 5, 2]);

    let cat = Square::Occupied(Player::Cat);
    assert_eq!(&snapshot.board().squares()[0..3], &[cat, cat, cat]);
    assert_eq!(snapshot.winner(), Some(Player::Cat));
    assert_eq!(snapshot.winning_line().unwrap().indices(), [0, 1, 2]);
    assert!(snapshot.is_terminal());
}

#[test]
fn test_turn_toggles_after_accepted_move() {
    let mut game = cat_first();
    let snapshot = game.submit_move(4).unwrap();
    assert_eq!(snapshot.active_player(), Player::Dog);
    assert_eq!(snapshot.status(), GameStatus::InProgress);
}

#[test]
fn test_winning_move_keeps_turn() {
    let mut game = cat_first();
    let before_win = play(&mut game, &[0, 4, 1, 5]);
    assert_eq!(before_win.active_player(), Player::Cat);

    let snapshot = game.submit_move(2).unwrap();
    assert_eq!(snapshot.active_player(), Player::Cat);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = cat_first();
    let first = game.submit_move(4).unwrap();
    let second = game.submit_move(4).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.board().count(Player::Dog), 0);
}

#[test]
fn test_terminal_game_locks_board() {
    let mut game = cat_first();
    let won = play(&mut game, &[0, 4, 1, 5, 2]);

    for index in 0..9 {
        assert_eq!(game.submit_move(index).unwrap(), won);
    }
}

#[test]
fn test_draw_scenario() {
    // X O X / O X O / O X O. O holds five tokens, so the dog (O) opens.
    let mut game = Game::new(StartPolicy::Fixed(Player::Dog));
    let snapshot = play(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7, 8]);

    use Player::{Cat as X, Dog as O};
    let expected = [X, O, X, O, X, O, O, X, O].map(Square::Occupied);
    assert_eq!(snapshot.board().squares(), &expected);
    assert_eq!(snapshot.status(), GameStatus::Drawn);
    assert_eq!(snapshot.winning_line(), None);
    assert_eq!(snapshot.status_message(), "It's a Draw!");
}

#[test]
fn test_drawn_game_locks_board() {
    let mut game = Game::new(StartPolicy::Fixed(Player::Dog));
    let drawn = play(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7, 8]);
    assert_eq!(drawn.status(), GameStatus::Drawn);

    for index in 0..9 {
        assert_eq!(game.submit_move(index).unwrap(), drawn);
    }
}

#[test]
fn test_last_move_filling_board_with_line_wins() {
    // The ninth ply (cat at 6) fills the board and completes 2-4-6.
    let mut game = cat_first();
    let snapshot = play(&mut game, &[1, 0, 2, 5, 3, 7, 4, 8, 6]);

    assert!(snapshot.board().is_full());
    assert_eq!(snapshot.winner(), Some(Player::Cat));
    assert_eq!(snapshot.winning_line().unwrap().indices(), [2, 4, 6]);
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let mut game = cat_first();
    let err = game.submit_move(42).unwrap_err();
    assert_eq!(err, MoveError::OutOfBounds { index: 42 });
    assert!(err.to_string().contains("out of bounds"));
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_token_balance_over_long_sequence() {
    let mut game = cat_first();
    // Includes repeats, which must be ignored.
    for index in [4, 4, 0, 8, 8, 2, 6, 1, 7, 3, 5] {
        let snapshot = game.submit_move(index).unwrap();
        let board = snapshot.board();
        assert!(board.count(Player::Cat).abs_diff(board.count(Player::Dog)) <= 1);
    }
}

#[test]
fn test_reset_clears_any_state() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut game = cat_first();
    play(&mut game, &[0, 4, 1, 5, 2]);

    let snapshot = game.reset(&mut rng);
    assert_eq!(snapshot.board(), &Board::new());
    assert_eq!(snapshot.status(), GameStatus::InProgress);
    assert_eq!(snapshot.winning_line(), None);

    // The board accepts moves again.
    let first = snapshot.active_player();
    let snapshot = game.submit_move(0).unwrap();
    assert_eq!(snapshot.board().get(Position::TopLeft), Square::Occupied(first));
}

#[test]
fn test_seeded_reset_is_deterministic() {
    let mut a = Game::default();
    let mut b = Game::default();
    let mut rng_a = StdRng::seed_from_u64(2024);
    let mut rng_b = StdRng::seed_from_u64(2024);

    for _ in 0..32 {
        assert_eq!(
            a.reset(&mut rng_a).active_player(),
            b.reset(&mut rng_b).active_player()
        );
    }
}

#[test]
fn test_random_policy_reaches_both_players() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = Game::default();
    let firsts: Vec<Player> = (0..64)
        .map(|_| game.reset(&mut rng).active_player())
        .collect();
    assert!(firsts.contains(&Player::Cat));
    assert!(firsts.contains(&Player::Dog));
}

#[test]
fn test_with_rng_randomizes_first_round() {
    let mut rng = StdRng::seed_from_u64(99);
    let expected = StartPolicy::Random.choose(&mut StdRng::seed_from_u64(99));
    let game = Game::with_rng(StartPolicy::Random, &mut rng);
    assert_eq!(game.active_player(), expected);
}

#[test]
fn test_games_are_independent() {
    let mut a = cat_first();
    let b = cat_first();
    a.submit_move(4).unwrap();
    assert_eq!(b.board(), &Board::new());
}
