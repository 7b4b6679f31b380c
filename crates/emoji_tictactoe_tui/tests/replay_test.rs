//! Tests for the replay command.

use emoji_tictactoe::{GameStatus, Player};
use emoji_tictactoe_tui::replay::{render, replay};
use emoji_tictactoe_tui::{App, FirstPlayer, GameConfig};

fn cat_first() -> GameConfig {
    GameConfig::default().with_overrides(Some(FirstPlayer::Cat), None)
}

#[test]
fn test_replay_top_row_win() {
    let snapshot = replay(&cat_first(), &[0, 4, 1, 5, 2]).unwrap();
    assert_eq!(snapshot.winner(), Some(Player::Cat));
    assert_eq!(snapshot.winning_line().unwrap().indices(), [0, 1, 2]);
}

#[test]
fn test_replay_skips_ignored_moves() {
    let snapshot = replay(&cat_first(), &[4, 4, 0]).unwrap();
    assert_eq!(snapshot.board().count(Player::Cat), 1);
    assert_eq!(snapshot.board().count(Player::Dog), 1);
    assert_eq!(snapshot.status(), GameStatus::InProgress);
}

#[test]
fn test_replay_rejects_out_of_range() {
    let err = replay(&cat_first(), &[0, 9]).unwrap_err();
    assert!(err.to_string().contains("Invalid move #2"));
}

#[test]
fn test_seeded_random_replay_is_deterministic() {
    let config = GameConfig::default().with_overrides(Some(FirstPlayer::Random), Some(77));
    let a = replay(&config, &[4]).unwrap();
    let b = replay(&config, &[4]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_replay_opens_like_interactive_play() {
    for seed in 0..20 {
        let config = GameConfig::default().with_overrides(Some(FirstPlayer::Random), Some(seed));
        let interactive = App::new(&config).snapshot().active_player();
        let replayed = replay(&config, &[]).unwrap().active_player();
        assert_eq!(interactive, replayed, "seed {seed}");
        assert_eq!(replayed, Player::Cat);
    }
}

#[test]
fn test_replay_matches_interactive_session() {
    let config = GameConfig::default().with_overrides(Some(FirstPlayer::Random), Some(3));
    let mut app = App::new(&config);
    for key in "15263".chars() {
        app.handle_key(crossterm::event::KeyCode::Char(key));
    }
    let replayed = replay(&config, &[0, 4, 1, 5, 2]).unwrap();
    assert_eq!(app.snapshot(), &replayed);
}

#[test]
fn test_render_text_and_json() {
    let snapshot = replay(&cat_first(), &[0, 4, 1, 5, 2]).unwrap();

    let text = render(&snapshot, false).unwrap();
    assert!(text.ends_with("Cat 😺 wins!"));

    let json: serde_json::Value = serde_json::from_str(&render(&snapshot, true).unwrap()).unwrap();
    assert_eq!(json["active_player"], "cat");
    assert!(json["status"]["Won"].is_object());
}
