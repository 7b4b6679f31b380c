//! Application state and logic.

use crate::config::GameConfig;
use crate::input::{Action, action_for, move_cursor};
use crossterm::event::KeyCode;
use emoji_tictactoe::{Game, IgnoreReason, MoveOutcome, Position, Snapshot};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    game: Game,
    snapshot: Snapshot,
    cursor: Position,
    rng: StdRng,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let game = config.new_game();
        Self {
            snapshot: game.snapshot(),
            game,
            cursor: Position::Center,
            rng,
            notice: None,
            should_quit: false,
        }
    }

    /// The state to draw.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Feedback about the last rejected key, cleared by the next action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key) else {
            return;
        };
        debug!(?action, "Handling action");
        self.notice = None;

        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Reset => self.snapshot = self.game.reset(&mut self.rng),
            Action::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, pos: Position) {
        match self.game.place(pos) {
            MoveOutcome::Placed { .. } => self.snapshot = self.game.snapshot(),
            MoveOutcome::Ignored(IgnoreReason::Occupied(_)) => {
                self.notice = Some(format!("{} is taken", pos.label()));
            }
            MoveOutcome::Ignored(IgnoreReason::GameOver) => {
                self.notice = Some("Press R to play again".to_string());
            }
        }
    }
}
