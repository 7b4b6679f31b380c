//! The game-state engine.
//!
//! [`Game`] owns the board, the active player and the derived status.
//! Callers drive it with [`Game::submit_move`] and [`Game::reset`] and read
//! it through [`Game::snapshot`]. Every operation either applies fully or
//! leaves the state untouched.

use super::action::{IgnoreReason, MoveError, MoveOutcome};
use super::invariants::assert_invariants;
use super::rules::compute_status;
use super::{Board, GameStatus, Player, Position, Snapshot, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How the active player is chosen when a round starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartPolicy {
    /// Always the same player.
    Fixed(Player),
    /// A fair coin flip from the supplied random source.
    #[default]
    Random,
}

impl StartPolicy {
    /// Picks the starting player. `Fixed` never touches the generator.
    #[instrument(skip(rng))]
    pub fn choose<R: Rng + ?Sized>(self, rng: &mut R) -> Player {
        match self {
            StartPolicy::Fixed(player) => player,
            StartPolicy::Random => {
                if rng.gen_bool(0.5) {
                    Player::Cat
                } else {
                    Player::Dog
                }
            }
        }
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) active_player: Player,
    pub(crate) status: GameStatus,
    policy: StartPolicy,
}

impl Game {
    /// Creates a new game.
    ///
    /// A fixed policy names the first player; under [`StartPolicy::Random`]
    /// the very first round opens with the cat and only later rounds are
    /// randomized. Use [`Game::with_rng`] to randomize the first round too.
    #[instrument]
    pub fn new(policy: StartPolicy) -> Self {
        let active_player = match policy {
            StartPolicy::Fixed(player) => player,
            StartPolicy::Random => Player::Cat,
        };
        let game = Self {
            board: Board::new(),
            active_player,
            status: GameStatus::InProgress,
            policy,
        };
        assert_invariants(&game);
        game
    }

    /// Creates a new game whose first player is drawn from the policy.
    #[instrument(skip(rng))]
    pub fn with_rng<R: Rng + ?Sized>(policy: StartPolicy, rng: &mut R) -> Self {
        let mut game = Self::new(policy);
        game.reset(rng);
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose token goes next.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the start policy used by [`Game::reset`].
    pub fn policy(&self) -> StartPolicy {
        self.policy
    }

    /// Replaces the start policy. Takes effect at the next reset.
    #[instrument(skip(self))]
    pub fn set_policy(&mut self, policy: StartPolicy) {
        self.policy = policy;
    }

    /// Returns a copy of the full observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.clone(), self.active_player, self.status)
    }

    /// Submits a move at a cell index (0-8).
    ///
    /// Moves on occupied cells or finished games are ignored and the
    /// unchanged snapshot is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the index does not name a
    /// cell. The state is not touched.
    #[instrument(skip(self), fields(player = ?self.active_player))]
    pub fn submit_move(&mut self, index: usize) -> Result<Snapshot, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds { index })?;
        self.place(pos);
        Ok(self.snapshot())
    }

    /// Places the active player's token at a position.
    ///
    /// Status is recomputed from the whole board before the turn is
    /// considered, so a winning move keeps the turn with the winner.
    #[instrument(skip(self), fields(player = ?self.active_player))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "Ignoring move on finished game");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!("Ignoring move on occupied square");
            return MoveOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let player = self.active_player;
        self.board.set(pos, Square::Occupied(player));
        self.status = compute_status(&self.board);

        match self.status {
            GameStatus::InProgress => self.active_player = player.opponent(),
            GameStatus::Won { winner, line } => {
                info!(?winner, line = ?line.indices(), "Game won");
            }
            GameStatus::Drawn => info!("Game drawn"),
        }

        info!(%pos, next = ?self.active_player, "Move placed");
        assert_invariants(self);

        MoveOutcome::Placed {
            player,
            position: pos,
        }
    }

    /// Starts a new round: empty board, in progress, first player chosen
    /// by the start policy using the supplied random source.
    #[instrument(skip(self, rng), fields(policy = ?self.policy))]
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Snapshot {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        self.active_player = self.policy.choose(rng);

        info!(first = ?self.active_player, "Game reset");
        assert_invariants(self);

        self.snapshot()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(StartPolicy::default())
    }
}
