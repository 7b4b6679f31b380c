//! Observable game state handed to the presentation layer.

use super::{Board, GameStatus, Player, WinningLine};
use serde::{Deserialize, Serialize};

/// Full observable state after an operation.
///
/// A snapshot is an owned copy; holding one never blocks or aliases the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    active_player: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
}

impl Snapshot {
    pub(crate) fn new(board: Board, active_player: Player, status: GameStatus) -> Self {
        Self {
            board,
            active_player,
            winning_line: status.winning_line(),
            status,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose token goes next. After a win this is the winner.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// The game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The line to highlight, present only when won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// The winner, present only when won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// One-line status text for display.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!(
                "{}'s turn {}",
                self.active_player.label(),
                self.active_player.emoji()
            ),
            GameStatus::Won { winner, .. } => format!("{} wins!", winner),
            GameStatus::Drawn => "It's a Draw!".to_string(),
        }
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        write!(f, "{}", self.status_message())
    }
}
