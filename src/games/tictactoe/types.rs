//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Reserved role name the server uses for its own player.
pub const COMPUTER_ROLE: &str = "Computer";

/// Player in the game, as seen by the client.
///
/// The server may identify human players with arbitrary ids; the client
/// only distinguishes the local user from the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The server-side computer opponent (renders as `o`).
    Computer,
    /// The local human player (renders as `x`).
    User,
}

impl Player {
    /// Returns the mark drawn on the board for this player.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::Computer => "o",
            Player::User => "x",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Lifecycle of a game as reported by the server.
///
/// Wire names match the variant names exactly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
pub enum GameStatus {
    /// No game has been created yet.
    #[default]
    NotStarted,
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win or a draw.
    Complete,
}

impl GameStatus {
    /// Returns true once the server has declared the game over.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Complete)
    }
}
