//! Move records for tic-tac-toe.
//!
//! A move is a plain value: who played, where, and on which turn. The
//! server assigns the authoritative turn numbers; moves built locally carry
//! a provisional turn until the server's history replaces them.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    player: Player,
    /// The cell the player marked.
    cell: Position,
    /// Turn number of the move.
    turn: u32,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, cell: Position, turn: u32) -> Self {
        Self { player, cell, turn }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> Position {
        self.cell
    }

    /// Returns the turn number of this move.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns true if this move occupies the given cell.
    pub fn occupies(&self, cell: Position) -> bool {
        self.cell == cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "turn {}: {:?} -> {} ({})",
            self.turn,
            self.player,
            self.cell.label(),
            self.cell.cell()
        )
    }
}
