//! Client-side state of a single game.
//!
//! The session holds what the board renders from: the server's game id,
//! the move history (authoritative plus at most one optimistic move), the
//! status the server last reported, and the turn gate that keeps a second
//! move from starting while a round-trip is outstanding.

use crate::games::tictactoe::{GameStatus, Move, Player, Position};
use crate::protocol::GameSnapshot;
use tracing::{debug, info, instrument};

/// One game as the client sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    /// Server game id; `None` until the server acknowledges a start.
    id: Option<String>,
    /// Move history in server order.
    moves: Vec<Move>,
    /// Players the server reported.
    players: Vec<Player>,
    /// Last status confirmed by the server.
    status: GameStatus,
    /// Winner identifier, set only when the server reports one.
    winner: Option<String>,
    /// Turn gate: false while a local move is awaiting the server.
    local_turn_active: bool,
}

impl GameSession {
    /// Creates an empty session that has not contacted the server.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating new game session");
        Self {
            id: None,
            moves: Vec::new(),
            players: Vec::new(),
            status: GameStatus::NotStarted,
            winner: None,
            local_turn_active: true,
        }
    }

    /// Creates the session that replaces a reset game.
    ///
    /// A reset immediately requests a fresh game, so the status starts as
    /// in progress even though there is no id yet.
    #[instrument]
    pub fn restarted() -> Self {
        Self {
            status: GameStatus::InProgress,
            ..Self::new()
        }
    }

    /// Returns the server game id, if a game exists.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the move history.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the players the server reported.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the last confirmed status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner identifier, if the server declared one.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Returns true when the local player may submit a move.
    pub fn is_local_turn_active(&self) -> bool {
        self.local_turn_active
    }

    /// Returns true once the server has declared the game over.
    pub fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the player occupying `cell`, if any.
    pub fn occupant_of(&self, cell: Position) -> Option<Player> {
        self.moves
            .iter()
            .find(|m| m.occupies(cell))
            .map(|m| m.player())
    }

    /// Returns true if some move already claims `cell`.
    pub fn is_occupied(&self, cell: Position) -> bool {
        self.moves.iter().any(|m| m.occupies(cell))
    }

    /// Turn number for the next local move.
    ///
    /// The server numbers turns from 1.
    pub fn next_turn(&self) -> u32 {
        self.moves.len() as u32 + 1
    }

    /// Accepts a local move if the game allows it.
    ///
    /// Returns `None` without touching state when the game is complete,
    /// the turn gate is closed, or the cell is taken. Otherwise closes the
    /// gate, appends the optimistic move and returns it.
    #[instrument(skip(self), fields(game_id = ?self.id, status = %self.status))]
    pub fn begin_move(&mut self, cell: Position) -> Option<Move> {
        if self.is_complete() {
            debug!("Ignoring move: game is complete");
            return None;
        }
        if !self.local_turn_active {
            debug!("Ignoring move: waiting on server");
            return None;
        }
        if self.is_occupied(cell) {
            debug!("Ignoring move: cell is occupied");
            return None;
        }

        self.local_turn_active = false;
        let optimistic = Move::new(Player::User, cell, self.next_turn());
        self.moves.push(optimistic);
        debug!(turn = optimistic.turn(), "Applied optimistic move");
        Some(optimistic)
    }

    /// Replaces local state with the server's view of the game.
    ///
    /// Any optimistic move is dropped in favor of the authoritative history.
    #[instrument(skip(self, snapshot), fields(game_id = %snapshot.id()))]
    pub fn commit(&mut self, snapshot: GameSnapshot) {
        let (id, moves, players, status, winner) = snapshot.dissolve();
        info!(
            moves = moves.len(),
            status = %status,
            winner = ?winner,
            "Committing server state"
        );
        self.id = Some(id);
        self.moves = moves;
        self.players = players;
        self.status = status;
        self.winner = winner;
    }

    /// Removes an optimistic move that no game will ever confirm.
    ///
    /// Only the most recent move can be retracted.
    #[instrument(skip(self))]
    pub fn retract(&mut self, optimistic: Move) {
        if self.moves.last() == Some(&optimistic) {
            self.moves.pop();
            debug!("Retracted optimistic move");
        }
    }

    /// Reopens the turn gate once a round-trip has resolved.
    pub fn end_round_trip(&mut self) {
        self.local_turn_active = true;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
