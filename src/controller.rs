//! Reconciliation of local moves with the game server.
//!
//! The controller owns one [`GameSession`] and the transport. A local move
//! is applied optimistically, sent to the server, and then replaced by the
//! server's authoritative history. Each round-trip runs to completion
//! before the next one can start: the async methods take `&mut self`, and
//! the session's turn gate rejects moves while one is outstanding.
//!
//! Dropping a round-trip in flight (the controller, or just the
//! `request_move` future) discards the server's answer. The turn gate is
//! still reopened, and an opening move that never created a game is taken
//! back off the board.

use crate::board::BoardView;
use crate::error::ClientError;
use crate::games::tictactoe::{Move, Position};
use crate::protocol::{CreateGameRequest, SubmitMoveRequest, parse};
use crate::session::GameSession;
use crate::transport::GameApi;
use tracing::{debug, info, instrument, warn};

/// Drives a [`GameSession`] against a [`GameApi`].
#[derive(Debug)]
pub struct SessionController<A> {
    api: A,
    player_id: String,
    session: GameSession,
}

impl<A: GameApi> SessionController<A> {
    /// Creates a controller with an empty, not yet started session.
    #[instrument(skip(api))]
    pub fn new(api: A, player_id: String) -> Self {
        info!("Creating session controller");
        Self {
            api,
            player_id,
            session: GameSession::new(),
        }
    }

    /// Returns the current session state.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns a read-only board over the current moves.
    pub fn board(&self) -> BoardView<'_> {
        BoardView::new(self.session.moves())
    }

    /// Returns the local player's identifier.
    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    /// Board click intent with a raw 1-9 cell number.
    ///
    /// Numbers outside the board are ignored like any other invalid click.
    #[instrument(skip(self))]
    pub async fn on_cell_selected(&mut self, cell: u32) -> Result<(), ClientError> {
        match Position::from_cell(cell) {
            Some(position) => self.request_move(position).await,
            None => {
                debug!("Ignoring selection outside the board");
                Ok(())
            }
        }
    }

    /// Plays the local user's move on `cell`.
    ///
    /// Invalid moves (game complete, round-trip outstanding, cell taken)
    /// are ignored and return `Ok`. A valid move is shown immediately, then
    /// sent to the server: as the opening move of a new game if none exists
    /// yet, otherwise as an update. Only a failed game creation is
    /// reported, and it takes the optimistic move back off the board;
    /// update failures are logged and the optimistic move stays.
    /// The turn gate is always reopened, even if the returned future is
    /// dropped before it completes.
    #[instrument(skip(self), fields(game_id = ?self.session.id()))]
    pub async fn request_move(&mut self, cell: Position) -> Result<(), ClientError> {
        let Some(optimistic) = self.session.begin_move(cell) else {
            return Ok(());
        };

        RoundTrip {
            controller: self,
            optimistic,
        }
        .run()
        .await
    }

    /// Creates a game on the server and adopts its state.
    ///
    /// `first_move` is sent along when the player moved before any game
    /// existed. Transport and parse failures are returned and leave the
    /// session unchanged.
    #[instrument(skip(self), fields(player_id = %self.player_id))]
    pub async fn start(&mut self, first_move: Option<Move>) -> Result<(), ClientError> {
        info!("Starting game");
        let request = CreateGameRequest::new(
            self.player_id.clone(),
            first_move.map(|m| u32::from(m.cell())),
            first_move.map(|m| m.turn()),
        );

        let raw = self.api.create_game(&request).await?;
        let snapshot = parse(&raw)?;
        info!(game_id = %snapshot.id(), "Game started");
        self.session.commit(snapshot);
        Ok(())
    }

    /// Sends a move for an existing game and adopts the server's answer.
    ///
    /// Best-effort: failures are logged and otherwise ignored, so the
    /// optimistic move stays on the board and the status is unchanged.
    #[instrument(skip(self), fields(cell = %optimistic.cell(), turn = optimistic.turn()))]
    pub async fn update(&mut self, optimistic: Move, game_id: &str) {
        if let Err(e) = self.try_update(optimistic, game_id).await {
            warn!(error = %e, "Move update failed; keeping local move");
        }
    }

    async fn try_update(&mut self, optimistic: Move, game_id: &str) -> Result<(), ClientError> {
        let request = SubmitMoveRequest::new(u32::from(optimistic.cell()), self.player_id.clone());
        let raw = self.api.submit_move(game_id, &request).await?;
        let snapshot = parse(&raw)?;
        self.session.commit(snapshot);
        Ok(())
    }

    /// Abandons the current game and requests a fresh one.
    ///
    /// The session is replaced before the request is made, so a failed
    /// start leaves an empty in-progress board without an id; the next
    /// move then creates the game.
    #[instrument(skip(self), fields(game_id = ?self.session.id()))]
    pub async fn reset(&mut self) -> Result<(), ClientError> {
        info!("Resetting game");
        self.session = GameSession::restarted();
        self.start(None).await
    }
}

/// One outstanding start-or-update for an optimistic move.
///
/// Dropping it, on completion or cancellation, settles the session.
struct RoundTrip<'a, A> {
    controller: &'a mut SessionController<A>,
    optimistic: Move,
}

impl<A: GameApi> RoundTrip<'_, A> {
    async fn run(mut self) -> Result<(), ClientError> {
        match self.controller.session.id().map(str::to_owned) {
            None => self.controller.start(Some(self.optimistic)).await,
            Some(game_id) => {
                self.controller.update(self.optimistic, &game_id).await;
                Ok(())
            }
        }
    }
}

impl<A> Drop for RoundTrip<'_, A> {
    fn drop(&mut self) {
        let session = &mut self.controller.session;
        if session.id().is_none() {
            // No game exists to reconcile the move against.
            session.retract(self.optimistic);
        }
        session.end_round_trip();
    }
}
