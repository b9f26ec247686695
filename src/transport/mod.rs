//! Access to the game server.

mod rest_client;

pub use rest_client::RestGameApi;

use crate::error::TransportError;
use crate::protocol::{CreateGameRequest, ServerResponse, SubmitMoveRequest};

/// The two operations the game server offers.
///
/// Implementations only move bytes: they report non-success outcomes as
/// [`TransportError`] and hand back the raw response for the parser.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    /// Creates a game, optionally with the player's opening move.
    async fn create_game(
        &self,
        request: &CreateGameRequest,
    ) -> Result<ServerResponse, TransportError>;

    /// Submits a move to an existing game.
    async fn submit_move(
        &self,
        game_id: &str,
        request: &SubmitMoveRequest,
    ) -> Result<ServerResponse, TransportError>;
}

#[async_trait::async_trait]
impl<T: GameApi + ?Sized> GameApi for std::sync::Arc<T> {
    async fn create_game(
        &self,
        request: &CreateGameRequest,
    ) -> Result<ServerResponse, TransportError> {
        (**self).create_game(request).await
    }

    async fn submit_move(
        &self,
        game_id: &str,
        request: &SubmitMoveRequest,
    ) -> Result<ServerResponse, TransportError> {
        (**self).submit_move(game_id, request).await
    }
}
