//! HTTP client for the game server's REST API.

use super::GameApi;
use crate::error::TransportError;
use crate::protocol::{CreateGameRequest, ServerResponse, SubmitMoveRequest};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// Game server client over HTTP.
#[derive(Debug, Clone)]
pub struct RestGameApi {
    base_url: String,
    client: reqwest::Client,
}

impl RestGameApi {
    /// Creates a client for the server at `base_url`.
    ///
    /// A trailing `/` on the base URL is ignored.
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        info!(base_url = %base_url, "Creating game API client");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts a JSON body and decodes the server's game state.
    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ServerResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url, "Failed to send request");
                TransportError::from(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            TransportError::from(e)
        })?;
        debug!(status = %status, body = %text, "Got server response");

        if !status.is_success() {
            error!(status = %status, body = %text, "Server returned error status");
            return Err(TransportError::with_status(
                status.as_u16(),
                format!("Bad response from API: {} - {}", status, text),
            ));
        }

        let game: ServerResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, body = %text, "Failed to decode response body");
            TransportError::from(e)
        })?;
        Ok(game)
    }
}

#[async_trait::async_trait]
impl GameApi for RestGameApi {
    #[instrument(skip(self, request), fields(player_id = %request.player_id, move_position = ?request.move_position))]
    async fn create_game(
        &self,
        request: &CreateGameRequest,
    ) -> Result<ServerResponse, TransportError> {
        info!("Creating game");
        let url = format!("{}/game", self.base_url);
        self.post(&url, request).await
    }

    #[instrument(skip(self, request), fields(move_position = request.move_position))]
    async fn submit_move(
        &self,
        game_id: &str,
        request: &SubmitMoveRequest,
    ) -> Result<ServerResponse, TransportError> {
        info!("Submitting move");
        let url = format!("{}/game/{}", self.base_url, game_id);
        self.post(&url, request).await
    }
}
