//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use ttt_client::{
    CreateGameRequest, GameApi, PlayerEncoding, ServerMove, ServerResponse, SubmitMoveRequest,
    TransportError,
};

/// A request the client sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// `POST /game`
    Create(CreateGameRequest),
    /// `POST /game/{id}`
    Submit {
        game_id: String,
        request: SubmitMoveRequest,
    },
}

/// A scripted server behavior for one request.
#[derive(Debug)]
enum Reply {
    Answer(Result<ServerResponse, TransportError>),
    /// Never answers.
    Stall,
}

/// In-memory server that replays scripted answers in order.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next answer.
    pub fn respond(&self, response: Result<ServerResponse, TransportError>) {
        self.replies.lock().unwrap().push_back(Reply::Answer(response));
    }

    /// Queues a request that hangs forever.
    pub fn stall(&self) {
        self.replies.lock().unwrap().push_back(Reply::Stall);
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn next(&self, call: Call) -> Result<ServerResponse, TransportError> {
        self.calls.lock().unwrap().push(call);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Answer(response)) => response,
            Some(Reply::Stall) => std::future::pending().await,
            None => Err(TransportError::new("No scripted response")),
        }
    }
}

#[async_trait::async_trait]
impl GameApi for ScriptedApi {
    async fn create_game(
        &self,
        request: &CreateGameRequest,
    ) -> Result<ServerResponse, TransportError> {
        self.next(Call::Create(request.clone())).await
    }

    async fn submit_move(
        &self,
        game_id: &str,
        request: &SubmitMoveRequest,
    ) -> Result<ServerResponse, TransportError> {
        self.next(Call::Submit {
            game_id: game_id.to_string(),
            request: request.clone(),
        })
        .await
    }
}

/// Move by the user `alice`.
pub fn user_move(position: u32, turn: u32) -> ServerMove {
    ServerMove::new(position, turn, PlayerEncoding::custom("alice"))
}

/// Move by the computer.
pub fn computer_move(position: u32, turn: u32) -> ServerMove {
    ServerMove::new(position, turn, PlayerEncoding::role("Computer"))
}

/// Well-formed response for game `id`.
pub fn game_response(id: &str, moves: Vec<ServerMove>, status: &str) -> ServerResponse {
    ServerResponse {
        id: Some(json!(id)),
        moves: Some(json!(moves)),
        players: Some(json!([
            PlayerEncoding::custom("alice"),
            PlayerEncoding::role("Computer"),
        ])),
        status: Some(json!(status)),
        winner: None,
    }
}
