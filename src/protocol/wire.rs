//! JSON shapes exchanged with the game server.
//!
//! These mirror the server's payloads as loosely as it sends them; every
//! field of [`ServerResponse`] may be missing or have the wrong shape.
//! Validation happens in [`parse`](super::parse), never here.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Body of `POST {base}/game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct CreateGameRequest {
    /// Identifier of the local player.
    pub player_id: String,
    /// Cell of the opening move, if the player moved before the game existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_position: Option<u32>,
    /// Turn number of the opening move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<u32>,
}

/// Body of `POST {base}/game/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SubmitMoveRequest {
    /// Cell being played (1-9).
    pub move_position: u32,
    /// Identifier of the local player.
    pub player_id: String,
}

/// How the server encodes a player.
///
/// The server sends either a bare role name (`"Computer"`) or an object
/// wrapping a custom player id (`{"Player": "alice"}`). Anything else is
/// kept verbatim so the parser can reject it with a precise error instead
/// of failing the whole body decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerEncoding {
    /// Bare role name.
    Role(String),
    /// Object wrapping a custom identifier.
    Custom {
        /// The wrapped identifier.
        #[serde(rename = "Player")]
        player: String,
    },
    /// Any other JSON value.
    Unrecognized(serde_json::Value),
}

impl PlayerEncoding {
    /// Wraps a custom player id the way the server does.
    pub fn custom(player: impl Into<String>) -> Self {
        Self::Custom {
            player: player.into(),
        }
    }

    /// A bare role name.
    pub fn role(role: impl Into<String>) -> Self {
        Self::Role(role.into())
    }
}

impl std::fmt::Display for PlayerEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerEncoding::Role(role) => write!(f, "{:?}", role),
            PlayerEncoding::Custom { player } => write!(f, "{{\"Player\": {:?}}}", player),
            PlayerEncoding::Unrecognized(value) => write!(f, "{}", value),
        }
    }
}

/// One entry of the server's move history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct ServerMove {
    /// Cell played (expected 1-9).
    pub position: u32,
    /// Server-assigned turn number.
    pub turn: u32,
    /// Who played it.
    pub player: PlayerEncoding,
}

/// Game state as returned by both server endpoints.
///
/// Any JSON value decodes: each field is taken from the body object as
/// the raw value the server sent, with `null` treated as absent. Checking
/// field shapes is left to [`parse`](super::parse), so a reply with the
/// wrong shape is a parse failure rather than a transport one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct ServerResponse {
    /// Game identifier (expected: non-empty string).
    pub id: Option<serde_json::Value>,
    /// Full move history (expected: array of [`ServerMove`]).
    pub moves: Option<serde_json::Value>,
    /// Players registered in the game (expected: array of [`PlayerEncoding`]).
    pub players: Option<serde_json::Value>,
    /// `"NotStarted"`, `"InProgress"` or `"Complete"`.
    pub status: Option<serde_json::Value>,
    /// Winner, absent while undecided or on a draw.
    pub winner: Option<serde_json::Value>,
}

impl From<serde_json::Value> for ServerResponse {
    fn from(body: serde_json::Value) -> Self {
        let field = |name: &str| body.get(name).filter(|value| !value.is_null()).cloned();
        Self {
            id: field("id"),
            moves: field("moves"),
            players: field("players"),
            status: field("status"),
            winner: field("winner"),
        }
    }
}
