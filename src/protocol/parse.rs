//! Validation of server responses into domain values.
//!
//! This is the only place that looks at the server's stringly-typed
//! fields. Everything downstream works with [`GameSnapshot`].

use super::wire::{PlayerEncoding, ServerMove, ServerResponse};
use crate::games::tictactoe::{COMPUTER_ROLE, GameStatus, Move, Player, Position};
use derive_getters::{Dissolve, Getters};
use derive_more::{Display, Error};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Reasons a server response is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// `id` is absent or empty.
    #[display("Server response has no game id")]
    MissingGameId,

    /// `moves` is absent.
    #[display("Server response has no move history")]
    MissingMoveHistory,

    /// A present field does not have the shape the server documents.
    #[display("Server response field `{}` is malformed: {}", field, reason)]
    MalformedField {
        /// Name of the offending field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// `status` is absent or empty.
    #[display("Server response has no status")]
    MissingStatus,

    /// `status` is not one of the known wire names.
    #[display("Unrecognized game status {:?}", status)]
    UnrecognizedStatus {
        /// The status string received.
        status: String,
    },

    /// A player is neither the computer role nor a wrapped identifier.
    #[display("Unrecognized player encoding: {}", encoding)]
    UnrecognizedPlayerEncoding {
        /// The offending encoding, rendered as JSON.
        encoding: String,
    },

    /// A move names a cell outside 1-9.
    #[display("Move position {} is not a board cell", position)]
    CellOutOfRange {
        /// The position received.
        position: u32,
    },

    /// Two moves in the history claim the same cell.
    #[display("Cell {} appears more than once in the move history", position)]
    DuplicateCell {
        /// The repeated cell.
        position: u32,
    },
}

/// A validated server response.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct GameSnapshot {
    /// Game identifier.
    id: String,
    /// Authoritative move history, in server order.
    moves: Vec<Move>,
    /// Players in the game.
    players: Vec<Player>,
    /// Game status.
    status: GameStatus,
    /// Winner identifier; `None` while in progress or on a draw.
    winner: Option<String>,
}

/// Validates a raw server response.
///
/// Fields are checked in a fixed order (id, moves, status, then the
/// contents), so a missing id is always reported as such, whatever shape
/// the other fields have.
#[instrument(skip(raw), fields(id = ?raw.id))]
pub fn parse(raw: &ServerResponse) -> Result<GameSnapshot, ParseError> {
    let id = match &raw.id {
        None => return Err(ParseError::MissingGameId),
        Some(Value::String(id)) if id.is_empty() => return Err(ParseError::MissingGameId),
        Some(Value::String(id)) => id.as_str(),
        Some(other) => {
            return Err(malformed("id", format!("expected a string, got {}", other)));
        }
    };

    let server_moves: Vec<ServerMove> =
        decode("moves", raw.moves.as_ref().ok_or(ParseError::MissingMoveHistory)?)?;

    let status = match &raw.status {
        None => return Err(ParseError::MissingStatus),
        Some(Value::String(status)) if status.is_empty() => return Err(ParseError::MissingStatus),
        Some(Value::String(status)) => status.clone(),
        Some(other) => other.to_string(),
    };
    let status = GameStatus::from_str(&status).map_err(|_| {
        warn!(status = status.as_str(), "Server sent unknown status");
        ParseError::UnrecognizedStatus { status }
    })?;

    let players = match &raw.players {
        Some(players) => decode::<Vec<PlayerEncoding>>("players", players)?
            .iter()
            .map(resolve_player)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let moves = parse_moves(&server_moves)?;

    let winner = raw
        .winner
        .as_ref()
        .map(|winner| decode::<PlayerEncoding>("winner", winner))
        .transpose()?
        .map(|winner| winner_identifier(&winner))
        .transpose()?;

    debug!(
        game_id = id,
        moves = moves.len(),
        status = %status,
        winner = ?winner,
        "Parsed server response"
    );

    Ok(GameSnapshot {
        id: id.to_string(),
        moves,
        players,
        status,
        winner,
    })
}

/// Decodes one response field into its wire shape.
fn decode<T: DeserializeOwned>(field: &'static str, value: &Value) -> Result<T, ParseError> {
    serde::Deserialize::deserialize(value)
        .map_err(|e: serde_json::Error| malformed(field, e.to_string()))
}

fn malformed(field: &'static str, reason: String) -> ParseError {
    warn!(field, reason = reason.as_str(), "Server sent malformed field");
    ParseError::MalformedField { field, reason }
}

/// Converts the server's move history, enforcing one move per cell.
fn parse_moves(server_moves: &[ServerMove]) -> Result<Vec<Move>, ParseError> {
    let mut seen = HashSet::with_capacity(server_moves.len());
    server_moves
        .iter()
        .map(|server_move| {
            let cell = Position::from_cell(server_move.position).ok_or(
                ParseError::CellOutOfRange {
                    position: server_move.position,
                },
            )?;
            if !seen.insert(cell) {
                return Err(ParseError::DuplicateCell {
                    position: server_move.position,
                });
            }
            let player = resolve_player(&server_move.player)?;
            Ok(Move::new(player, cell, server_move.turn))
        })
        .collect()
}

/// Maps a wire player onto a client role.
///
/// Wrapped identifiers are always the user; the only accepted bare string
/// is the computer role.
#[instrument]
pub fn resolve_player(encoding: &PlayerEncoding) -> Result<Player, ParseError> {
    match encoding {
        PlayerEncoding::Custom { .. } => Ok(Player::User),
        PlayerEncoding::Role(role) if role == COMPUTER_ROLE => Ok(Player::Computer),
        other => Err(unrecognized(other)),
    }
}

/// Extracts the identifier carried by a winner encoding.
fn winner_identifier(encoding: &PlayerEncoding) -> Result<String, ParseError> {
    match encoding {
        PlayerEncoding::Role(role) => Ok(role.clone()),
        PlayerEncoding::Custom { player } => Ok(player.clone()),
        other => Err(unrecognized(other)),
    }
}

fn unrecognized(encoding: &PlayerEncoding) -> ParseError {
    warn!(%encoding, "Server sent unknown player encoding");
    ParseError::UnrecognizedPlayerEncoding {
        encoding: encoding.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(moves: Vec<ServerMove>) -> ServerResponse {
        ServerResponse {
            id: Some(Value::from("g1")),
            moves: Some(serde_json::to_value(moves).expect("Moves should encode")),
            players: None,
            status: Some(Value::from("InProgress")),
            winner: None,
        }
    }

    #[test]
    fn test_moves_keep_server_order() {
        let raw = response(vec![
            ServerMove::new(9, 2, PlayerEncoding::role("Computer")),
            ServerMove::new(1, 1, PlayerEncoding::custom("alice")),
        ]);
        let snapshot = parse(&raw).expect("Parse failed");
        let cells: Vec<u8> = snapshot.moves().iter().map(|m| m.cell().cell()).collect();
        assert_eq!(cells, vec![9, 1]);
    }

    #[test]
    fn test_duplicate_cell_rejected() {
        let raw = response(vec![
            ServerMove::new(3, 1, PlayerEncoding::custom("alice")),
            ServerMove::new(3, 2, PlayerEncoding::role("Computer")),
        ]);
        assert_eq!(
            parse(&raw),
            Err(ParseError::DuplicateCell { position: 3 })
        );
    }

    #[test]
    fn test_absent_players_is_empty() {
        let snapshot = parse(&response(Vec::new())).expect("Parse failed");
        assert!(snapshot.players().is_empty());
    }

    #[test]
    fn test_move_without_player_is_malformed() {
        let mut raw = response(Vec::new());
        raw.moves = Some(serde_json::json!([{ "position": 5, "turn": 1 }]));
        assert!(matches!(
            parse(&raw),
            Err(ParseError::MalformedField { field: "moves", .. })
        ));
    }
}
