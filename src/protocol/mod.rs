//! Wire format of the game server and its translation into domain values.

mod parse;
mod wire;

pub use parse::{GameSnapshot, ParseError, parse, resolve_player};
pub use wire::{CreateGameRequest, PlayerEncoding, ServerMove, ServerResponse, SubmitMoveRequest};
