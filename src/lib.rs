//! Tic-tac-toe client that keeps a local board in step with a game server.
//!
//! The server is the authority on moves, turn numbers and outcomes. The
//! client shows the player's move immediately, sends it, and then adopts
//! whatever history the server returns.
//!
//! # Architecture
//!
//! - **Games**: move, player, cell and status values
//! - **Protocol**: wire shapes and the parser that validates them
//! - **Transport**: the [`GameApi`] seam and its HTTP implementation
//! - **Session**: per-game state and the turn gate
//! - **Controller**: optimistic moves and reconciliation with the server
//! - **Board**: read-only projection for front ends
//!
//! # Example
//!
//! ```no_run
//! use ttt_client::{ClientConfig, Position, RestGameApi, SessionController};
//!
//! # async fn example() -> Result<(), ttt_client::ClientError> {
//! let config = ClientConfig::default();
//! let api = RestGameApi::new(config.api_base_url());
//! let mut controller = SessionController::new(api, config.player_id().clone());
//!
//! controller.request_move(Position::Center).await?;
//! println!("{}", controller.board());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod controller;
mod error;
mod games;
mod protocol;
mod session;
mod transport;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{COMPUTER_ROLE, GameStatus, Move, Player, Position};

// Crate-level exports - Server protocol
pub use protocol::{
    CreateGameRequest, GameSnapshot, ParseError, PlayerEncoding, ServerMove, ServerResponse,
    SubmitMoveRequest, parse, resolve_player,
};

// Crate-level exports - Transport
pub use transport::{GameApi, RestGameApi};

// Crate-level exports - Session management
pub use controller::SessionController;
pub use session::GameSession;

// Crate-level exports - Presentation
pub use board::BoardView;

// Crate-level exports - Configuration
pub use config::{
    API_URL_ENV, ClientConfig, ConfigError, DEFAULT_API_URL, DEFAULT_PLAYER_ID, PLAYER_ID_ENV,
};

// Crate-level exports - Errors
pub use error::{ClientError, TransportError};
