//! Tic-tac-toe domain values shared by the parser, session and board view.

mod action;
mod position;
mod types;

pub use action::Move;
pub use position::Position;
pub use types::{COMPUTER_ROLE, GameStatus, Player};
