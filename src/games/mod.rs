//! Game domain models.

pub mod tictactoe;
