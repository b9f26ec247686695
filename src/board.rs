//! Read-only board projection for front ends.
//!
//! A [`BoardView`] borrows the session's moves and answers "who is on this
//! cell". It keeps no state of its own; front ends rebuild it after every
//! session change and forward clicks to
//! [`SessionController::on_cell_selected`](crate::SessionController::on_cell_selected).

use crate::games::tictactoe::{Move, Player, Position};

/// 3x3 board derived from a move history.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    moves: &'a [Move],
}

impl<'a> BoardView<'a> {
    /// Creates a view over `moves`.
    pub fn new(moves: &'a [Move]) -> Self {
        Self { moves }
    }

    /// Returns the player whose move lists `cell`, if any.
    ///
    /// The first matching move wins.
    pub fn occupant_of(&self, cell: Position) -> Option<Player> {
        self.moves
            .iter()
            .find(|m| m.occupies(cell))
            .map(|m| m.player())
    }

    /// Iterates all nine cells with their occupants, in cell order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Player>)> + '_ {
        Position::ALL
            .into_iter()
            .map(move |cell| (cell, self.occupant_of(cell)))
    }

    /// Cells nobody has played yet.
    pub fn free_cells(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, occupant)| occupant.is_none())
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their number so players know what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (cell, occupant) in self.cells() {
            match occupant {
                Some(player) => result.push_str(player.symbol()),
                None => result.push_str(&cell.cell().to_string()),
            }
            if cell.column() < 2 {
                result.push('|');
            } else if cell.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
