//! Board cells for tic-tac-toe moves.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Cells are numbered 1-9 in row-major order, which is also how the
/// server addresses them (`move_position`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// All 9 positions, in cell order.
    pub const ALL: [Position; Self::COUNT] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to its 1-based cell number.
    pub fn cell(self) -> u8 {
        match self {
            Position::TopLeft => 1,
            Position::TopCenter => 2,
            Position::TopRight => 3,
            Position::MiddleLeft => 4,
            Position::Center => 5,
            Position::MiddleRight => 6,
            Position::BottomLeft => 7,
            Position::BottomCenter => 8,
            Position::BottomRight => 9,
        }
    }

    /// Creates a position from a 1-based cell number.
    ///
    /// Returns `None` outside 1-9.
    #[instrument]
    pub fn from_cell(cell: u32) -> Option<Self> {
        match cell {
            1..=9 => Some(Self::ALL[(cell - 1) as usize]),
            _ => None,
        }
    }

    /// Zero-based row (0-2).
    pub fn row(self) -> u8 {
        (self.cell() - 1) / 3
    }

    /// Zero-based column (0-2).
    pub fn column(self) -> u8 {
        (self.cell() - 1) % 3
    }
}

impl From<Position> for u32 {
    fn from(position: Position) -> Self {
        u32::from(position.cell())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
