//! Tests for tic-tac-toe cell positions.

use ttt_client::Position;

#[test]
fn test_position_to_cell() {
    assert_eq!(Position::TopLeft.cell(), 1);
    assert_eq!(Position::Center.cell(), 5);
    assert_eq!(Position::BottomRight.cell(), 9);
}

#[test]
fn test_position_from_cell() {
    assert_eq!(Position::from_cell(1), Some(Position::TopLeft));
    assert_eq!(Position::from_cell(5), Some(Position::Center));
    assert_eq!(Position::from_cell(9), Some(Position::BottomRight));
    assert_eq!(Position::from_cell(0), None);
    assert_eq!(Position::from_cell(10), None);
}

#[test]
fn test_cells_are_row_major() {
    for (index, position) in Position::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(position.cell()), index + 1);
        assert_eq!(usize::from(position.row()), index / 3);
        assert_eq!(usize::from(position.column()), index % 3);
        assert_eq!(Position::from_cell(u32::from(position)), Some(position));
    }
}
