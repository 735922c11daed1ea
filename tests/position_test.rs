//! Tests for position conversions.

use tictactoe_replay::Position;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_row_col_agree_with_row_major_indexing() {
    for (index, pos) in Position::all().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(pos.row(), index / 3);
        assert_eq!(pos.col(), index % 3);
        assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
    }
}

#[test]
fn test_from_row_col_bounds() {
    assert_eq!(Position::from_row_col(1, 2), Some(Position::MiddleRight));
    assert_eq!(Position::from_row_col(3, 0), None);
    assert_eq!(Position::from_row_col(0, 3), None);
}
