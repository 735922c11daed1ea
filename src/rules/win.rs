//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A decided game: the winning mark and the line that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerInfo {
    winner: Player,
    line: [Position; 3],
}

impl WinnerInfo {
    /// Returns the winning player.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the three positions of the winning line.
    pub fn line(&self) -> &[Position; 3] {
        &self.line
    }

    /// Checks whether the given position lies on the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks the board for a completed line.
///
/// The 8 candidate lines are evaluated in a fixed order: rows top to
/// bottom, columns left to right, then the two diagonals. The first
/// matching line wins, which keeps the result deterministic even for
/// boards that could never arise from legal play.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinnerInfo> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(WinnerInfo {
                winner: player,
                line,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));

        let info = winning_line(&board).expect("top row should win");
        assert_eq!(info.winner(), Player::X);
        assert_eq!(
            info.line(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        let info = winning_line(&board).expect("diagonal should win");
        assert_eq!(info.winner(), Player::O);
        assert!(info.contains(Position::Center));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_matching_line_wins_ties() {
        // Two complete lines at once; only reachable through malformed
        // boards, but the row is checked before the column.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }

        let info = winning_line(&board).expect("should find a line");
        assert_eq!(
            info.line(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
