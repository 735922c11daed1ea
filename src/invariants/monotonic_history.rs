//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::{Invariant, single_addition};
use crate::engine::GameEngine;

/// Invariant: consecutive snapshots differ by exactly one new mark.
///
/// For every entry after the first, the board differs from its
/// predecessor in exactly one cell, which was empty and became occupied,
/// and the entry's recorded location names that cell. Marks already on
/// the board never move or disappear.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameEngine> for MonotonicHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().windows(2).all(|pair| {
            let [prev, next] = pair else {
                return false;
            };

            match single_addition(prev.board(), next.board()) {
                Some((pos, _)) => next.location() == Some(pos),
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at its recorded location"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::position::Position;
    use crate::types::{Board, Player, Square};

    #[test]
    fn test_new_engine_holds() {
        let engine = GameEngine::new();
        assert!(MonotonicHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut engine = GameEngine::new();
        engine.play(0).unwrap();
        engine.play(4).unwrap();
        engine.play(8).unwrap();
        assert!(MonotonicHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();

        // Replace the occupied center instead of filling an empty cell
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        engine.history.push(HistoryEntry::new(board, Position::Center));

        assert!(!MonotonicHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_double_addition_violates() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();

        // Two new marks in a single step
        let mut board = engine.board().clone();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::O));
        engine.history.push(HistoryEntry::new(board, Position::TopLeft));

        assert!(!MonotonicHistoryInvariant::holds(&engine));
    }

    #[test]
    fn test_mismatched_location_violates() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();

        let mut board = engine.board().clone();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        engine
            .history
            .push(HistoryEntry::new(board, Position::BottomRight));

        assert!(!MonotonicHistoryInvariant::holds(&engine));
    }
}
