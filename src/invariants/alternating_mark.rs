//! Alternating mark invariant: marks alternate X, O, X, O, ... along history.

use super::{Invariant, single_addition};
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: the marks added along history strictly alternate.
///
/// Entry `i` was produced by the move played from board `i - 1`, so its
/// mark is X exactly when `i - 1` is even. This is the same parity rule
/// that decides whose turn it is: X moves whenever the number of placed
/// marks is even.
pub struct AlternatingMarkInvariant;

impl Invariant<GameEngine> for AlternatingMarkInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .windows(2)
            .enumerate()
            .all(|(prev_index, pair)| {
                let [prev, next] = pair else {
                    return false;
                };

                let expected = if prev_index % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };

                matches!(
                    single_addition(prev.board(), next.board()),
                    Some((_, mark)) if mark == expected
                )
            })
    }

    fn description() -> &'static str {
        "Marks alternate along history, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::position::Position;
    use crate::types::{Board, Square};

    #[test]
    fn test_new_engine_holds() {
        let engine = GameEngine::new();
        assert!(AlternatingMarkInvariant::holds(&engine));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 2, 6, 7] {
            engine.play(cell).unwrap();
        }
        assert!(AlternatingMarkInvariant::holds(&engine));
    }

    #[test]
    fn test_first_mark_must_be_x() {
        let mut engine = GameEngine::new();

        // O as the opening move
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        engine.history.push(HistoryEntry::new(board, Position::Center));

        assert!(!AlternatingMarkInvariant::holds(&engine));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();

        // X plays twice in a row
        let mut board = engine.board().clone();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        engine.history.push(HistoryEntry::new(board, Position::TopLeft));

        assert!(!AlternatingMarkInvariant::holds(&engine));
    }
}
