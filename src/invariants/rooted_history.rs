//! Rooted history invariant: history starts from the empty board and the
//! current-move pointer stays inside it.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Square;

/// Invariant: history is rooted and the pointer is in bounds.
///
/// The first entry is always the all-empty board with no move location,
/// and `current_move` indexes an existing entry. Jumping never removes
/// entries, so the pointer can only go stale through corruption.
pub struct RootedHistoryInvariant;

impl Invariant<GameEngine> for RootedHistoryInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let Some(root) = engine.history().first() else {
            return false;
        };

        if root.location().is_some() {
            return false;
        }

        if root.board().squares().iter().any(|s| *s != Square::Empty) {
            return false;
        }

        engine.current_move() < engine.history().len()
    }

    fn description() -> &'static str {
        "History starts at the empty board and current_move is in bounds"
    }
}
