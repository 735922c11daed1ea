//! Contract-based validation for engine operations.
//!
//! Contracts formalize the Hoare-style reasoning {P} action {Q}:
//! preconditions gate a move before anything mutates, postconditions
//! verify the invariant set afterwards.

use crate::engine::{GameEngine, MoveError};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use tracing::instrument;

/// Precondition: the game must not already be decided.
pub struct GameNotDecided;

impl GameNotDecided {
    /// Rejects the move when a winner exists on the board in view.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        if engine.winner_info().is_some() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the requested cell index must name a board cell.
pub struct CellInBounds;

impl CellInBounds {
    /// Resolves the raw index into a position, rejecting out-of-range input.
    #[instrument]
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))
    }
}

/// Precondition: the requested cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects the move when the cell already carries a mark.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is undecided, the
/// index is on the board, and the cell is empty — checked in that order,
/// so a finished game reports `GameOver` even for nonsense input.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, yielding the target position.
    #[instrument(skip(engine))]
    pub fn check(cell: usize, engine: &GameEngine) -> Result<Position, MoveError> {
        GameNotDecided::check(engine)?;
        let pos = CellInBounds::check(cell)?;
        CellIsEmpty::check(pos, engine)?;
        Ok(pos)
    }
}

/// Contract for the `play` operation.
///
/// Preconditions: [`LegalMove`]. Postconditions: the full engine
/// invariant set still holds, checked in debug builds only.
pub struct MoveContract;

impl MoveContract {
    /// Checks preconditions before applying the move.
    pub fn pre(cell: usize, engine: &GameEngine) -> Result<Position, MoveError> {
        LegalMove::check(cell, engine)
    }

    /// Checks postconditions after applying the move.
    pub fn post(engine: &GameEngine) -> Result<(), MoveError> {
        EngineInvariants::check_all(engine).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_cell() {
        let engine = GameEngine::new();
        assert_eq!(MoveContract::pre(4, &engine), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();

        assert_eq!(
            MoveContract::pre(4, &engine),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let engine = GameEngine::new();
        assert_eq!(MoveContract::pre(9, &engine), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_precondition_decided_game() {
        let mut engine = GameEngine::new();
        // X takes the top row
        for cell in [0, 4, 1, 3, 2] {
            engine.play(cell).unwrap();
        }

        assert_eq!(MoveContract::pre(8, &engine), Err(MoveError::GameOver));
        // The game-over guard fires before bounds checking
        assert_eq!(MoveContract::pre(42, &engine), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();
        assert!(MoveContract::post(&engine).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut engine = GameEngine::new();
        engine.play(4).unwrap();

        // Point the engine past the end of history
        engine.current_move = 7;

        assert!(MoveContract::post(&engine).is_err());
    }
}
