//! First-class invariants for the history engine.
//!
//! Invariants are logical properties that must hold throughout engine
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

fn collect_violations<const N: usize>(
    checks: [(bool, &'static str); N],
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Computes the single mark added between two consecutive snapshots.
///
/// Returns `Some((position, player))` only when exactly one cell changed,
/// that cell was empty before, and it is occupied after.
pub(crate) fn single_addition(prev: &Board, next: &Board) -> Option<(Position, Player)> {
    let mut added = None;

    for pos in Position::all() {
        match (prev.get(pos), next.get(pos)) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(player)) => {
                if added.is_some() {
                    return None;
                }
                added = Some((pos, player));
            }
            // Occupied cells never change or revert
            _ => return None,
        }
    }

    added
}

pub mod alternating_mark;
pub mod monotonic_history;
pub mod rooted_history;

pub use alternating_mark::AlternatingMarkInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use rooted_history::RootedHistoryInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    RootedHistoryInvariant,
    MonotonicHistoryInvariant,
    AlternatingMarkInvariant,
);
