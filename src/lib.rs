//! Tic-tac-toe with move history and time travel.
//!
//! The crate centers on [`GameEngine`], which owns the authoritative list of
//! board snapshots, a pointer selecting which snapshot is "now", and a
//! presentation-only sort preference for the move list. Everything the
//! presentation layer renders comes out of a single [`GameView`] query.
//!
//! # Architecture
//!
//! - **Engine**: history of board snapshots, move legality, win/draw
//!   detection, history-branch truncation on time travel
//! - **View**: derived render snapshot (board, status, winner line, move list)
//! - **Invariants**: first-class, independently testable history properties
//! - **TUI**: terminal front-end (binary only), layered on the view query
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.play(4)?;
//! engine.play(0)?;
//!
//! let view = engine.view();
//! assert_eq!(view.status(), &GameStatus::InProgress(Player::X));
//!
//! // Travel back to the start; history is untouched.
//! engine.jump_to(0)?;
//! assert_eq!(engine.view().moves().len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod engine;
mod history;
mod invariants;
mod position;
mod rules;
mod types;
mod view;

// Crate-level exports - Engine
pub use engine::{GameEngine, JumpError, MoveError};

// Crate-level exports - History
pub use history::{HistoryEntry, MoveDescriptor};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingMarkInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicHistoryInvariant, RootedHistoryInvariant,
};

// Crate-level exports - Domain types
pub use position::Position;
pub use rules::WinnerInfo;
pub use types::{Board, GameStatus, Player, SortOrder, Square};

// Crate-level exports - Render snapshot
pub use view::GameView;
