//! Derived render snapshot for the presentation layer.

use crate::history::MoveDescriptor;
use crate::rules::WinnerInfo;
use crate::types::{Board, GameStatus, SortOrder};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to render one frame.
///
/// A view is a value, detached from the engine: holding one does not
/// observe later operations. Partial states are unobservable by
/// construction, since each engine operation returns a fresh view only
/// after it has fully completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    board: Board,
    status: GameStatus,
    winner: Option<WinnerInfo>,
    moves: Vec<MoveDescriptor>,
    current_move: usize,
    sort_order: SortOrder,
}

impl GameView {
    pub(crate) fn new(
        board: Board,
        status: GameStatus,
        winner: Option<WinnerInfo>,
        moves: Vec<MoveDescriptor>,
        current_move: usize,
        sort_order: SortOrder,
    ) -> Self {
        Self {
            board,
            status,
            winner,
            moves,
            current_move,
            sort_order,
        }
    }

    /// Returns the board in view.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the derived game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winner and winning line, if the game is decided.
    pub fn winner(&self) -> Option<&WinnerInfo> {
        self.winner.as_ref()
    }

    /// Returns the move list in ascending history order.
    ///
    /// The caller applies [`SortOrder`] to the iteration order and renders
    /// the entry at [`current_move`](Self::current_move) as plain text
    /// rather than an actionable control.
    pub fn moves(&self) -> &[MoveDescriptor] {
        &self.moves
    }

    /// Returns the index of the history entry in view.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the requested move-list ordering.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns true if the game in view is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
