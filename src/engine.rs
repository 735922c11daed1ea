//! The game-state and history engine.

use crate::contracts::MoveContract;
use crate::history::{HistoryEntry, MoveDescriptor};
use crate::position::Position;
use crate::rules::{self, WinnerInfo};
use crate::types::{Board, GameStatus, Player, SortOrder, Square};
use crate::view::GameView;
use tracing::{info, instrument, warn};

/// Error signalled when a move request is rejected.
///
/// Every variant is recoverable and leaves the engine untouched; the
/// presentation layer reacts by leaving the board visually unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already decided.
    #[display("Game is already over")]
    GameOver,

    /// The requested cell index does not name a board cell.
    #[display("Cell index {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The cell at the requested position already carries a mark.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error signalled when a time-travel request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested index does not name a history entry.
    #[display("Move index {index} is outside history of length {len}")]
    OutOfRange {
        /// The rejected jump target.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Tic-tac-toe engine with full move history and time travel.
///
/// The engine owns three pieces of state: the history of board snapshots,
/// the pointer selecting which snapshot is "now", and the presentation
/// ordering preference for the move list. Turn, winner, and status are
/// derived from that state on every query.
///
/// Every operation either completes atomically or rejects without
/// mutation. The engine itself is single-threaded; callers that share one
/// instance across threads must serialize access (e.g. behind a `Mutex`)
/// so precondition checks see a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_move: usize,
    pub(crate) sort_order: SortOrder,
}

impl GameEngine {
    /// Creates a new engine holding only the game-start snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_move: 0,
            sort_order: SortOrder::Ascending,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived values - recomputed on every query
    // ─────────────────────────────────────────────────────────────

    /// Returns the board in view: the snapshot at the current move.
    pub fn board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// Returns the player who moves next from the board in view.
    ///
    /// X moves whenever the number of already-placed marks (which equals
    /// `current_move`) is even. The parity rule is the single source of
    /// truth for turn order; no "last mover" is stored anywhere.
    pub fn to_move(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner and winning line of the board in view, if any.
    pub fn winner_info(&self) -> Option<WinnerInfo> {
        rules::winning_line(self.board())
    }

    /// Returns the status of the board in view.
    pub fn status(&self) -> GameStatus {
        if let Some(info) = self.winner_info() {
            GameStatus::Won(info.winner())
        } else if rules::is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// Returns the full history of snapshots.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the index of the history entry in view.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the move-list ordering preference.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Returns one descriptor per history entry, in ascending order.
    ///
    /// Applying [`SortOrder`] and rendering the entry at `current_move`
    /// as plain text is left to the presentation layer.
    pub fn move_list(&self) -> Vec<MoveDescriptor> {
        self.history
            .iter()
            .enumerate()
            .map(|(index, entry)| MoveDescriptor::new(index, entry.location()))
            .collect()
    }

    /// Returns the derived render snapshot for the presentation layer.
    pub fn view(&self) -> GameView {
        GameView::new(
            self.board().clone(),
            self.status(),
            self.winner_info(),
            self.move_list(),
            self.current_move,
            self.sort_order,
        )
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Plays the next mark at `cell` (0-8) on the board in view.
    ///
    /// A legal move discards any history entries beyond the current move
    /// (the abandoned branch from an earlier jump), appends the new
    /// snapshot, and advances the pointer to it. This is the only
    /// operation that changes history length or contents.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without mutating anything when the game is
    /// already decided, the index is out of range, or the cell is
    /// occupied.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) -> Result<GameView, MoveError> {
        let pos = MoveContract::pre(cell, self).inspect_err(|e| {
            warn!(cell, error = %e, "Rejected move request");
        })?;

        let mark = self.to_move();
        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(mark));

        // Drop the abandoned future branch, then append
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry::new(next, pos));
        self.current_move = self.history.len() - 1;

        #[cfg(debug_assertions)]
        MoveContract::post(self)?;

        info!(%mark, position = %pos, move_number = self.current_move, "Mark placed");
        Ok(self.view())
    }

    /// Moves the current-move pointer to `index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] without mutating anything when
    /// `index` does not name a history entry.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<GameView, JumpError> {
        let len = self.history.len();
        if index >= len {
            warn!(index, len, "Rejected jump request");
            return Err(JumpError::OutOfRange { index, len });
        }

        self.current_move = index;
        info!(index, "Jumped to history entry");
        Ok(self.view())
    }

    /// Flips the move-list ordering preference.
    ///
    /// Purely presentational: history and the current move are untouched.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) -> GameView {
        self.sort_order = self.sort_order.toggled();
        self.view()
    }

    /// Starts over: a single game-start snapshot, pointer at 0, ascending
    /// move list. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameView {
        self.history = vec![HistoryEntry::start()];
        self.current_move = 0;
        self.sort_order = SortOrder::Ascending;
        info!("Game reset");
        self.view()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
