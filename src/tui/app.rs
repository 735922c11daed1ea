//! Application state for the TUI.

use crossterm::event::KeyCode;
use tictactoe_replay::{GameEngine, GameView, Position};
use tracing::debug;

use super::input;

/// Main application state: the engine plus presentation-only concerns.
///
/// The cursor and the transient notice live here, not in the engine;
/// they are rendering state, like button styling in any other front-end.
pub struct App {
    engine: GameEngine,
    view: GameView,
    cursor: Position,
    notice: Option<String>,
}

impl App {
    /// Creates the application at the game start.
    pub fn new() -> Self {
        let engine = GameEngine::new();
        let view = engine.view();
        Self {
            engine,
            view,
            cursor: Position::Center,
            notice: None,
        }
    }

    /// Returns the view to render.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the transient notice for the last rejected request, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Applies one key press to the engine or the cursor.
    pub fn handle_key(&mut self, key: KeyCode) {
        self.notice = None;

        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                // Keys 1-9 map to cells 0-8
                self.play(c as usize - '1' as usize);
            }
            KeyCode::Char('[') => self.jump_relative(-1),
            KeyCode::Char(']') => self.jump_relative(1),
            KeyCode::Char('g') => self.jump(0),
            KeyCode::Char('e') => self.jump(self.view.moves().len() - 1),
            KeyCode::Char('s') => self.view = self.engine.toggle_sort_order(),
            KeyCode::Char('r') => self.view = self.engine.reset(),
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        match self.engine.play(cell) {
            Ok(view) => self.view = view,
            // Rejected requests leave the board untouched; only the notice changes.
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn jump(&mut self, index: usize) {
        match self.engine.jump_to(index) {
            Ok(view) => self.view = view,
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn jump_relative(&mut self, delta: isize) {
        let target = self.view.current_move() as isize + delta;
        if target < 0 || target >= self.view.moves().len() as isize {
            debug!(target, "Ignoring jump outside history");
            return;
        }
        self.jump(target as usize);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_replay::GameStatus;

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.view().moves().len(), 2);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_rejected_move_sets_notice_only() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        let before = app.view().clone();

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.view(), &before);
        assert!(app.notice().is_some());
    }

    #[test]
    fn test_bracket_keys_time_travel() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('['));

        assert_eq!(app.view().current_move(), 1);
        // History survives the jump
        assert_eq!(app.view().moves().len(), 3);
    }

    #[test]
    fn test_reset_key_restarts() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));

        assert_eq!(app.view().moves().len(), 1);
        assert_eq!(
            app.view().status(),
            &GameStatus::InProgress(tictactoe_replay::Player::X)
        );
    }
}
