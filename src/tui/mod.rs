//! Terminal UI for the tic-tac-toe engine.
//!
//! The TUI is a pure presentation collaborator: it holds a [`GameEngine`]
//! behind [`App`] and re-renders from [`GameView`] query results only.
//!
//! [`GameEngine`]: tictactoe_replay::GameEngine
//! [`GameView`]: tictactoe_replay::GameView

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info};

use app::App;

/// Runs the TUI until the user quits.
pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

fn run_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    let mut app = App::new();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(200))?
            && let Event::Key(key) = event::read()?
        {
            debug!(key = ?key.code, "Key pressed");
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                info!("User quit");
                return Ok(());
            }
            app.handle_key(key.code);
        }
    }
}
