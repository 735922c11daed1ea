//! UI rendering using ratatui.

mod board;
mod moves;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use moves::render_move_list;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(f.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(columns[0]);

    let title = Paragraph::new("Tic-Tac-Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, left[0]);

    render_board(f, left[1], app);

    // A rejected request shows up here; the board itself never changes.
    let (status_text, status_color) = match app.notice() {
        Some(notice) => (notice.to_string(), Color::Red),
        None => (app.view().status().to_string(), Color::Yellow),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, left[2]);

    let help =
        Paragraph::new("Arrows+Enter or 1-9: place | [ ] g e: time travel | s: sort | r: reset | q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, left[3]);

    render_move_list(f, columns[1], app.view());
}
