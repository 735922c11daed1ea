//! Move-list rendering with sort order and current-move marking.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};
use tictactoe_replay::GameView;

/// Renders the jump list of history entries.
///
/// The list honors the view's sort order. The entry in view is rendered
/// as plain text ("You are at move #n") rather than a jump target.
pub fn render_move_list(f: &mut Frame, area: Rect, view: &GameView) {
    let ascending = view.sort_order().is_ascending();

    let ordered: Vec<_> = if ascending {
        view.moves().iter().collect()
    } else {
        view.moves().iter().rev().collect()
    };

    let items: Vec<ListItem> = ordered
        .into_iter()
        .map(|descriptor| {
            if descriptor.index() == view.current_move() {
                ListItem::new(format!("You are at move #{}", descriptor.index()))
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(descriptor.label())
            }
        })
        .collect();

    let title = if ascending {
        "Moves (ascending)"
    } else {
        "Moves (descending)"
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}
