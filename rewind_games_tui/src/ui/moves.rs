//! Move history list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::App;

/// Renders the move history as a navigable list.
///
/// The entry at the game's history cursor is highlighted. The list
/// order follows the app's ascending flag; the highlight tracks the
/// same step either way.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let len = game.steps().len();

    let mut items: Vec<ListItem> = game
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let text = match step.action() {
                Some(mv) => format!("{}  {}", step.label(i), mv),
                None => step.label(i),
            };
            ListItem::new(text)
        })
        .collect();

    let selected = if app.ascending() {
        game.cursor()
    } else {
        items.reverse();
        len - 1 - game.cursor()
    };

    let title = if app.ascending() {
        "Moves (oldest first)"
    } else {
        "Moves (newest first)"
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut list_state);
}
