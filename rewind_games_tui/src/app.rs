//! Application state and logic.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Game, Position};
use tracing::debug;

use crate::input;

/// Main application state: the game plus display-only view state.
pub struct App {
    game: Game,
    board_cursor: Position,
    ascending: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(ascending: bool) -> Self {
        Self {
            game: Game::new(),
            board_cursor: Position::Center,
            ascending,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The square the keyboard cursor is on.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Whether the move list is displayed oldest first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Moves the board cursor with an arrow key.
    pub fn move_board_cursor(&mut self, key: KeyCode) {
        self.board_cursor = input::move_cursor(self.board_cursor, key);
    }

    /// Plays at the board cursor. Rejected moves are dropped silently.
    pub fn play_at_cursor(&mut self) {
        self.play(self.board_cursor);
    }

    /// Plays at a square by index (keys 1-9 map to squares 0-8).
    pub fn play_square(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.board_cursor = pos;
            self.play(pos);
        }
    }

    fn play(&mut self, pos: Position) {
        if let Err(e) = self.game.play(pos) {
            // Occupied square or finished game: ignore, per UI policy
            debug!(position = ?pos, error = %e, "Move rejected");
        }
    }

    /// Steps the history cursor back one move, if possible.
    pub fn step_back(&mut self) {
        let cursor = self.game.cursor();
        if cursor > 0 {
            let _ = self.game.jump_to(cursor - 1);
        }
    }

    /// Steps the history cursor forward one move, if possible.
    pub fn step_forward(&mut self) {
        let _ = self.game.jump_to(self.game.cursor() + 1);
    }

    /// Jumps the history cursor to the empty board.
    pub fn jump_to_start(&mut self) {
        let _ = self.game.jump_to(0);
    }

    /// Reverses the displayed order of the move list. Display-only: the
    /// history and cursor are untouched.
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Restarts the game, discarding the history.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::new();
        self.board_cursor = Position::Center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameStatus, Player};

    #[test]
    fn test_rejected_play_is_silent() {
        let mut app = App::new(true);
        app.play_square(4);
        app.play_square(4);
        assert_eq!(app.game().steps().len(), 2);
        assert_eq!(app.game().to_move(), Player::O);
    }

    #[test]
    fn test_step_navigation_clamps() {
        let mut app = App::new(true);
        app.step_back();
        assert_eq!(app.game().cursor(), 0);

        app.play_square(0);
        app.step_forward();
        assert_eq!(app.game().cursor(), 1);

        app.step_back();
        assert_eq!(app.game().cursor(), 0);
        assert_eq!(app.game().status(), GameStatus::InProgress);
    }

    #[test]
    fn test_toggle_order_leaves_game_alone() {
        let mut app = App::new(true);
        app.play_square(0);
        let before = app.game().clone();

        app.toggle_order();
        assert!(!app.ascending());
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_restart_clears_history() {
        let mut app = App::new(true);
        app.play_square(0);
        app.play_square(4);
        app.restart();
        assert_eq!(app.game().steps().len(), 1);
        assert_eq!(app.game().to_move(), Player::X);
    }
}
