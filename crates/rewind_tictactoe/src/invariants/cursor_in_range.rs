//! Cursor invariant: the displayed step always exists.

use super::Invariant;
use crate::game::Game;

/// Invariant: the cursor is a valid index into the history.
pub struct CursorInRangeInvariant;

impl Invariant<Game> for CursorInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.cursor() < game.steps().len()
    }

    fn description() -> &'static str {
        "Cursor is a valid index into the history"
    }
}
