//! Step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::Square;

/// Invariant: each history step after the first differs from its
/// predecessor in exactly one square, which was empty and now holds the
/// recorded mover's mark at the recorded position.
pub struct SingleCellDeltaInvariant;

impl Invariant<Game> for SingleCellDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.steps().windows(2).all(|pair| {
            let (prev, cur) = (&pair[0], &pair[1]);
            let Some(action) = cur.action() else {
                return false;
            };

            let changed: Vec<Position> = Position::ALL
                .iter()
                .copied()
                .filter(|pos| prev.board().get(*pos) != cur.board().get(*pos))
                .collect();

            changed == [action.position()]
                && prev.board().is_empty(action.position())
                && cur.board().get(action.position())
                    == Square::Occupied(action.player())
        })
    }

    fn description() -> &'static str {
        "Each step adds exactly one mark on a previously empty square"
    }
}
