//! Turn invariant: recorded marks alternate, X first.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: the mover recorded at step i is X for odd i and O for
/// even i (X always opens the game).
pub struct AlternatingMarkInvariant;

impl Invariant<Game> for AlternatingMarkInvariant {
    fn holds(game: &Game) -> bool {
        game.steps().iter().enumerate().skip(1).all(|(i, step)| {
            let expected = if i % 2 == 1 { Player::X } else { Player::O };
            step.action().map(|m| m.player()) == Some(expected)
        })
    }

    fn description() -> &'static str {
        "Recorded marks alternate starting with X"
    }
}
