//! Root invariant: history starts from the empty board.

use super::Invariant;
use crate::game::Game;
use crate::types::Board;

/// Invariant: the first history step is the all-empty board with no
/// move attached.
pub struct EmptyRootInvariant;

impl Invariant<Game> for EmptyRootInvariant {
    fn holds(game: &Game) -> bool {
        match game.steps().first() {
            Some(step) => step.board() == &Board::new() && step.action().is_none(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts from an empty board with no move attached"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(EmptyRootInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves() {
        let game = Game::replay(&[Position::Center, Position::TopLeft]).unwrap();
        assert!(EmptyRootInvariant::holds(&game));
    }

    #[test]
    fn test_occupied_root_violates() {
        let mut game = Game::new();
        game.history[0]
            .board
            .set(Position::Center, Square::Occupied(Player::X));
        assert!(!EmptyRootInvariant::holds(&game));
    }

    #[test]
    fn test_root_with_move_violates() {
        let mut game = Game::replay(&[Position::Center]).unwrap();
        game.history[0].action = game.history[1].action;
        assert!(!EmptyRootInvariant::holds(&game));
    }
}
