//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

use crate::game::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so related invariants compose
/// into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<S, $($name),+> InvariantSet<S> for ($($name,)+)
        where
            $($name: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$name::holds(state) {
                        violations.push(InvariantViolation::new($name::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_mark;
pub mod cursor_in_range;
pub mod empty_root;
pub mod single_cell_delta;

pub use alternating_mark::AlternatingMarkInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use empty_root::EmptyRootInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All game history invariants as a composable set.
pub type GameInvariants = (
    EmptyRootInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarkInvariant,
    CursorInRangeInvariant,
);

/// Debug-build check that every history invariant holds after a
/// transition.
pub(crate) fn assert_invariants(game: &Game) {
    if cfg!(debug_assertions) {
        if let Err(violations) = GameInvariants::check_all(game) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("invariant violation after transition: {descriptions}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ])
        .expect("legal moves");
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ])
        .expect("legal moves");
        game.jump_to(1).unwrap();
        game.play(Position::BottomLeft).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (EmptyRootInvariant, CursorInRangeInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        use crate::types::{Player, Square};

        let mut game = Game::new();
        // Corrupt the root snapshot with a mark no move produced
        game.history[0]
            .board
            .set(Position::Center, Square::Occupied(Player::O));

        let result = GameInvariants::check_all(&game);
        assert!(result.is_err());
        assert!(!result.unwrap_err().is_empty());
    }
}
