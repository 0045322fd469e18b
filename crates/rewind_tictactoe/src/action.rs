//! First-class move events for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Each history step records
//! the move that produced it, so moves must carry enough to label and
//! replay themselves.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The 1-based `(col, row)` coordinate of this move.
    pub fn coordinate(&self) -> (usize, usize) {
        (self.position.col(), self.position.row())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (col, row) = self.coordinate();
        write!(f, "{} : [{}, {}]", self.player, col, row)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a final result.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
