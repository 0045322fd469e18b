//! Tic-tac-toe game logic with a time-travel move history.
//!
//! The [`Game`] state machine owns an append-only history of board
//! snapshots and a cursor into it. All display values derive from the
//! history plus the cursor: the current board, the player to move, the
//! status line, and the move list. Jumping the cursor back and playing a
//! new move truncates the abandoned future, so the history is always a
//! single branch.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::TopLeft)?;
//! game.play(Position::Center)?;
//! assert_eq!(game.to_move(), Player::X);
//!
//! // Rewind to the start and branch off
//! game.jump_to(0)?;
//! game.play(Position::BottomRight)?;
//! assert_eq!(game.steps().len(), 2);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod history;
mod position;
mod types;

// Public rule and invariant surfaces
pub mod invariants;
pub mod rules;

// Crate-level exports - move events
pub use action::{Move, MoveError};

// Crate-level exports - game state machine
pub use game::Game;

// Crate-level exports - history
pub use history::{HistoryError, Step};

// Crate-level exports - board positions
pub use position::Position;

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - win detection
pub use rules::WinningLine;
