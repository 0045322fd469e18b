//! The game state machine: history of board snapshots plus a cursor.
//!
//! All display values (current board, status, move list) derive from the
//! history and the cursor. Moving the cursor back and playing a new move
//! discards the abandoned future, single-branch undo semantics.

use crate::action::{Move, MoveError};
use crate::history::{HistoryError, Step};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::rules::WinningLine;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Tic-tac-toe game with a navigable move history.
///
/// The history is append-only except for truncation when a new move is
/// played from an earlier cursor. Index 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: Vec<Step>,
    pub(crate) cursor: usize,
}

impl Game {
    /// Creates a new game: one initial step, cursor on it.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Step::initial()],
            cursor: 0,
        }
    }

    /// The board snapshot at the cursor.
    pub fn board(&self) -> &Board {
        self.history[self.cursor].board()
    }

    /// The history index currently displayed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All history steps, oldest first.
    pub fn steps(&self) -> &[Step] {
        &self.history
    }

    /// The player who moves next from the cursor. X moves on even
    /// cursors, O on odd ones.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The winning line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        rules::check_winner(self.board())
    }

    /// Status of the displayed board. A completed line takes precedence
    /// over a full board.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Won(win.player)
        } else if rules::is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Human-readable status for the displayed board.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("Winner: {player}"),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// Plays the derived next player's mark at the given position.
    ///
    /// Truncates any steps beyond the cursor, appends the new snapshot,
    /// and advances the cursor to it.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the displayed board already has a
    /// final result, or `MoveError::SquareOccupied` if the target square
    /// is taken. Errors leave the history and cursor untouched.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status() != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(player));

        self.history.truncate(self.cursor + 1);
        self.history.push(Step::new(board, Move::new(player, pos)));
        self.cursor = self.history.len() - 1;

        invariants::assert_invariants(self);

        Ok(())
    }

    /// Moves the cursor to the given history step.
    ///
    /// The history itself is untouched, so playing from an earlier step
    /// later overwrites the abandoned branch.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::StepOutOfRange` if the step does not exist.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.cursor = step;

        invariants::assert_invariants(self);

        Ok(())
    }

    /// Replays a sequence of positions from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first `MoveError` encountered.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Game::new();
        for pos in positions {
            game.play(*pos)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
