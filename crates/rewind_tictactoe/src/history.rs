//! History steps for the time-travel move record.

use crate::action::Move;
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// One entry in the game history: a board snapshot plus the move that
/// produced it. The initial step has no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub(crate) board: Board,
    pub(crate) action: Option<Move>,
}

impl Step {
    /// The initial step: an empty board with no move attached.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            action: None,
        }
    }

    /// Creates a step from a board snapshot and the move that produced it.
    pub fn new(board: Board, action: Move) -> Self {
        Self {
            board,
            action: Some(action),
        }
    }

    /// The board snapshot after this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, if any.
    pub fn action(&self) -> Option<Move> {
        self.action
    }

    /// Move-list label: "Go to game start" for the initial step,
    /// "Go to move #n" otherwise.
    pub fn label(&self, index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        }
    }
}

/// Error that can occur when navigating the history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    StepOutOfRange {
        /// The requested step index.
        step: usize,
        /// The current history length.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}
