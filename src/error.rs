//! Error taxonomy for the Halma engine
//!
//! Every error here is recoverable at the game-loop boundary: a rejected
//! coordinate or move fails the requested transition without corrupting
//! any state.

use thiserror::Error;

/// Errors that can occur in board and game logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HalmaError {
    /// The coordinate is outside the 8x8 grid
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfRange { row: i32, col: i32 },

    /// The destination is not in the piece's legal-move set
    #[error("illegal move")]
    IllegalMove,

    /// The side to move has no legal move with any piece
    #[error("no legal moves")]
    NoLegalMove,
}
