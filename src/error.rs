//! Error types for the checkers engine
//!
//! Typed failures for the api layer, where moves arrive from outside and
//! have to be validated. The core operations (`make_move`, `minimax`) are
//! total for valid inputs and panic on precondition violations instead of
//! returning errors; a side having no legal moves is a normal terminal
//! condition, never an error.

use thiserror::Error;

/// Errors that can occur when the api layer validates a move
#[derive(Error, Debug)]
pub enum EngineError {
    /// Square index outside the board
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: i8 },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: i8 },

    /// Piece does not belong to the specified color
    #[error("Piece at square {square} does not belong to color {color}")]
    WrongPieceColor { square: i8, color: i64 },

    /// Move is not among the legal moves of the position
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: i8, to: i8 },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
