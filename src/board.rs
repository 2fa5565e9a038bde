//! Board utilities and move application
//!
//! Provides the fundamental board operations used throughout the engine:
//! - Square validation and indexing
//! - Piece ownership queries
//! - Board initialization and in-place move application

use super::constants::*;
use super::types::*;

/// Convert column and row to linear position (0-63)
#[inline]
pub fn square_to_pos(col: i8, row: i8) -> i8 {
    row * 8 + col
}

/// Convert position to (col, row)
#[inline]
pub fn pos_to_square(pos: i8) -> (i8, i8) {
    (pos % 8, pos / 8)
}

/// Check if position is within board bounds
#[inline]
pub fn is_valid_pos(pos: i32) -> bool {
    pos >= 0 && pos < 64
}

/// Check if piece belongs to color (1 = Opponent, -1 = Player)
#[inline]
pub fn piece_belongs_to(piece: i8, color: Color) -> bool {
    if piece == 0 {
        false
    } else if color > 0 {
        piece > 0
    } else {
        piece < 0
    }
}

/// Get color of piece (1 = Opponent, -1 = Player, 0 = empty)
#[inline]
pub fn get_piece_color(piece: i8) -> Color {
    if piece > 0 {
        COLOR_OPPONENT
    } else if piece < 0 {
        COLOR_PLAYER
    } else {
        0
    }
}

/// Initialize a game board to the standard starting position
pub fn init_board() -> Board {
    SETUP
}

/// Apply a move to the board in place.
///
/// Reads the piece at `mv.src`, clears the source square and writes the
/// piece to `mv.dst`. For a capture jump the square in between is cleared
/// unconditionally.
///
/// The move must have been produced by move generation against this exact
/// board state; legality is not re-checked here. Out-of-range coordinates
/// are a caller bug and panic on the array index.
pub fn make_move(board: &mut Board, mv: Move) {
    let piece = board[mv.src as usize];
    board[mv.src as usize] = VOID_ID;
    board[mv.dst as usize] = piece;

    if mv.is_jump() {
        board[mv.jumped() as usize] = VOID_ID;
    }
}
