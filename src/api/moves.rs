//! Move execution and validation
//!
//! Functions for executing moves and checking move legality. Coordinates
//! arrive here from outside the engine, so unlike the core `make_move` both
//! functions validate their inputs.

use crate::board::*;
use crate::constants::VOID_ID;
use crate::error::{EngineError, EngineResult};
use crate::move_gen::generate_moves;
use crate::types::*;

/// Check if a move is legal for the given color
///
/// Validates that the squares are on the board, that the source square holds
/// a man of `color`, and that move generation produces this exact move for
/// the current position. Out-of-range input yields `false`, not a panic.
pub fn is_legal_move(game: &Game, src: i8, dst: i8, color: Color) -> bool {
    if !is_valid_pos(src as i32) || !is_valid_pos(dst as i32) {
        return false;
    }
    if !piece_belongs_to(game.board[src as usize], color) {
        return false;
    }

    generate_moves(&game.board, color)
        .iter()
        .any(|m| m.src == src && m.dst == dst)
}

/// Execute a move on the board
///
/// Validates the move fully before applying it: both squares must be on the
/// board, the source square must hold a man of `color`, and the move must be
/// one that move generation produces for the current position. On success
/// the board is updated (including capture removal) and the move counter is
/// incremented.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSquare`], [`EngineError::NoPieceAtSquare`],
/// [`EngineError::WrongPieceColor`] or [`EngineError::IllegalMove`] when
/// validation fails; the game is left unchanged in that case.
pub fn do_move(game: &mut Game, src: i8, dst: i8, color: Color) -> EngineResult<()> {
    if !is_valid_pos(src as i32) {
        return Err(EngineError::InvalidSquare { square: src });
    }
    if !is_valid_pos(dst as i32) {
        return Err(EngineError::InvalidSquare { square: dst });
    }

    let piece = game.board[src as usize];
    if piece == VOID_ID {
        return Err(EngineError::NoPieceAtSquare { square: src });
    }
    if !piece_belongs_to(piece, color) {
        return Err(EngineError::WrongPieceColor { square: src, color });
    }

    let mv = Move::new(src, dst);
    if !generate_moves(&game.board, color).contains(&mv) {
        return Err(EngineError::IllegalMove { from: src, to: dst });
    }

    make_move(&mut game.board, mv);
    game.move_counter += 1;

    Ok(())
}
