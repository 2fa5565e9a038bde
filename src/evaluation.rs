//! Material evaluation
//!
//! Scores a position by counting men: positive favors the Opponent (the
//! maximizing side in search), negative favors the Player. This is the
//! leaf-node value of the search and also its fallback when a side has no
//! moves left. The function is deliberately material-only; a position where
//! one side cannot move scores no better or worse than its man count says.

use super::constants::*;
use super::types::*;

/// Evaluate material balance: Opponent men minus Player men.
pub fn evaluate_material(board: &Board) -> i16 {
    let mut score = 0i16;

    for square in POS_RANGE_US {
        let piece = board[square];
        if piece != VOID_ID {
            score += if piece > 0 { MAN_VALUE } else { -MAN_VALUE };
        }
    }

    score
}
