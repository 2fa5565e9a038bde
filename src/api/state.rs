//! Game state queries and the engine's reply
//!
//! Functions for querying whether a side can still move and for computing
//! the automated Opponent's answer to the current position.

use crate::constants::*;
use crate::move_gen::generate_moves;
use crate::search::find_best_move;
use crate::types::*;
use tracing::debug;

/// Compute the Opponent's reply to the current position.
///
/// Runs the fixed-depth search at the game's configured depth and returns
/// the chosen move without applying it; the caller decides when to execute
/// it via [`crate::api::do_move`]. Returns `None` when the Opponent has no
/// legal move.
pub fn reply(game: &mut Game) -> Option<Move> {
    let (score, best) = find_best_move(game);
    debug!(score, nodes = game.nodes, "opponent reply computed");
    best
}

/// Get the current game state for a color
///
/// Returns [`STATE_NO_VALID_MOVE`] when the side cannot move, which under
/// these rules ends the game; [`STATE_PLAYING`] otherwise.
pub fn get_game_state(game: &Game, color: Color) -> i32 {
    if generate_moves(&game.board, color).is_empty() {
        STATE_NO_VALID_MOVE
    } else {
        STATE_PLAYING
    }
}
