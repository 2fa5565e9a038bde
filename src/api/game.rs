//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::init_board;
use crate::constants::DEFAULT_SEARCH_DEPTH;
use crate::types::*;
use tracing::debug;

/// Create a new game with the standard starting position
pub fn new_game() -> Game {
    Game {
        board: init_board(),
        move_counter: 0,
        search_depth: DEFAULT_SEARCH_DEPTH,
        nodes: 0,
    }
}

/// Reset the game to the starting position
///
/// The configured search depth survives the reset; board, move counter and
/// search statistics are discarded.
pub fn reset_game(game: &mut Game) {
    game.board = init_board();
    game.move_counter = 0;
    game.nodes = 0;
    debug!("game reset to starting position");
}
