//! Public API for the checkers engine
//!
//! High-level functions for the presentation layer: game lifecycle, move
//! validation and execution, state queries and the automated Opponent's
//! reply. The collaborator owns the `Game` value and is responsible for
//! alternating turns; everything here is a plain synchronous call.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (do_move, is_legal_move)
//! - `state` - Game state queries and the engine reply (get_game_state, reply)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{do_move, is_legal_move};
pub use state::{get_game_state, reply};
