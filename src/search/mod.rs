//! Fixed-depth minimax search
//!
//! The automated Opponent picks its move by exhaustive game-tree search:
//! plain minimax at a fixed depth, no pruning, no caching, no time budget.
//! Every explored branch runs on its own copy of the board, so the live
//! position handed in by the caller is never touched.
//!
//! ## Module Organization
//!
//! - `minimax` - The recursive search and the `Game`-level wrapper

mod minimax;

pub use minimax::{find_best_move, minimax};
