//! # Checkers Engine
//!
//! A two-player checkers engine under simplified rules: men move one square
//! along their forward diagonals or capture by a single jump over an
//! adjacent enemy man. There is no king promotion, captures are never
//! mandatory and jumps do not chain. The automated Opponent selects its
//! move by exhaustive fixed-depth minimax search over board copies.
//!
//! The crate is the computational core only. A presentation layer owns a
//! [`Game`] value and drives the engine through the [`api`] module:
//!
//! ```rust
//! use checkers_engine::{do_move, new_game, reply};
//! use checkers_engine::constants::COLOR_OPPONENT;
//!
//! let mut game = new_game();
//!
//! // ... apply the human move, then let the engine answer:
//! if let Some(mv) = reply(&mut game) {
//!     do_move(&mut game, mv.src, mv.dst, COLOR_OPPONENT).unwrap();
//! }
//! ```
//!
//! Scores are from the Opponent's point of view: positive means the
//! Opponent is ahead on material.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::{do_move, get_game_state, is_legal_move, new_game, reply, reset_game};
pub use error::{EngineError, EngineResult};
pub use types::{Board, Color, Game, Move, Position};
