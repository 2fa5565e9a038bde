//! Core data structures for the checkers engine
//!
//! The board is a compact `[i8; 64]` value type. Search never mutates a live
//! board: every explored branch works on its own stack copy, which is what
//! makes the recursion safe without any shared state. The `Game` struct is
//! the handle the presentation layer owns; the engine itself keeps no
//! process-wide mutable state.

pub type Position = i8;
pub type Color = i64;
pub type Board = [i8; 64];

/// A candidate move: source and destination square as flat 0-63 indices.
///
/// A simple step spans one diagonal square, a capture jump spans two with an
/// opponent man on the square in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub src: i8,
    pub dst: i8,
}

impl Move {
    pub fn new(src: i8, dst: i8) -> Self {
        Move { src, dst }
    }

    /// True if this move is a capture jump (row delta magnitude 2).
    #[inline]
    pub fn is_jump(&self) -> bool {
        (self.src / 8 - self.dst / 8).abs() == 2
    }

    /// The square jumped over by a capture. Meaningless for a simple step.
    #[inline]
    pub fn jumped(&self) -> i8 {
        (self.src + self.dst) / 2
    }
}

/// Central game state handle
///
/// Combines the current position with the per-instance search configuration
/// and the statistics of the most recent search. The presentation layer owns
/// one of these and passes it into the api functions; search itself operates
/// on copies of `board` only.
#[derive(Clone)]
pub struct Game {
    pub board: Board,
    pub move_counter: i32,
    pub search_depth: i32,
    pub nodes: i64,
}
