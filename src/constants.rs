//! Engine constants - cell values, movement directions and search parameters
//!
//! This module centralizes the constant values used throughout the engine:
//! cell identifiers for the 8x8 board, direction offsets for man movement,
//! material values for evaluation, and the search depth configuration.
//!
//! ## Board Encoding
//!
//! The board is a flat `[i8; 64]` array indexed row-major (`row * 8 + col`).
//! The sign of a cell encodes ownership:
//! - Positive values belong to the Opponent (the automated side)
//! - Negative values belong to the Player (the human side)
//! - Zero represents an empty square
//!
//! With a single piece type this reduces to three cell values: `OPPONENT_MAN`
//! (+1), `PLAYER_MAN` (-1) and `VOID_ID` (0). Men only ever stand on dark
//! squares (`(row + col)` odd) in valid play.
//!
//! ## Direction Vectors
//!
//! Movement is encoded as offsets into the flat board array:
//! - **South (S)**: +8 (one row toward the Opponent's back rank)
//! - **North (N)**: -8 (one row toward the Player's back rank)
//! - **East (O)**: +1, **West (W)**: -1
//! - **Diagonals**: combinations (NO, NW, SO, SW)
//!
//! The Player advances south (increasing row index), the Opponent north.
//! Each side has exactly two forward diagonals; their order in the
//! `*_MAN_DIRS` arrays is the enumeration order move generation uses, and the
//! search tie-break depends on it staying left-before-right.

use core::ops::Range;

pub const VOID_ID: i8 = 0;
pub const MAN_ID: i8 = 1;

pub const OPPONENT_MAN: i8 = MAN_ID;
pub const PLAYER_MAN: i8 = -MAN_ID;

pub const FORWARD: i32 = 8;
pub const SIDEWARD: i32 = 1;
pub const S: i32 = FORWARD;
pub const O: i32 = SIDEWARD;
pub const N: i32 = -S;
pub const W: i32 = -O;
pub const NO: i32 = N + O;
pub const SO: i32 = S + O;
pub const NW: i32 = N + W;
pub const SW: i32 = S + W;

/// Forward diagonals for a Player man, in enumeration order (left, right).
pub const PLAYER_MAN_DIRS: [i32; 2] = [SW, SO];
/// Forward diagonals for an Opponent man, in enumeration order (left, right).
pub const OPPONENT_MAN_DIRS: [i32; 2] = [NW, NO];

pub const INF_SCORE: i16 = 32000;
pub const MAN_VALUE: i16 = 1;

pub const COLOR_PLAYER: i64 = -1;
pub const COLOR_OPPONENT: i64 = 1;

/// Fixed search depth used for the automated side.
pub const DEFAULT_SEARCH_DEPTH: i32 = 3;

/// Standard starting layout: Player men on the dark squares of rows 0-2,
/// Opponent men on the dark squares of rows 5-7. Row 0 is the Player's back
/// rank.
pub const SETUP: [i8; 64] = [
    VOID_ID, PLAYER_MAN, VOID_ID, PLAYER_MAN, VOID_ID, PLAYER_MAN, VOID_ID, PLAYER_MAN,
    PLAYER_MAN, VOID_ID, PLAYER_MAN, VOID_ID, PLAYER_MAN, VOID_ID, PLAYER_MAN, VOID_ID,
    VOID_ID, PLAYER_MAN, VOID_ID, PLAYER_MAN, VOID_ID, PLAYER_MAN, VOID_ID, PLAYER_MAN,
    VOID_ID, VOID_ID, VOID_ID, VOID_ID, VOID_ID, VOID_ID, VOID_ID, VOID_ID,
    VOID_ID, VOID_ID, VOID_ID, VOID_ID, VOID_ID, VOID_ID, VOID_ID, VOID_ID,
    OPPONENT_MAN, VOID_ID, OPPONENT_MAN, VOID_ID, OPPONENT_MAN, VOID_ID, OPPONENT_MAN, VOID_ID,
    VOID_ID, OPPONENT_MAN, VOID_ID, OPPONENT_MAN, VOID_ID, OPPONENT_MAN, VOID_ID, OPPONENT_MAN,
    OPPONENT_MAN, VOID_ID, OPPONENT_MAN, VOID_ID, OPPONENT_MAN, VOID_ID, OPPONENT_MAN, VOID_ID,
];

pub const POS_RANGE_US: Range<usize> = 0..64;

pub const STATE_PLAYING: i32 = 0;
pub const STATE_NO_VALID_MOVE: i32 = 1;
