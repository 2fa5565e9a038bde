//! Recursive minimax over board copies
//!
//! Alternates a maximizing Opponent ply with a minimizing Player ply down to
//! a fixed depth, backing the material evaluation up the tree. Both the
//! depth-exhausted leaf and the no-legal-moves terminal return the static
//! evaluation with no move; running out of moves is not scored specially.
//!
//! Tie-break: scores are compared with strict inequality, so among equal
//! lines the earliest-enumerated move wins. Anything that reorders move
//! generation changes which move the engine picks.

use crate::board::make_move;
use crate::constants::*;
use crate::evaluation::evaluate_material;
use crate::move_gen::generate_moves;
use crate::types::*;
use tracing::debug;

/// Fixed-depth minimax search.
///
/// Returns the backed-up score and the chosen move for the side to act:
/// the Opponent when `maximizing`, the Player otherwise. The move is `None`
/// at depth 0 and when the side has no legal moves; callers must check for
/// that before applying it.
pub fn minimax(board: &Board, depth: i32, maximizing: bool) -> (i16, Option<Move>) {
    let mut nodes = 0i64;
    let (score, best) = minimax_inner(board, depth, maximizing, &mut nodes);
    debug!(depth, nodes, score, "minimax search finished");
    (score, best)
}

/// Search the game's position at its configured depth for the Opponent.
///
/// Stores the visited node count on the game for diagnostics.
pub fn find_best_move(game: &mut Game) -> (i16, Option<Move>) {
    let mut nodes = 0i64;
    let (score, best) = minimax_inner(&game.board, game.search_depth, true, &mut nodes);
    game.nodes = nodes;
    debug!(
        depth = game.search_depth,
        nodes, score, "opponent move search finished"
    );
    (score, best)
}

fn minimax_inner(
    board: &Board,
    depth: i32,
    maximizing: bool,
    nodes: &mut i64,
) -> (i16, Option<Move>) {
    *nodes += 1;

    if depth <= 0 {
        return (evaluate_material(board), None);
    }

    let color = if maximizing {
        COLOR_OPPONENT
    } else {
        COLOR_PLAYER
    };
    let moves = generate_moves(board, color);

    if moves.is_empty() {
        return (evaluate_material(board), None);
    }

    let mut best_score = if maximizing { -INF_SCORE } else { INF_SCORE };
    let mut best_move = None;

    for mv in moves {
        // Each branch explores its own copy; the caller's board and the
        // sibling branches stay untouched.
        let mut child = *board;
        make_move(&mut child, mv);

        let (score, _) = minimax_inner(&child, depth - 1, !maximizing, nodes);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        } else if score < best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_score, best_move)
}
