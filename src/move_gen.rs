//! Move generation for checkers men
//!
//! Generates the legal moves of one side under the simplified rules: men
//! advance one square along their two forward diagonals, or jump two squares
//! over an adjacent enemy man onto an empty landing square. Captures are
//! never mandatory and jumps do not chain.
//!
//! Origins are scanned in row-major order and each origin tries its left
//! diagonal before its right one, step before jump. The search tie-break
//! prefers earlier-enumerated moves, so this order is part of the engine's
//! observable behavior and must stay stable.

use super::board::*;
use super::constants::*;
use super::types::*;

/// Forward diagonals for a man of the given color, in enumeration order.
#[inline]
fn man_dirs(color: Color) -> &'static [i32; 2] {
    if color > 0 {
        &OPPONENT_MAN_DIRS
    } else {
        &PLAYER_MAN_DIRS
    }
}

/// Generate all legal moves for a color.
///
/// Returns an empty vector when the side has no legal moves, which is the
/// terminal condition for that side. Pure; the board is not modified.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);

    for square in POS_RANGE_US {
        if !piece_belongs_to(board[square], color) {
            continue;
        }
        generate_man_moves(board, square as i8, color, &mut moves);
    }

    moves
}

fn generate_man_moves(board: &Board, from: i8, color: Color, moves: &mut Vec<Move>) {
    let (from_col, _) = pos_to_square(from);

    for &dir in man_dirs(color) {
        let step = from as i32 + dir;
        if is_valid_pos(step) {
            let (step_col, _) = pos_to_square(step as i8);
            // File-delta check rejects moves that wrap around the board edge
            if (step_col - from_col).abs() == 1 && board[step as usize] == VOID_ID {
                moves.push(Move::new(from, step as i8));
            }
        }

        // The jump in the same direction is emitted independently of the
        // step; nothing short-circuits between the two.
        let landing = from as i32 + 2 * dir;
        if is_valid_pos(landing) {
            let (landing_col, _) = pos_to_square(landing as i8);
            if (landing_col - from_col).abs() == 2 {
                // The jumped square sits between from and landing, so it is
                // in range whenever the landing square is.
                let over = board[(from as i32 + dir) as usize];
                if over != VOID_ID
                    && !piece_belongs_to(over, color)
                    && board[landing as usize] == VOID_ID
                {
                    moves.push(Move::new(from, landing as i8));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_move_counts() {
        let board = init_board();

        let player = generate_moves(&board, COLOR_PLAYER);
        let opponent = generate_moves(&board, COLOR_OPPONENT);

        // Only the front rank can move; the man on the edge file has a
        // single diagonal.
        assert_eq!(player.len(), 7, "Player should have 7 opening moves");
        assert_eq!(opponent.len(), 7, "Opponent should have 7 opening moves");

        for mv in player.iter().chain(opponent.iter()) {
            assert!(!mv.is_jump(), "No captures exist in the opening");
        }
    }

    #[test]
    fn test_no_moves_for_wiped_out_side() {
        let mut board: Board = [VOID_ID; 64];
        board[square_to_pos(3, 2) as usize] = PLAYER_MAN;

        assert!(generate_moves(&board, COLOR_OPPONENT).is_empty());
        assert_eq!(generate_moves(&board, COLOR_PLAYER).len(), 2);
    }

    #[test]
    fn test_edge_file_man_has_single_diagonal() {
        let mut board: Board = [VOID_ID; 64];
        board[square_to_pos(0, 3) as usize] = PLAYER_MAN;

        let moves = generate_moves(&board, COLOR_PLAYER);
        assert_eq!(moves.len(), 1, "Edge man must not wrap to the other file");
        assert_eq!(moves[0].dst, square_to_pos(1, 4));
    }

    #[test]
    fn test_jump_emitted_over_enemy_man() {
        let mut board: Board = [VOID_ID; 64];
        board[square_to_pos(2, 3) as usize] = PLAYER_MAN;
        board[square_to_pos(3, 4) as usize] = OPPONENT_MAN;

        let moves = generate_moves(&board, COLOR_PLAYER);

        // Left diagonal is a plain step, right diagonal is blocked by the
        // enemy man and yields the jump instead.
        assert_eq!(
            moves,
            vec![
                Move::new(square_to_pos(2, 3), square_to_pos(1, 4)),
                Move::new(square_to_pos(2, 3), square_to_pos(4, 5)),
            ]
        );
        assert!(moves[1].is_jump());
        assert_eq!(moves[1].jumped(), square_to_pos(3, 4));
    }

    #[test]
    fn test_jump_blocked_by_occupied_landing() {
        let mut board: Board = [VOID_ID; 64];
        board[square_to_pos(2, 3) as usize] = PLAYER_MAN;
        board[square_to_pos(3, 4) as usize] = OPPONENT_MAN;
        board[square_to_pos(4, 5) as usize] = OPPONENT_MAN;

        let moves = generate_moves(&board, COLOR_PLAYER);
        assert_eq!(moves.len(), 1);
        assert!(!moves[0].is_jump(), "Only the left step should remain");
    }

    #[test]
    fn test_own_man_is_never_jumped() {
        let mut board: Board = [VOID_ID; 64];
        board[square_to_pos(2, 3) as usize] = PLAYER_MAN;
        board[square_to_pos(3, 4) as usize] = PLAYER_MAN;

        let moves = generate_moves(&board, COLOR_PLAYER);
        assert!(
            moves.iter().all(|m| !m.is_jump()),
            "A man must not jump over a friendly man"
        );
    }

    #[test]
    fn test_backward_moves_are_never_generated() {
        let mut board: Board = [VOID_ID; 64];
        board[square_to_pos(3, 4) as usize] = PLAYER_MAN;
        board[square_to_pos(4, 3) as usize] = OPPONENT_MAN;

        for mv in generate_moves(&board, COLOR_PLAYER) {
            assert!(mv.dst / 8 > mv.src / 8, "Player men only advance south");
        }
        for mv in generate_moves(&board, COLOR_OPPONENT) {
            assert!(mv.dst / 8 < mv.src / 8, "Opponent men only advance north");
        }
    }
}
