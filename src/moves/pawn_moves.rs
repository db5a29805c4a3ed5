//! Pawn pushes, captures and en passant.
//!
//! White pawns advance toward row 0, black pawns toward row 7.

use crate::game_state::chess_types::{Board, Piece, PieceKind, Position};
use crate::move_generation::legal_move_shared::push_unique;
use crate::moves::chess_move::ChessMove;

/// Pawn pushes, double steps from the starting row, diagonal captures and
/// en passant against an opponent double step recorded in `last_move`.
pub fn generate_pawn_moves(
    board: &Board,
    from: Position,
    pawn: Piece,
    last_move: Option<&ChessMove>,
    out: &mut Vec<Position>,
) {
    let forward = pawn.color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty_at(one_step) {
            out.push(one_step);

            if from.row == pawn.color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let Some(target) = from.offset(forward, col_delta) else {
            continue;
        };

        if let Some(victim) = board.get(target) {
            if victim.color != pawn.color {
                push_unique(out, target);
            }
        }

        if let Some(last) = last_move {
            if is_en_passant_victim(last, from, pawn, target) {
                push_unique(out, target);
            }
        }
    }
}

/// `last` is an opponent double step that landed beside `from`, on the
/// column of the diagonal `target`.
pub fn is_en_passant_victim(last: &ChessMove, from: Position, pawn: Piece, target: Position) -> bool {
    last.is_double_pawn_push()
        && last.piece.color != pawn.color
        && last.to.row == from.row
        && last.to.col == target.col
}

/// Square of the pawn removed by an en passant capture landing on `to`.
#[inline]
pub fn en_passant_victim_square(pawn: Piece, to: Position) -> Option<Position> {
    to.offset(-pawn.color.forward(), 0)
}

#[inline]
pub fn is_promotion_square(pawn: Piece, to: Position) -> bool {
    pawn.kind == PieceKind::Pawn && to.row == pawn.color.promotion_row()
}
