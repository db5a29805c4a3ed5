//! Rook destinations along ranks and files.

use crate::game_state::chess_types::{Board, Piece, Position};
use crate::move_generation::legal_move_shared::{trace_rays, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn generate_rook_moves(board: &Board, from: Position, rook: Piece, out: &mut Vec<Position>) {
    trace_rays(board, from, rook, &ORTHOGONAL_DIRECTIONS, out);
}
