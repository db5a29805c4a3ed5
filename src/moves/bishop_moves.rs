//! Bishop destinations along the four diagonals.

use crate::game_state::chess_types::{Board, Piece, Position};
use crate::move_generation::legal_move_shared::{trace_rays, DIAGONAL_DIRECTIONS};

#[inline]
pub fn generate_bishop_moves(board: &Board, from: Position, bishop: Piece, out: &mut Vec<Position>) {
    trace_rays(board, from, bishop, &DIAGONAL_DIRECTIONS, out);
}
