//! Queen destinations, the union of rook and bishop rays.

use crate::game_state::chess_types::{Board, Piece, Position};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Union of the rook and bishop rays.
#[inline]
pub fn generate_queen_moves(board: &Board, from: Position, queen: Piece, out: &mut Vec<Position>) {
    generate_rook_moves(board, from, queen, out);
    generate_bishop_moves(board, from, queen, out);
}
