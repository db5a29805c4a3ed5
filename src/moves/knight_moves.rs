//! Knight jump destinations.

use crate::game_state::chess_types::{Board, Piece, Position};
use crate::move_generation::legal_move_shared::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn generate_knight_moves(board: &Board, from: Position, knight: Piece, out: &mut Vec<Position>) {
    step_targets(board, from, knight, &KNIGHT_OFFSETS, out);
}
