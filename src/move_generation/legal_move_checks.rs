//! Attack and check detection.

use crate::game_state::chess_types::{Board, Color, Position};
use crate::move_generation::move_generator::pseudo_legal_moves;

/// Square of `color`'s king. Boards are expected to carry exactly one king
/// per color; see [`Board::validate`].
#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Position> {
    board.king_square(color)
}

/// True when any piece of `attacker_color` has `square` among its
/// pseudo-legal destinations. En passant plays no part in attacks.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, _)| pseudo_legal_moves(board, from, None).contains(&square))
}

/// `false` when `color` has no king on the board.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}
