//! King steps and castling destinations.
//!
//! Castling is generated from the movement pattern only. Whether the king
//! is in check or crosses an attacked square is left to the legal move
//! filter.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::{Board, Piece, PieceKind, Position};
use crate::move_generation::legal_move_shared::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent squares plus castling destinations (unmoved king and rook,
/// empty path).
pub fn generate_king_moves(board: &Board, from: Position, king: Piece, out: &mut Vec<Position>) {
    step_targets(board, from, king, &KING_OFFSETS, out);

    if king.has_moved {
        return;
    }

    for rook_col in [KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL] {
        if let Some(to) = castling_destination(board, from, king, rook_col) {
            out.push(to);
        }
    }
}

fn castling_destination(board: &Board, from: Position, king: Piece, rook_col: u8) -> Option<Position> {
    let rook = board.get(Position::new(from.row, rook_col))?;
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
        return None;
    }

    let (low, high) = if rook_col > from.col {
        (from.col + 1, rook_col)
    } else {
        (rook_col + 1, from.col)
    };
    let path_clear = (low..high).all(|col| board.is_empty_at(Position::new(from.row, col)));
    if !path_clear {
        return None;
    }

    let step: i8 = if rook_col > from.col { 2 } else { -2 };
    from.offset(0, step).filter(|to| board.is_empty_at(*to))
}

/// Rook origin and destination for a castling king move, `None` when
/// `from -> to` is not a two-column king move.
pub fn castling_rook_squares(from: Position, to: Position) -> Option<(Position, Position)> {
    if from.row != to.row || from.col.abs_diff(to.col) != 2 {
        return None;
    }
    if to.col > from.col {
        Some((
            Position::new(from.row, KINGSIDE_ROOK_COL),
            Position::new(from.row, to.col - 1),
        ))
    } else {
        Some((
            Position::new(from.row, QUEENSIDE_ROOK_COL),
            Position::new(from.row, to.col + 1),
        ))
    }
}
