//! Algebraic coordinates and short algebraic move notation.
//!
//! Square names use files `a..h` for columns 0..7 and ranks `8..1` for rows
//! 0..7. Move notation is the simple form shown in move lists: no check
//! suffix and no disambiguation between pieces reaching the same square.

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_types::{PieceKind, Position};
use crate::moves::chess_move::ChessMove;

#[inline]
pub fn file_char(col: u8) -> char {
    char::from(b'a' + col)
}

/// Square name such as `e4` for an on-board position.
#[inline]
pub fn position_to_square_name(pos: Position) -> String {
    format!("{}{}", file_char(pos.col), 8 - pos.row)
}

/// Parse a square name such as `e4`.
pub fn square_name_to_position(square: &str) -> RulesResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(RulesError::InvalidSquareName(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(RulesError::InvalidSquareName(square.to_owned()));
    }

    Ok(Position::new(b'8' - rank, file - b'a'))
}

/// Render a committed move, e.g. `Ne5`, `dxe5`, `exd8=Q`, `O-O`.
pub fn move_to_algebraic(mv: &ChessMove) -> String {
    if mv.is_castling {
        return if mv.is_kingside_castle() {
            "O-O".to_owned()
        } else {
            "O-O-O".to_owned()
        };
    }

    let mut out = String::with_capacity(7);
    if mv.piece.kind == PieceKind::Pawn {
        if mv.is_capture() {
            out.push(file_char(mv.from.col));
        }
    } else {
        out.push(mv.piece.kind.letter());
    }

    if mv.is_capture() {
        out.push('x');
    }
    out.push_str(&position_to_square_name(mv.to));

    if mv.is_promotion {
        if let Some(kind) = mv.promoted_to {
            out.push('=');
            out.push(kind.letter());
        }
    }

    out
}
