//! Committed move records.
//!
//! A `ChessMove` is created once, when a move is applied, and is never
//! modified afterwards. The history of a game is a plain `Vec<ChessMove>`
//! that can be replayed from the starting board.

use crate::game_state::chess_types::{Piece, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    /// The piece as it stood before the move.
    pub piece: Piece,
    /// Piece removed by this move. For en passant this is the passed pawn,
    /// which did not stand on `to`.
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub is_promotion: bool,
    pub promoted_to: Option<PieceKind>,
}

impl ChessMove {
    /// Plain move record without any special flags.
    pub fn quiet(from: Position, to: Position, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            is_en_passant: false,
            is_castling: false,
            is_promotion: false,
            promoted_to: None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Pawn advance of two rows, the only move that enables en passant.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }

    /// Castling toward the h-file.
    #[inline]
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castling && self.to.col > self.from.col
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn castle_side_follows_the_king_direction() {
        let king = Piece::new(PieceKind::King, Color::Black);
        let mut short = ChessMove::quiet(Position::new(0, 4), Position::new(0, 6), king);
        let mut long = ChessMove::quiet(Position::new(0, 4), Position::new(0, 2), king);
        assert!(!short.is_kingside_castle());

        short.is_castling = true;
        long.is_castling = true;
        assert!(short.is_kingside_castle());
        assert!(!long.is_kingside_castle());
    }

    #[test]
    fn only_two_row_pawn_advances_are_double_pushes() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(ChessMove::quiet(Position::new(6, 3), Position::new(4, 3), pawn).is_double_pawn_push());
        assert!(!ChessMove::quiet(Position::new(6, 3), Position::new(5, 3), pawn).is_double_pawn_push());
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert!(!ChessMove::quiet(Position::new(6, 3), Position::new(4, 3), rook).is_double_pawn_push());
    }
}
