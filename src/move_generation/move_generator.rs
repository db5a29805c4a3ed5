//! Pseudo-legal move generation entry points.
//!
//! `pseudo_legal_moves` dispatches to the per-piece generators in
//! `crate::moves`. The `MoveGenerator` trait lets perft and the property
//! tests swap between pseudo-legal and legal generation.

use crate::game_state::chess_types::{Board, Color, PieceKind, Position};
use crate::move_generation::legal_move_apply::describe_move;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Destinations reachable from `from` by movement pattern alone, ignoring
/// whether the mover's own king is left in check.
///
/// An empty origin yields no moves. `last_move` only matters for en passant.
pub fn pseudo_legal_moves(board: &Board, from: Position, last_move: Option<&ChessMove>) -> Vec<Position> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, last_move, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece, &mut out),
    }
    out
}

/// Whole-side move generation, returning candidate records.
///
/// Candidates that reach the promotion row carry `is_promotion = true` and
/// `promoted_to = None`: the piece choice is made when the move is applied.
pub trait MoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color, last_move: Option<&ChessMove>) -> Vec<ChessMove>;
}

/// Every pattern-valid move of a side, self-check included.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color, last_move: Option<&ChessMove>) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(64);
        for (from, _) in board.pieces_of(color) {
            for to in pseudo_legal_moves(board, from, last_move) {
                if let Some(candidate) = describe_move(board, from, to) {
                    out.push(candidate);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{pseudo_legal_moves, MoveGenerator, PseudoLegalMoveGenerator};
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Position};

    #[test]
    fn empty_origin_has_no_moves() {
        assert!(pseudo_legal_moves(&Board::initial(), Position::new(4, 4), None).is_empty());
    }

    #[test]
    fn start_position_has_twenty_pseudo_legal_moves() {
        let moves = PseudoLegalMoveGenerator.generate_moves(&Board::initial(), Color::White, None);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn destinations_stay_on_the_board() {
        let mut board = Board::initial();
        for (pos, kind) in [
            (Position::new(4, 0), PieceKind::Queen),
            (Position::new(3, 7), PieceKind::Knight),
            (Position::new(4, 7), PieceKind::King),
        ] {
            board = board
                .with_piece(pos, Piece::new(kind, Color::White))
                .expect("squares are on the board");
        }
        for (from, _) in board.pieces() {
            for to in pseudo_legal_moves(&board, from, None) {
                assert!(to.is_valid(), "{from:?} produced {to:?}");
            }
        }
    }

    #[test]
    fn pseudo_legal_king_castles_even_under_attack() {
        let board = Board::empty()
            .with_piece(Position::new(7, 4), Piece::new(PieceKind::King, Color::White))
            .and_then(|b| b.with_piece(Position::new(7, 7), Piece::new(PieceKind::Rook, Color::White)))
            .and_then(|b| b.with_piece(Position::new(0, 5), Piece::new(PieceKind::Rook, Color::Black)))
            .expect("squares are on the board");
        let moves = pseudo_legal_moves(&board, Position::new(7, 4), None);
        assert!(moves.contains(&Position::new(7, 6)));
    }
}
