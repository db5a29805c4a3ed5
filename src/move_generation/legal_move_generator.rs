//! Legal move filtering.
//!
//! Takes pseudo-legal destinations and drops every move that would leave
//! the mover's king in check. Castling additionally requires that the king
//! is not in check and does not pass through an attacked square.

use crate::game_state::chess_types::{Board, Color, PieceKind, Position};
use crate::move_generation::legal_move_apply::{describe_move, simulate_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::{pseudo_legal_moves, MoveGenerator};
use crate::moves::chess_move::ChessMove;

/// Whether `from -> to` is legal on `board`. An empty origin is never legal.
pub fn is_legal_move(board: &Board, from: Position, to: Position, last_move: Option<&ChessMove>) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };

    if !pseudo_legal_moves(board, from, last_move).contains(&to) {
        return false;
    }

    if piece.kind == PieceKind::King && from.col.abs_diff(to.col) == 2 {
        if is_in_check(board, piece.color) {
            return false;
        }

        let middle_col = if to.col > from.col { from.col + 1 } else { from.col - 1 };
        let middle = Position::new(from.row, middle_col);
        if is_in_check(&simulate_move(board, from, middle), piece.color) {
            return false;
        }
    }

    !is_in_check(&simulate_move(board, from, to), piece.color)
}

/// Legal destinations from `from`, in pseudo-legal generation order.
pub fn legal_moves(board: &Board, from: Position, last_move: Option<&ChessMove>) -> Vec<Position> {
    pseudo_legal_moves(board, from, last_move)
        .into_iter()
        .filter(|to| is_legal_move(board, from, *to, last_move))
        .collect()
}

/// Every legal move of `color` as candidate records.
pub fn all_legal_moves(board: &Board, color: Color, last_move: Option<&ChessMove>) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        for to in legal_moves(board, from, last_move) {
            if let Some(candidate) = describe_move(board, from, to) {
                out.push(candidate);
            }
        }
    }
    out
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(board: &Board, color: Color, last_move: Option<&ChessMove>) -> bool {
    board.pieces_of(color).any(|(from, _)| {
        pseudo_legal_moves(board, from, last_move)
            .into_iter()
            .any(|to| is_legal_move(board, from, to, last_move))
    })
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, color: Color, last_move: Option<&ChessMove>) -> Vec<ChessMove> {
        all_legal_moves(board, color, last_move)
    }
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, has_any_legal_move, is_legal_move, legal_moves};
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Position};
    use crate::move_generation::legal_move_apply::simulate_move;
    use crate::move_generation::legal_move_checks::is_in_check;
    use crate::move_generation::move_generator::pseudo_legal_moves;
    use crate::moves::chess_move::ChessMove;

    fn board_with(pieces: &[(Position, Piece)]) -> Board {
        pieces
            .iter()
            .try_fold(Board::empty(), |board, (pos, piece)| board.with_piece(*pos, *piece))
            .expect("squares are on the board")
    }

    fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::Black)
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        assert_eq!(all_legal_moves(&Board::initial(), Color::White, None).len(), 20);
        assert_eq!(all_legal_moves(&Board::initial(), Color::Black, None).len(), 20);
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        let board = board_with(&[
            (Position::new(7, 4), white(PieceKind::King)),
            (Position::new(5, 4), white(PieceKind::Rook)),
            (Position::new(0, 4), black(PieceKind::Rook)),
            (Position::new(0, 0), black(PieceKind::King)),
        ]);
        let moves = legal_moves(&board, Position::new(5, 4), None);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|to| to.col == 4));
        assert!(moves.contains(&Position::new(0, 4)));
    }

    #[test]
    fn king_cannot_step_into_check() {
        let board = board_with(&[
            (Position::new(7, 4), white(PieceKind::King)),
            (Position::new(0, 3), black(PieceKind::Rook)),
        ]);
        assert!(!is_legal_move(&board, Position::new(7, 4), Position::new(7, 3), None));
        assert!(is_legal_move(&board, Position::new(7, 4), Position::new(7, 5), None));
    }

    #[test]
    fn castling_is_refused_out_of_through_and_into_check() {
        let king = Position::new(7, 4);
        let kingside = Position::new(7, 6);
        let base = [
            (king, white(PieceKind::King)),
            (Position::new(7, 7), white(PieceKind::Rook)),
        ];
        assert!(is_legal_move(&board_with(&base), king, kingside, None));

        for attacker_col in [4u8, 5, 6] {
            let mut pieces = base.to_vec();
            pieces.push((Position::new(0, attacker_col), black(PieceKind::Rook)));
            let board = board_with(&pieces);
            assert!(
                !legal_moves(&board, king, None).contains(&kingside),
                "castling allowed with rook on column {attacker_col}"
            );
        }
    }

    #[test]
    fn castling_queenside_only_needs_the_king_path_safe() {
        let king = Position::new(7, 4);
        let queenside = Position::new(7, 2);
        let base = [
            (king, white(PieceKind::King)),
            (Position::new(7, 0), white(PieceKind::Rook)),
        ];
        assert!(is_legal_move(&board_with(&base), king, queenside, None));

        // b1 is crossed by the rook only, c1 and d1 by the king.
        for (attacker_col, allowed) in [(1u8, true), (2, false), (3, false)] {
            let mut pieces = base.to_vec();
            pieces.push((Position::new(2, attacker_col), black(PieceKind::Rook)));
            let board = board_with(&pieces);
            assert!(pseudo_legal_moves(&board, king, None).contains(&queenside));
            assert_eq!(
                legal_moves(&board, king, None).contains(&queenside),
                allowed,
                "queenside castling with rook on column {attacker_col}"
            );
        }
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        // White king and black rook share row 3 with both pawns in between.
        let board = board_with(&[
            (Position::new(3, 0), white(PieceKind::King)),
            (Position::new(3, 4), white(PieceKind::Pawn).moved()),
            (Position::new(3, 3), black(PieceKind::Pawn).moved()),
            (Position::new(3, 7), black(PieceKind::Rook)),
        ]);
        let last = ChessMove::quiet(Position::new(1, 3), Position::new(3, 3), black(PieceKind::Pawn));
        let capture = Position::new(2, 3);
        assert!(pseudo_legal_moves(&board, Position::new(3, 4), Some(&last)).contains(&capture));
        assert!(!is_legal_move(&board, Position::new(3, 4), capture, Some(&last)));
    }

    #[test]
    fn legal_moves_never_leave_the_king_in_check() {
        let board = board_with(&[
            (Position::new(7, 4), white(PieceKind::King)),
            (Position::new(6, 3), white(PieceKind::Bishop)),
            (Position::new(4, 1), black(PieceKind::Queen)),
            (Position::new(0, 4), black(PieceKind::King)),
        ]);
        for (from, _) in board.pieces_of(Color::White) {
            let pseudo = pseudo_legal_moves(&board, from, None);
            for to in legal_moves(&board, from, None) {
                assert!(pseudo.contains(&to));
                assert!(!is_in_check(&simulate_move(&board, from, to), Color::White));
            }
        }
        assert!(has_any_legal_move(&board, Color::White, None));
    }
}
