//! Terminal-state classification: checkmate, stalemate and insufficient
//! material, plus the combined status a caller shows after each move.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind};
use crate::game_state::game_options::{BishopPairRule, GameOptions};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::moves::chess_move::ChessMove;

/// Status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl GameStatus {
    /// Checkmate, stalemate and insufficient material end the game.
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::InsufficientMaterial
        )
    }
}

pub fn is_checkmate(board: &Board, color: Color, last_move: Option<&ChessMove>) -> bool {
    is_in_check(board, color) && !has_any_legal_move(board, color, last_move)
}

pub fn is_stalemate(board: &Board, color: Color, last_move: Option<&ChessMove>) -> bool {
    !is_in_check(board, color) && !has_any_legal_move(board, color, last_move)
}

/// Insufficient material with the default bishop-pair rule: any two
/// bishops count as a draw regardless of their square colors.
#[inline]
pub fn has_insufficient_material(board: &Board) -> bool {
    has_insufficient_material_with(board, BishopPairRule::default())
}

pub fn has_insufficient_material_with(board: &Board, bishop_pair_rule: BishopPairRule) -> bool {
    let mut minors = board
        .pieces()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .take(3);

    match (minors.next(), minors.next(), minors.next()) {
        (None, _, _) => true,
        (Some((_, only)), None, _) => matches!(only.kind, PieceKind::Bishop | PieceKind::Knight),
        (Some((a_sq, a)), Some((b_sq, b)), None) => {
            if !is_bishop(a) || !is_bishop(b) {
                return false;
            }
            match bishop_pair_rule {
                BishopPairRule::AnySquares => true,
                BishopPairRule::SameSquareColor => a_sq.is_light_square() == b_sq.is_light_square(),
            }
        }
        _ => false,
    }
}

#[inline]
fn is_bishop(piece: Piece) -> bool {
    piece.kind == PieceKind::Bishop
}

/// Combined status for `color`, the side about to move.
///
/// Checked in order: checkmate, stalemate, insufficient material, check.
pub fn game_status(board: &Board, color: Color, last_move: Option<&ChessMove>, options: &GameOptions) -> GameStatus {
    let in_check = is_in_check(board, color);
    let can_move = has_any_legal_move(board, color, last_move);

    if !can_move {
        return if in_check {
            GameStatus::Checkmate {
                winner: color.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if has_insufficient_material_with(board, options.bishop_pair_rule) {
        return GameStatus::InsufficientMaterial;
    }
    if in_check {
        GameStatus::Check
    } else {
        GameStatus::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::{
        game_status, has_insufficient_material, has_insufficient_material_with, is_checkmate, is_stalemate,
        GameStatus,
    };
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Position};
    use crate::game_state::game_options::{BishopPairRule, GameOptions};

    fn board_with(pieces: &[(u8, u8, PieceKind, Color)]) -> Board {
        pieces
            .iter()
            .try_fold(Board::empty(), |board, (row, col, kind, color)| {
                board.with_piece(Position::new(*row, *col), Piece::new(*kind, *color).moved())
            })
            .expect("squares are on the board")
    }

    fn kings() -> Vec<(u8, u8, PieceKind, Color)> {
        vec![(7, 4, PieceKind::King, Color::White), (0, 4, PieceKind::King, Color::Black)]
    }

    #[test]
    fn back_rank_mate_is_checkmate_not_stalemate() {
        let board = board_with(&[
            (0, 6, PieceKind::King, Color::Black),
            (1, 5, PieceKind::Pawn, Color::Black),
            (1, 6, PieceKind::Pawn, Color::Black),
            (1, 7, PieceKind::Pawn, Color::Black),
            (0, 0, PieceKind::Rook, Color::White),
            (7, 6, PieceKind::King, Color::White),
        ]);
        assert!(is_checkmate(&board, Color::Black, None));
        assert!(!is_stalemate(&board, Color::Black, None));
        assert_eq!(
            game_status(&board, Color::Black, None, &GameOptions::default()),
            GameStatus::Checkmate { winner: Color::White }
        );
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let board = board_with(&[
            (0, 7, PieceKind::King, Color::Black),
            (2, 6, PieceKind::Queen, Color::White),
            (7, 0, PieceKind::King, Color::White),
        ]);
        assert!(is_stalemate(&board, Color::Black, None));
        assert!(!is_checkmate(&board, Color::Black, None));
        assert_eq!(
            game_status(&board, Color::Black, None, &GameOptions::default()),
            GameStatus::Stalemate
        );
    }

    #[test]
    fn start_position_is_ongoing() {
        let status = game_status(&Board::initial(), Color::White, None, &GameOptions::default());
        assert_eq!(status, GameStatus::Ongoing);
        assert!(!status.is_over());
    }

    #[test]
    fn insufficient_material_cases() {
        assert!(has_insufficient_material(&board_with(&kings())));

        let mut knight = kings();
        knight.push((4, 4, PieceKind::Knight, Color::White));
        assert!(has_insufficient_material(&board_with(&knight)));

        let mut rook = kings();
        rook.push((4, 4, PieceKind::Rook, Color::Black));
        assert!(!has_insufficient_material(&board_with(&rook)));

        let mut knights = kings();
        knights.push((4, 4, PieceKind::Knight, Color::White));
        knights.push((4, 5, PieceKind::Knight, Color::White));
        assert!(!has_insufficient_material(&board_with(&knights)));
    }

    #[test]
    fn bishop_pair_on_opposite_colors_depends_on_the_rule() {
        // c1 (7, 2) is dark, f1 (7, 5) is light.
        let mut pieces = kings();
        pieces.push((7, 2, PieceKind::Bishop, Color::White));
        pieces.push((7, 5, PieceKind::Bishop, Color::Black));
        let board = board_with(&pieces);
        assert!(has_insufficient_material(&board));
        assert!(has_insufficient_material_with(&board, BishopPairRule::AnySquares));
        assert!(!has_insufficient_material_with(&board, BishopPairRule::SameSquareColor));

        let options = GameOptions {
            bishop_pair_rule: BishopPairRule::SameSquareColor,
        };
        assert_eq!(game_status(&board, Color::White, None, &options), GameStatus::Ongoing);
    }

    #[test]
    fn bishops_on_same_colored_squares_are_always_a_draw() {
        // c1 (7, 2) and d6 (2, 3) are both dark.
        let mut pieces = kings();
        pieces.push((7, 2, PieceKind::Bishop, Color::White));
        pieces.push((2, 3, PieceKind::Bishop, Color::Black));
        let board = board_with(&pieces);
        assert!(has_insufficient_material_with(&board, BishopPairRule::SameSquareColor));
        assert_eq!(
            game_status(&board, Color::White, None, &GameOptions::default()),
            GameStatus::InsufficientMaterial
        );
    }
}
