//! Move execution.
//!
//! Applies an already validated move to a board snapshot and produces the
//! next board plus the immutable [`ChessMove`] record. A pawn reaching the
//! last row without a chosen piece yields [`MoveOutcome::PendingPromotion`]
//! instead of a half-applied board; [`complete_promotion`] finishes it.

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Position};
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::castling_rook_squares;
use crate::moves::pawn_moves::{en_passant_victim_square, is_promotion_square};

/// A committed move: the next board and its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub record: ChessMove,
}

/// A promotion waiting for the caller's piece choice.
///
/// Holds the untouched board the move started from; nothing is committed
/// until [`complete_promotion`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    board_before: Board,
    from: Position,
    to: Position,
    color: Color,
}

impl PendingPromotion {
    #[inline]
    pub fn square(&self) -> Position {
        self.to
    }

    #[inline]
    pub fn from(&self) -> Position {
        self.from
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn board_before(&self) -> &Board {
        &self.board_before
    }

    /// Board to show while the choice is open: the pawn already stands on
    /// the promotion square and any captured piece is gone.
    pub fn preview(&self) -> Board {
        match self.board_before.get(self.from) {
            Some(pawn) => execute(&self.board_before, self.from, self.to, pawn, None).board,
            None => self.board_before,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(AppliedMove),
    PendingPromotion(PendingPromotion),
}

/// Apply `from -> to` without checking legality.
///
/// En passant, castling and promotion are detected from the move shape.
/// `promotion` must be `Some` only for a pawn reaching its last row, and
/// then only a queen, rook, bishop or knight.
pub fn apply_move(
    board: &Board,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> RulesResult<MoveOutcome> {
    let piece = board.get(from).ok_or(RulesError::EmptySquare(from))?;
    if !to.is_valid() {
        return Err(RulesError::OutOfBounds(to));
    }

    if !is_promotion_square(piece, to) {
        if let Some(kind) = promotion {
            return Err(RulesError::InvalidPromotionPiece(kind));
        }
        return Ok(MoveOutcome::Applied(execute(board, from, to, piece, None)));
    }

    match promotion {
        None => Ok(MoveOutcome::PendingPromotion(PendingPromotion {
            board_before: *board,
            from,
            to,
            color: piece.color,
        })),
        Some(kind) if kind.is_promotion_target() => {
            Ok(MoveOutcome::Applied(execute(board, from, to, piece, Some(kind))))
        }
        Some(kind) => Err(RulesError::InvalidPromotionPiece(kind)),
    }
}

/// Finish a pending promotion with the chosen piece.
pub fn complete_promotion(pending: &PendingPromotion, kind: PieceKind) -> RulesResult<AppliedMove> {
    match apply_move(&pending.board_before, pending.from, pending.to, Some(kind))? {
        MoveOutcome::Applied(applied) => Ok(applied),
        MoveOutcome::PendingPromotion(_) => Err(RulesError::InvalidPromotionPiece(kind)),
    }
}

/// Scratch copy of the board after `from -> to`, used by the legality
/// filter. Captures, en passant and the castling rook are all played out;
/// a promoting pawn simply stays a pawn.
pub fn simulate_move(board: &Board, from: Position, to: Position) -> Board {
    match board.get(from) {
        Some(piece) => execute(board, from, to, piece, None).board,
        None => *board,
    }
}

/// Candidate record for `from -> to` as it would be committed, without a
/// promotion choice. `None` for an empty origin.
pub fn describe_move(board: &Board, from: Position, to: Position) -> Option<ChessMove> {
    let piece = board.get(from)?;
    let mut record = execute(board, from, to, piece, None).record;
    record.is_promotion = is_promotion_square(piece, to);
    Some(record)
}

fn execute(
    board: &Board,
    from: Position,
    to: Position,
    piece: Piece,
    promoted_to: Option<PieceKind>,
) -> AppliedMove {
    let mut next = *board;
    let mut captured = board.get(to);
    let mut is_en_passant = false;
    let mut is_castling = false;

    // A pawn moving diagonally onto an empty square is en passant.
    if piece.kind == PieceKind::Pawn && from.col != to.col && captured.is_none() {
        is_en_passant = true;
        if let Some(victim_sq) = en_passant_victim_square(piece, to) {
            captured = next.get(victim_sq);
            next.set(victim_sq, None);
        }
    }

    if piece.kind == PieceKind::King {
        if let Some((rook_from, rook_to)) = castling_rook_squares(from, to) {
            is_castling = true;
            if let Some(rook) = next.get(rook_from) {
                next.set(rook_to, Some(rook.moved()));
                next.set(rook_from, None);
            }
        }
    }

    let placed = match promoted_to {
        Some(kind) => Piece {
            kind,
            color: piece.color,
            has_moved: true,
        },
        None => piece.moved(),
    };
    next.set(from, None);
    next.set(to, Some(placed));

    AppliedMove {
        board: next,
        record: ChessMove {
            from,
            to,
            piece,
            captured,
            is_en_passant,
            is_castling,
            is_promotion: promoted_to.is_some(),
            promoted_to,
        },
    }
}
