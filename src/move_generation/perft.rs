//! Perft node counting over the rules engine.
//!
//! Walks the legal move tree to a fixed depth and tallies leaf moves by
//! type. Promotions count once per piece choice, matching the published
//! perft tables.

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::legal_move_apply::{apply_move, AppliedMove, MoveOutcome};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side_to_move: Color,
    last_move: Option<&ChessMove>,
    depth: u8,
) -> RulesResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for candidate in generator.generate_moves(board, side_to_move, last_move) {
        for applied in expand(board, &candidate)? {
            if depth == 1 {
                total.merge(leaf_counts(&applied, side_to_move.opposite()));
            } else {
                total.merge(perft(
                    generator,
                    &applied.board,
                    side_to_move.opposite(),
                    Some(&applied.record),
                    depth - 1,
                )?);
            }
        }
    }

    Ok(total)
}

/// Node counts per root move, for tracking down perft mismatches.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    side_to_move: Color,
    last_move: Option<&ChessMove>,
    depth: u8,
) -> RulesResult<Vec<(ChessMove, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for candidate in generator.generate_moves(board, side_to_move, last_move) {
        for applied in expand(board, &candidate)? {
            let counts = perft(
                generator,
                &applied.board,
                side_to_move.opposite(),
                Some(&applied.record),
                depth - 1,
            )?;
            out.push((applied.record, counts.nodes));
        }
    }
    Ok(out)
}

fn expand(board: &Board, candidate: &ChessMove) -> RulesResult<Vec<AppliedMove>> {
    match apply_move(board, candidate.from, candidate.to, None)? {
        MoveOutcome::Applied(applied) => Ok(vec![applied]),
        MoveOutcome::PendingPromotion(_) => PROMOTION_CHOICES
            .iter()
            .map(|kind| match apply_move(board, candidate.from, candidate.to, Some(*kind))? {
                MoveOutcome::Applied(applied) => Ok(applied),
                MoveOutcome::PendingPromotion(pending) => {
                    Err(RulesError::PromotionPending(pending.square()))
                }
            })
            .collect(),
    }
}

fn leaf_counts(applied: &AppliedMove, opponent: Color) -> PerftCounts {
    let record = &applied.record;
    PerftCounts {
        nodes: 1,
        captures: usize::from(record.is_capture()),
        en_passant: usize::from(record.is_en_passant),
        castles: usize::from(record.is_castling),
        promotions: usize::from(record.is_promotion),
        checks: usize::from(is_in_check(&applied.board, opponent)),
    }
}
