//! Random self-play for diagnostics, property tests and benchmarks.
//!
//! Moves are drawn uniformly from the legal moves of the side to move and
//! promotions pick a random piece. This is not a playing strength of any
//! kind; it only exercises the rules.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::chess_errors::RulesResult;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::game_record::{GameRecord, SubmitOutcome};
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Play from `game` until the game ends or `max_plies` moves were added.
pub fn play_random_game<R: Rng + ?Sized>(mut game: GameRecord, rng: &mut R, max_plies: usize) -> RulesResult<GameRecord> {
    for _ in 0..max_plies {
        if game.status().is_over() {
            break;
        }

        let candidates = all_legal_moves(game.board(), game.side_to_move(), game.last_move());
        let Some(picked) = candidates.choose(rng) else {
            break;
        };

        if let SubmitOutcome::PromotionRequired { .. } = game.submit_move(picked.from, picked.to)? {
            let kind = PROMOTION_CHOICES.choose(rng).copied().unwrap_or(PROMOTION_CHOICES[0]);
            game.complete_promotion(kind)?;
        }
    }
    Ok(game)
}
