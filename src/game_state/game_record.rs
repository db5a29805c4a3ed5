//! Caller-side game record.
//!
//! `GameRecord` owns the one mutable piece of state in a game: the move
//! history. The current board, side to move and captured pieces are always
//! derived by replaying `history[..cursor]` from the starting board, so
//! undo, redo and jumping to any ply can never drift from the recorded
//! moves. Submitting a move while the cursor sits before the tip discards
//! the abandoned future.

use tracing::{debug, trace};

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::captured_pieces::CapturedPieces;
use crate::game_state::chess_types::{Board, Color, PieceKind, Position};
use crate::game_state::game_options::GameOptions;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::{self, apply_move, AppliedMove, MoveOutcome, PendingPromotion};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{is_legal_move, legal_moves};
use crate::moves::chess_move::ChessMove;
use crate::utils::movetext::moves_to_movetext;

/// Result of submitting a move to a [`GameRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The move was committed.
    Moved(ChessMove),
    /// A pawn reached the last row. Call [`GameRecord::complete_promotion`]
    /// (or [`GameRecord::cancel_promotion`]) before anything else.
    PromotionRequired { square: Position, color: Color },
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    initial_board: Board,
    initial_side: Color,
    options: GameOptions,

    history: Vec<ChessMove>,
    cursor: usize,

    // Derived from `history[..cursor]`.
    board: Board,
    side_to_move: Color,
    captured: CapturedPieces,
    status: GameStatus,

    pending_promotion: Option<PendingPromotion>,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameRecord {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self::from_valid_position(Board::initial(), Color::White, GameOptions::default())
    }

    /// Start from an arbitrary position. The board must hold exactly one
    /// king per color.
    pub fn from_position(board: Board, side_to_move: Color) -> RulesResult<Self> {
        board.validate()?;
        Ok(Self::from_valid_position(board, side_to_move, GameOptions::default()))
    }

    /// Replace the rule options and re-evaluate the current status.
    pub fn with_options(mut self, options: GameOptions) -> Self {
        self.options = options;
        self.status = game_status(&self.board, self.side_to_move, self.last_move(), &self.options);
        self
    }

    fn from_valid_position(board: Board, side_to_move: Color, options: GameOptions) -> Self {
        let status = game_status(&board, side_to_move, None, &options);
        Self {
            initial_board: board,
            initial_side: side_to_move,
            options,
            history: Vec::new(),
            cursor: 0,
            board,
            side_to_move,
            captured: CapturedPieces::default(),
            status,
            pending_promotion: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Full recorded history, including moves after the cursor that are
    /// still available to redo.
    #[inline]
    pub fn history(&self) -> &[ChessMove] {
        &self.history
    }

    /// Number of history moves applied to the current board.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.cursor.checked_sub(1).and_then(|idx| self.history.get(idx))
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending_promotion.as_ref()
    }

    pub fn is_in_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    /// Board to display: the promotion preview while a choice is open.
    pub fn display_board(&self) -> Board {
        match &self.pending_promotion {
            Some(pending) => pending.preview(),
            None => self.board,
        }
    }

    /// Legal destinations for highlighting. Empty when `from` does not hold
    /// a piece of the side to move, the game is over or a promotion is open.
    pub fn legal_targets(&self, from: Position) -> Vec<Position> {
        if self.pending_promotion.is_some() || self.status.is_over() {
            return Vec::new();
        }
        match self.board.get(from) {
            Some(piece) if piece.color == self.side_to_move => legal_moves(&self.board, from, self.last_move()),
            _ => Vec::new(),
        }
    }

    /// Validate and play `from -> to` for the side to move.
    pub fn submit_move(&mut self, from: Position, to: Position) -> RulesResult<SubmitOutcome> {
        if let Some(pending) = &self.pending_promotion {
            return Err(RulesError::PromotionPending(pending.square()));
        }
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }

        let piece = self.board.get(from).ok_or(RulesError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(RulesError::NotYourTurn {
                expected: self.side_to_move,
            });
        }
        if !is_legal_move(&self.board, from, to, self.last_move()) {
            trace!(?from, ?to, "rejected illegal move");
            return Err(RulesError::IllegalMove { from, to });
        }

        match apply_move(&self.board, from, to, None)? {
            MoveOutcome::Applied(applied) => Ok(SubmitOutcome::Moved(self.commit(applied))),
            MoveOutcome::PendingPromotion(pending) => {
                debug!(
                    from = ?pending.from(),
                    square = ?pending.square(),
                    color = %pending.color(),
                    "promotion choice requested"
                );
                let outcome = SubmitOutcome::PromotionRequired {
                    square: pending.square(),
                    color: pending.color(),
                };
                self.pending_promotion = Some(pending);
                Ok(outcome)
            }
        }
    }

    /// Finish the open promotion. An invalid choice leaves it open.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> RulesResult<ChessMove> {
        let pending = self.pending_promotion.ok_or(RulesError::NoPromotionPending)?;
        let applied = legal_move_apply::complete_promotion(&pending, kind)?;
        self.pending_promotion = None;
        Ok(self.commit(applied))
    }

    /// Abandon the open promotion; the board is left as it was before the
    /// pawn moved. Returns whether a promotion was open.
    pub fn cancel_promotion(&mut self) -> bool {
        let was_open = self.pending_promotion.take().is_some();
        if was_open {
            debug!("promotion cancelled");
        }
        was_open
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Step back one move. Returns `false` at the start of the history.
    pub fn undo(&mut self) -> RulesResult<bool> {
        if !self.can_undo() {
            return Ok(false);
        }
        self.jump_to(self.cursor - 1)?;
        Ok(true)
    }

    /// Step forward one recorded move. Returns `false` at the tip.
    pub fn redo(&mut self) -> RulesResult<bool> {
        if !self.can_redo() {
            return Ok(false);
        }
        self.jump_to(self.cursor + 1)?;
        Ok(true)
    }

    /// Rebuild the position after the first `ply` moves of the history.
    pub fn jump_to(&mut self, ply: usize) -> RulesResult<()> {
        if ply > self.history.len() {
            return Err(RulesError::HistoryOutOfRange {
                ply,
                len: self.history.len(),
            });
        }

        let (board, captured) = replay(&self.initial_board, &self.history[..ply])?;
        self.pending_promotion = None;
        self.board = board;
        self.captured = captured;
        self.cursor = ply;
        self.side_to_move = if ply % 2 == 0 {
            self.initial_side
        } else {
            self.initial_side.opposite()
        };
        self.status = game_status(&self.board, self.side_to_move, self.last_move(), &self.options);
        debug!(ply, len = self.history.len(), status = ?self.status, "replayed history");
        Ok(())
    }

    /// Movetext of the whole recorded history, e.g. `1. e4 e5 2. Nf3`.
    pub fn movetext(&self) -> String {
        moves_to_movetext(&self.history)
    }

    fn commit(&mut self, applied: AppliedMove) -> ChessMove {
        let record = applied.record;

        self.history.truncate(self.cursor);
        self.history.push(record);
        self.cursor = self.history.len();

        self.board = applied.board;
        if let Some(piece) = record.captured {
            self.captured.record(piece);
        }
        self.side_to_move = self.side_to_move.opposite();

        let previous = self.status;
        self.status = game_status(&self.board, self.side_to_move, Some(&record), &self.options);
        debug!(
            from = ?record.from,
            to = ?record.to,
            ply = self.cursor,
            status = ?self.status,
            "move committed"
        );
        if self.status != previous && self.status.is_over() {
            debug!(status = ?self.status, "game over");
        }

        record
    }
}

/// Replay `moves` from `initial`, collecting captured pieces on the way.
fn replay(initial: &Board, moves: &[ChessMove]) -> RulesResult<(Board, CapturedPieces)> {
    let mut board = *initial;
    let mut captured = CapturedPieces::default();

    for mv in moves {
        match apply_move(&board, mv.from, mv.to, mv.promoted_to)? {
            MoveOutcome::Applied(applied) => {
                if let Some(piece) = applied.record.captured {
                    captured.record(piece);
                }
                board = applied.board;
            }
            MoveOutcome::PendingPromotion(pending) => {
                return Err(RulesError::PromotionPending(pending.square()));
            }
        }
    }

    Ok((board, captured))
}
