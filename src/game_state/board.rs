//! Fixed-size 8x8 board with value semantics.
//!
//! `Board` is `Copy`: every rules function receives a snapshot and any
//! mutation happens on a fresh copy, so two boards can never alias. The
//! in-place setters are crate-private and only used on scratch copies.

use std::fmt;

use crate::chess_errors::{RulesError, RulesResult};
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with no pieces.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position, white on rows 6 and 7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                board.set(Position::new(color.back_row(), col), Some(Piece::new(*kind, color)));
                board.set(
                    Position::new(color.pawn_start_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Board holding exactly `pieces`. Later entries overwrite earlier ones
    /// on the same square.
    pub fn from_pieces<I>(pieces: I) -> RulesResult<Board>
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        pieces
            .into_iter()
            .try_fold(Self::empty(), |board, (pos, piece)| board.with_piece(pos, piece))
    }

    /// Piece on `pos`, `None` when empty or off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Copy of this board with `piece` placed on `pos`.
    pub fn with_piece(&self, pos: Position, piece: Piece) -> RulesResult<Board> {
        if !pos.is_valid() {
            return Err(RulesError::OutOfBounds(pos));
        }
        let mut next = *self;
        next.set(pos, Some(piece));
        Ok(next)
    }

    /// Copy of this board with `pos` cleared.
    pub fn without_piece(&self, pos: Position) -> RulesResult<Board> {
        if !pos.is_valid() {
            return Err(RulesError::OutOfBounds(pos));
        }
        let mut next = *self;
        next.set(pos, None);
        Ok(next)
    }

    /// Overwrite a square on a scratch copy. Off-board positions are ignored.
    #[inline]
    pub(crate) fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if let Some(square) = self
            .squares
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))
        {
            *square = piece;
        }
    }

    /// Every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Occupied squares belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in row-major order.
    pub fn king_square(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// Check the one-king-per-color invariant the check detector relies on.
    pub fn validate(&self) -> RulesResult<()> {
        for color in [Color::White, Color::Black] {
            let count = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(RulesError::InvalidKingCount { color, count });
            }
        }
        Ok(())
    }
}

/// Standard starting position.
#[inline]
pub fn create_initial_board() -> Board {
    Board::initial()
}

/// Board with no pieces, for setting up custom positions.
#[inline]
pub fn create_empty_board() -> Board {
    Board::empty()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
