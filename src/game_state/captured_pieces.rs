use crate::game_state::chess_types::{Color, Piece};

/// Pieces removed from the board, grouped by the color they belonged to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// White pieces taken by black.
    pub white: Vec<Piece>,
    /// Black pieces taken by white.
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn record(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Material balance from white's point of view: value of black pieces
    /// captured minus value of white pieces captured.
    pub fn material_advantage(&self) -> i32 {
        total_value(&self.black) - total_value(&self.white)
    }
}

fn total_value(pieces: &[Piece]) -> i32 {
    pieces.iter().map(|piece| piece.kind.value() as i32).sum()
}
