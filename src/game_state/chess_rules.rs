//! Canonical chess-rule constants.
//!
//! Back-rank layout and rook corners used to set up the starting position
//! and to locate castling partners.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of the kingside castling rook.
pub const KINGSIDE_ROOK_COL: u8 = 7;
/// Column of the queenside castling rook.
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Promotion choices offered to the caller, strongest first.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];
