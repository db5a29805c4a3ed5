//! Errors used throughout the rules engine.
//!
//! Pure queries (move generation, check detection, terminal states) never
//! fail: an empty origin yields no moves and a missing king is "not in
//! check". `RulesError` is returned only where something is committed or
//! validated at a boundary: applying moves, driving a [`GameRecord`],
//! parsing square names and validating edited boards.
//!
//! [`GameRecord`]: crate::game_state::game_record::GameRecord

use crate::game_state::chess_types::{Color, PieceKind, Position};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A move was requested from a square holding no piece.
    #[error("no piece on {0:?}")]
    EmptySquare(Position),

    /// A coordinate outside `0..8` was used for a write.
    #[error("position {0:?} is off the board")]
    OutOfBounds(Position),

    /// The move is not in the legal move set of its origin.
    #[error("illegal move from {from:?} to {to:?}")]
    IllegalMove { from: Position, to: Position },

    /// The origin piece does not belong to the side to move.
    #[error("it is {expected}'s turn")]
    NotYourTurn { expected: Color },

    /// Pawns may only become a queen, rook, bishop or knight, and only on
    /// the promotion row.
    #[error("invalid promotion piece {0:?}")]
    InvalidPromotionPiece(PieceKind),

    /// A promotion choice must be supplied before anything else happens.
    #[error("a promotion on {0:?} is waiting for a piece choice")]
    PromotionPending(Position),

    #[error("no promotion is pending")]
    NoPromotionPending,

    /// Boards must carry exactly one king per color.
    #[error("{color} has {count} kings, expected exactly one")]
    InvalidKingCount { color: Color, count: usize },

    /// Square names are a file `a..h` followed by a rank `1..8`.
    #[error("invalid square name: {0}")]
    InvalidSquareName(String),

    /// Checkmate, stalemate or insufficient material already ended the game.
    #[error("the game is over")]
    GameOver,

    /// Undo/redo/jump outside the recorded history.
    #[error("ply {ply} is outside the recorded history of {len} moves")]
    HistoryOutOfRange { ply: usize, len: usize },
}

/// Result type alias for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
