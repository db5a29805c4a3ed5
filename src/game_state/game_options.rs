//! Rule options a caller can set when opening a game record.

/// How two remaining bishops are judged by the insufficient-material check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BishopPairRule {
    /// Any two bishops (with both kings) are a draw, whatever their square
    /// colors. This is the long-standing behaviour of the engine.
    #[default]
    AnySquares,
    /// Two bishops are only a draw when they stand on same-colored squares.
    SameSquareColor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOptions {
    pub bishop_pair_rule: BishopPairRule,
}
