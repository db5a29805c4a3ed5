//! Move-list export in the numbered pair layout used for copying a game.

use crate::game_state::chess_types::Color;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::move_to_algebraic;

/// `"1. e4 e5 2. Nf3"`: each pair rendered as `"<n>. <white> <black> "`,
/// concatenated and trimmed. When the first move is black's (a game set up
/// with black to move) it is written as `"1... <black>"` and white's reply
/// opens move 2.
pub fn moves_to_movetext(moves: &[ChessMove]) -> String {
    let mut out = String::new();
    let mut rest = moves;
    let mut number = 1;

    if let Some(first) = moves.first().filter(|mv| mv.piece.color == Color::Black) {
        out.push_str(&format!("1... {} ", move_to_algebraic(first)));
        rest = &moves[1..];
        number = 2;
    }

    for (idx, pair) in rest.chunks(2).enumerate() {
        out.push_str(&format!("{}. ", number + idx));
        out.push_str(&move_to_algebraic(&pair[0]));
        if let Some(reply) = pair.get(1) {
            out.push(' ');
            out.push_str(&move_to_algebraic(reply));
        }
        out.push(' ');
    }
    out.trim_end().to_owned()
}
