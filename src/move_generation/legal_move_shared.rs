//! Ray walking and single-step helpers shared by the piece generators.

use crate::game_state::chess_types::{Board, Piece, Position};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each direction until the edge, an own piece (excluded) or an enemy
/// piece (included).
pub fn trace_rays(
    board: &Board,
    from: Position,
    mover: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.get(to) {
                None => out.push(to),
                Some(target) => {
                    if target.color != mover.color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}

/// Single-step targets for knights and kings: empty or enemy-occupied.
pub fn step_targets(
    board: &Board,
    from: Position,
    mover: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color == mover.color => {}
            _ => out.push(to),
        }
    }
}

#[inline]
pub fn push_unique(out: &mut Vec<Position>, pos: Position) {
    if !out.contains(&pos) {
        out.push(pos);
    }
}
