//! Crate root module declarations for the Plum Chess rules engine.
//!
//! The engine is stateless: every query takes a board snapshot and returns
//! a fresh value. `game_state::game_record` layers history, undo and
//! promotion handling on top of the pure functions in `move_generation`.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod captured_pieces;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_options;
    pub mod game_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod movetext;
    pub mod random_playout;
    pub mod render_game_state;
}
