//! Crate root module declarations for the terminal chess game.
//!
//! The core (board, pieces, move generation and the turn state machine) has
//! no knowledge of the terminal. Rendering, keyboard input and game-record
//! persistence plug in at the edges through events, the `Player` trait and
//! the `SaveStrategy` trait.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod coord;
    pub mod piece;
    pub mod rule_set;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_rays;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod move_generator;
}

pub mod game {
    pub mod command;
    pub mod game;
    pub mod game_config;
    pub mod player;
    pub mod timer;
}

pub mod persistence {
    pub mod csv_strategy;
    pub mod json_strategy;
    pub mod save_strategy;
}

pub mod terminal {
    pub mod board_renderer;
    pub mod keyboard_input;
}
