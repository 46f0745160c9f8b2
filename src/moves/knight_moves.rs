use crate::game_state::board::Board;
use crate::game_state::coord::Coord;
use crate::game_state::piece::Piece;
use crate::moves::sliding_rays::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn knight_moves(piece: &Piece, board: &Board, out: &mut Vec<Coord>) {
    step_targets(piece, board, &KNIGHT_OFFSETS, out);
}
