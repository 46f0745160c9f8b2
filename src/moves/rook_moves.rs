use crate::game_state::board::Board;
use crate::game_state::coord::Coord;
use crate::game_state::piece::Piece;
use crate::moves::sliding_rays::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_moves(piece: &Piece, board: &Board, out: &mut Vec<Coord>) {
    for (dx, dy) in ROOK_DIRECTIONS {
        trace_ray(piece, board, dx, dy, out);
    }
}
