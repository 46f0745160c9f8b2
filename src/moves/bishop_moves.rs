use crate::game_state::board::Board;
use crate::game_state::coord::Coord;
use crate::game_state::piece::Piece;
use crate::moves::sliding_rays::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn bishop_moves(piece: &Piece, board: &Board, out: &mut Vec<Coord>) {
    for (dx, dy) in BISHOP_DIRECTIONS {
        trace_ray(piece, board, dx, dy, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Team};

    #[test]
    fn bishop_from_corner_sees_the_long_diagonal() {
        let mut board = Board::new();
        let c = Coord::new(0, 0);
        board.place_piece(Piece::new(PieceKind::Bishop, Team::Black, c), c);
        let mut out = Vec::new();
        bishop_moves(board.piece(c).expect("bishop"), &board, &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.contains(&Coord::new(7, 7)));
    }

    #[test]
    fn blockers_stop_the_diagonal() {
        let mut board = Board::new();
        let c = Coord::new(0, 0);
        board.place_piece(Piece::new(PieceKind::Bishop, Team::Black, c), c);
        let friend = Coord::new(2, 2);
        board.place_piece(Piece::new(PieceKind::Knight, Team::Black, friend), friend);

        let mut out = Vec::new();
        bishop_moves(board.piece(c).expect("bishop"), &board, &mut out);
        assert_eq!(out, vec![Coord::new(1, 1)]);

        board.place_piece(Piece::new(PieceKind::Knight, Team::White, friend), friend);
        let mut out = Vec::new();
        bishop_moves(board.piece(c).expect("bishop"), &board, &mut out);
        assert_eq!(out, vec![Coord::new(1, 1), Coord::new(2, 2)]);
    }
}
