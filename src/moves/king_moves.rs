use crate::game_state::board::Board;
use crate::game_state::coord::Coord;
use crate::game_state::piece::Piece;
use crate::moves::sliding_rays::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub fn king_moves(piece: &Piece, board: &Board, out: &mut Vec<Coord>) {
    step_targets(piece, board, &KING_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Team};

    #[test]
    fn king_in_corner_has_three_squares() {
        let mut board = Board::new();
        let c = Coord::new(7, 7);
        board.place_piece(Piece::new(PieceKind::King, Team::White, c), c);
        let mut out = Vec::new();
        king_moves(board.piece(c).expect("king"), &board, &mut out);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn king_skips_friends_and_keeps_enemies() {
        let mut board = Board::new();
        let c = Coord::new(4, 4);
        board.place_piece(Piece::new(PieceKind::King, Team::Black, c), c);
        let friend = Coord::new(4, 5);
        let enemy = Coord::new(5, 5);
        board.place_piece(Piece::new(PieceKind::Pawn, Team::Black, friend), friend);
        board.place_piece(Piece::new(PieceKind::Pawn, Team::White, enemy), enemy);

        let mut out = Vec::new();
        king_moves(board.piece(c).expect("king"), &board, &mut out);
        assert_eq!(out.len(), 7);
        assert!(!out.contains(&friend));
        assert!(out.contains(&enemy));
    }
}
