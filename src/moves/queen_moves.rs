use crate::game_state::board::Board;
use crate::game_state::coord::Coord;
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

pub fn queen_moves(piece: &Piece, board: &Board, out: &mut Vec<Coord>) {
    rook_moves(piece, board, out);
    bishop_moves(piece, board, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Team};

    #[test]
    fn queen_from_d4_sees_twenty_seven_squares() {
        let mut board = Board::new();
        let c = Coord::from_algebraic("d4").expect("d4");
        board.place_piece(Piece::new(PieceKind::Queen, Team::White, c), c);
        let mut out = Vec::new();
        queen_moves(board.piece(c).expect("queen"), &board, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn queen_diagonal_blockers() {
        let mut board = Board::new();
        let c = Coord::new(3, 3);
        board.place_piece(Piece::new(PieceKind::Queen, Team::White, c), c);
        let friend = Coord::new(5, 5);
        let enemy = Coord::new(1, 1);
        board.place_piece(Piece::new(PieceKind::Pawn, Team::White, friend), friend);
        board.place_piece(Piece::new(PieceKind::Pawn, Team::Black, enemy), enemy);

        let mut out = Vec::new();
        queen_moves(board.piece(c).expect("queen"), &board, &mut out);
        assert!(out.contains(&Coord::new(4, 4)));
        assert!(!out.contains(&friend));
        assert!(!out.contains(&Coord::new(6, 6)));
        assert!(out.contains(&Coord::new(2, 2)));
        assert!(out.contains(&enemy));
        assert!(!out.contains(&Coord::new(0, 0)));
    }
}
