//! Pawn movement.
//!
//! Forward steps need an empty square; the two-square advance from the
//! starting row needs both squares empty. Diagonal steps are only legal onto
//! an enemy, or onto the en passant target when that rule is enabled.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coord::Coord;
use crate::game_state::piece::Piece;

pub fn pawn_moves(piece: &Piece, board: &Board, out: &mut Vec<Coord>) {
    let from = piece.location();
    let forward = piece.team().forward();

    if let Ok(one_step) = from.offset(0, forward) {
        if board.piece(one_step).is_none() {
            out.push(one_step);
            if from.y == piece.team().pawn_row() {
                if let Ok(two_step) = from.offset(0, 2 * forward) {
                    if board.piece(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for dx in [-1i8, 1i8] {
        let Ok(target) = from.offset(dx, forward) else {
            continue;
        };
        match board.piece(target) {
            Some(occupant) if occupant.team() != piece.team() => out.push(target),
            Some(_) => {}
            None => {
                if is_en_passant(piece, board, target) {
                    out.push(target);
                }
            }
        }
    }
}

/// The square emptied when `piece` lands on `destination`: the passed pawn's
/// square for an en passant capture, otherwise `destination`.
pub fn pawn_capture_coord(piece: &Piece, board: &Board, destination: Coord) -> Coord {
    let from = piece.location();
    if destination.x != from.x
        && board.piece(destination).is_none()
        && is_en_passant(piece, board, destination)
    {
        Coord::new(destination.x, from.y)
    } else {
        destination
    }
}

fn is_en_passant(piece: &Piece, board: &Board, target: Coord) -> bool {
    if !board.rules().en_passant || board.en_passant_target() != Some(target) {
        return false;
    }
    let passed = Coord::new(target.x, piece.location().y);
    matches!(
        board.piece(passed),
        Some(p) if p.kind() == PieceKind::Pawn && p.team() != piece.team()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Team;
    use crate::game_state::rule_set::RuleSet;

    fn moves_of(board: &Board, c: Coord) -> Vec<Coord> {
        let mut out = Vec::new();
        pawn_moves(board.piece(c).expect("pawn"), board, &mut out);
        out.sort();
        out
    }

    #[test]
    fn starting_pawn_can_advance_one_or_two() {
        let board = Board::new_game(RuleSet::classic());
        assert_eq!(
            moves_of(&board, Coord::new(4, 6)),
            vec![Coord::new(4, 4), Coord::new(4, 5)]
        );
        assert_eq!(
            moves_of(&board, Coord::new(2, 1)),
            vec![Coord::new(2, 2), Coord::new(2, 3)]
        );
    }

    #[test]
    fn forward_moves_are_blocked_by_any_piece() {
        let mut board = Board::new();
        let c = Coord::new(3, 6);
        board.place_piece(Piece::new(PieceKind::Pawn, Team::White, c), c);
        let blocker = Coord::new(3, 5);
        board.place_piece(Piece::new(PieceKind::Knight, Team::Black, blocker), blocker);
        assert!(moves_of(&board, c).is_empty());

        board.maybe_remove_piece(blocker);
        let far = Coord::new(3, 4);
        board.place_piece(Piece::new(PieceKind::Knight, Team::White, far), far);
        assert_eq!(moves_of(&board, c), vec![Coord::new(3, 5)]);
    }

    #[test]
    fn diagonals_only_capture_enemies() {
        let mut board = Board::new();
        let c = Coord::new(3, 3);
        board.place_piece(Piece::new(PieceKind::Pawn, Team::Black, c), c);
        let enemy = Coord::new(2, 4);
        let friend = Coord::new(4, 4);
        board.place_piece(Piece::new(PieceKind::Rook, Team::White, enemy), enemy);
        board.place_piece(Piece::new(PieceKind::Rook, Team::Black, friend), friend);

        assert_eq!(moves_of(&board, c), vec![enemy, Coord::new(3, 4)]);
        let pawn = board.piece(c).expect("pawn");
        assert_eq!(pawn_capture_coord(pawn, &board, enemy), enemy);
    }

    fn en_passant_position(rules: RuleSet) -> Board {
        let mut board = Board::with_rules(rules);
        let white = Coord::new(4, 3);
        let black = Coord::new(3, 3);
        board.place_piece(Piece::new(PieceKind::Pawn, Team::White, white), white);
        board.place_piece(Piece::new(PieceKind::Pawn, Team::Black, black), black);
        board.set_en_passant_target(Some(Coord::new(3, 2)));
        board
    }

    #[test]
    fn en_passant_needs_the_rule() {
        let board = en_passant_position(RuleSet::classic());
        assert_eq!(moves_of(&board, Coord::new(4, 3)), vec![Coord::new(4, 2)]);
    }

    #[test]
    fn en_passant_captures_the_passed_pawn() {
        let board = en_passant_position(RuleSet::strict());
        let target = Coord::new(3, 2);
        assert_eq!(moves_of(&board, Coord::new(4, 3)), vec![target, Coord::new(4, 2)]);

        let pawn = board.piece(Coord::new(4, 3)).expect("pawn");
        assert_eq!(pawn_capture_coord(pawn, &board, target), Coord::new(3, 3));
        assert_eq!(
            pawn_capture_coord(pawn, &board, Coord::new(4, 2)),
            Coord::new(4, 2)
        );
    }
}
