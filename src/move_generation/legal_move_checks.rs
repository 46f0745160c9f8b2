//! Check and mobility queries.
//!
//! Check detection asks every enemy piece for its possible moves. With king
//! safety enabled, generating those moves itself asks whether a king is in
//! check, which would recurse without end. A `CheckScope` is threaded through
//! the whole evaluation instead: while it is evaluating, any nested
//! `is_in_check_within` answers `false`. The scope belongs to one call tree,
//! so independent evaluations never see each other's state.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Team;

/// Re-entrancy state for one check evaluation.
#[derive(Debug, Default)]
pub struct CheckScope {
    evaluating: bool,
}

impl CheckScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_evaluating(&self) -> bool {
        self.evaluating
    }

    /// Marks the scope as evaluating. Returns `false` if it already was.
    pub fn enter(&mut self) -> bool {
        !std::mem::replace(&mut self.evaluating, true)
    }

    pub fn exit(&mut self) {
        self.evaluating = false;
    }
}

/// True iff some enemy piece could move onto `team`'s king.
pub fn is_in_check(board: &Board, team: Team) -> bool {
    is_in_check_within(board, team, &mut CheckScope::new())
}

pub fn is_in_check_within(board: &Board, team: Team, scope: &mut CheckScope) -> bool {
    // A team whose king has been captured cannot be in check.
    let Some(king) = board.king_location(team) else {
        return false;
    };
    if !scope.enter() {
        return false;
    }
    let attacked = board
        .pieces()
        .filter(|p| p.team() != team)
        .any(|p| p.possible_moves_within(board, scope).contains(&king));
    scope.exit();
    attacked
}

/// True iff at least one piece of `team` has somewhere to go.
pub fn can_make_move(board: &Board, team: Team) -> bool {
    board
        .pieces()
        .filter(|p| p.team() == team)
        .any(|p| !p.possible_moves(board).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::coord::Coord;
    use crate::game_state::piece::Piece;
    use crate::game_state::rule_set::RuleSet;

    fn place(board: &mut Board, kind: PieceKind, team: Team, x: i8, y: i8) {
        let c = Coord::new(x, y);
        board.place_piece(Piece::new(kind, team, c), c);
    }

    fn rook_check(rules: RuleSet) -> Board {
        let mut board = Board::with_rules(rules);
        place(&mut board, PieceKind::King, Team::Black, 4, 0);
        place(&mut board, PieceKind::King, Team::White, 0, 7);
        place(&mut board, PieceKind::Rook, Team::White, 4, 5);
        board
    }

    #[test]
    fn starting_position_has_no_check_and_both_sides_can_move() {
        let board = Board::new_game(RuleSet::classic());
        for team in [Team::White, Team::Black] {
            assert!(!board.is_in_check(team));
            assert!(board.can_make_move(team));
        }
    }

    #[test]
    fn rook_with_clear_line_gives_check() {
        let mut board = rook_check(RuleSet::classic());
        assert!(board.is_in_check(Team::Black));
        assert!(!board.is_in_check(Team::White));

        place(&mut board, PieceKind::Pawn, Team::Black, 4, 3);
        assert!(!board.is_in_check(Team::Black));
    }

    #[test]
    fn check_matches_enemy_possible_moves() {
        let board = rook_check(RuleSet::classic());
        let king = board.king_location(Team::Black).expect("black king");
        let attacked = board
            .pieces()
            .filter(|p| p.team() == Team::White)
            .any(|p| p.possible_moves(&board).contains(&king));
        assert_eq!(board.is_in_check(Team::Black), attacked);
    }

    #[test]
    fn nested_evaluation_answers_false() {
        let board = rook_check(RuleSet::classic());
        let mut scope = CheckScope::new();
        assert!(scope.enter());
        assert!(!is_in_check_within(&board, Team::Black, &mut scope));
        assert!(scope.is_evaluating());
        scope.exit();
        assert!(is_in_check_within(&board, Team::Black, &mut scope));
        assert!(!scope.is_evaluating());
    }

    #[test]
    fn king_safety_check_detection_terminates() {
        let board = rook_check(RuleSet::strict());
        assert!(board.is_in_check(Team::Black));
        assert!(!board.is_in_check(Team::White));
        // The black king must step off the file.
        assert!(board.can_make_move(Team::Black));
        let king = board.piece(Coord::new(4, 0)).expect("black king");
        assert!(!king.possible_moves(&board).contains(&Coord::new(4, 1)));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let mut board = rook_check(RuleSet::classic());
        board.maybe_remove_piece(Coord::new(4, 0));
        assert!(!board.is_in_check(Team::Black));
    }

    #[test]
    fn boxed_in_team_cannot_move() {
        let mut board = Board::new();
        place(&mut board, PieceKind::King, Team::Black, 0, 0);
        place(&mut board, PieceKind::Rook, Team::Black, 1, 0);
        place(&mut board, PieceKind::Rook, Team::Black, 0, 1);
        place(&mut board, PieceKind::Rook, Team::Black, 1, 1);
        assert!(board.can_make_move(Team::Black));

        let mut board = Board::new();
        place(&mut board, PieceKind::Pawn, Team::Black, 0, 3);
        place(&mut board, PieceKind::Pawn, Team::White, 0, 4);
        assert!(!board.can_make_move(Team::Black));
        assert!(!board.can_make_move(Team::White));
        let pawn = board.piece(Coord::new(0, 3)).expect("pawn");
        assert!(pawn.possible_moves(&board).is_empty());
    }
}
