use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Team};
use crate::game_state::coord::Coord;
use crate::move_generation::legal_move_checks::CheckScope;
use crate::move_generation::move_generator::{generate_moves, generate_moves_within};
use crate::moves::pawn_moves::pawn_capture_coord;

/// A chess piece: its kind, its team and the square it stands on.
///
/// The board is the only owner of pieces and the only writer of `location`,
/// so a piece reached through slot `c` always reports `location() == c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    team: Team,
    location: Coord,
}

impl Piece {
    pub fn new(kind: PieceKind, team: Team, location: Coord) -> Self {
        Self {
            kind,
            team,
            location,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub fn location(&self) -> Coord {
        self.location
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.kind.symbol(self.team)
    }

    /// Squares this piece may move to on `board`. Never mutates the board.
    pub fn possible_moves(&self, board: &Board) -> Vec<Coord> {
        generate_moves(self, board)
    }

    /// As [`Piece::possible_moves`], sharing the caller's check scope so a
    /// check evaluation in progress is not re-entered.
    pub fn possible_moves_within(&self, board: &Board, scope: &mut CheckScope) -> Vec<Coord> {
        generate_moves_within(self, board, scope)
    }

    /// The square whose occupant is removed when this piece lands on
    /// `destination`. Differs from `destination` only for en passant.
    pub fn capture_coord(&self, board: &Board, destination: Coord) -> Coord {
        match self.kind {
            PieceKind::Pawn => pawn_capture_coord(self, board, destination),
            _ => destination,
        }
    }

    pub(crate) fn update_location(&mut self, location: Coord) {
        self.location = location;
    }
}
