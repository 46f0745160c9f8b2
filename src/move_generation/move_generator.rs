//! Move generation entry point.
//!
//! Dispatches on the piece kind to the per-piece generators in `moves`, then
//! applies the optional king-safety filter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coord::Coord;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::{is_in_check_within, CheckScope};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub fn generate_moves(piece: &Piece, board: &Board) -> Vec<Coord> {
    generate_moves_within(piece, board, &mut CheckScope::new())
}

pub fn generate_moves_within(piece: &Piece, board: &Board, scope: &mut CheckScope) -> Vec<Coord> {
    let mut out = Vec::with_capacity(16);
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(piece, board, &mut out),
        PieceKind::Knight => knight_moves(piece, board, &mut out),
        PieceKind::Bishop => bishop_moves(piece, board, &mut out),
        PieceKind::Rook => rook_moves(piece, board, &mut out),
        PieceKind::Queen => queen_moves(piece, board, &mut out),
        PieceKind::King => king_moves(piece, board, &mut out),
    }

    // Inside a check evaluation every nested check reports `false`, so the
    // filter would keep everything anyway.
    if board.rules().king_safety && !scope.is_evaluating() {
        out.retain(|&destination| {
            let after = simulate_move(board, piece, destination);
            !is_in_check_within(&after, piece.team(), scope)
        });
    }
    out
}

/// Plays `piece` to `destination` on a scratch copy of `board`.
pub fn simulate_move(board: &Board, piece: &Piece, destination: Coord) -> Board {
    let mut after = board.scratch_copy();
    let captured = piece.capture_coord(board, destination);
    after.maybe_remove_piece(captured);
    if let Some(moving) = after.take_piece(piece.location()) {
        after.place_piece(moving, destination);
    }
    after.set_en_passant_target(None);
    after
}
