//! Ray tracing shared by the sliding pieces.
//!
//! A ray walks from the piece one step at a time and stops at the first
//! occupied square. That square is included when it holds an enemy piece
//! (a capture) and excluded when it holds a friendly one.

use crate::game_state::board::Board;
use crate::game_state::coord::Coord;
use crate::game_state::piece::Piece;

pub fn trace_ray(piece: &Piece, board: &Board, dx: i8, dy: i8, out: &mut Vec<Coord>) {
    let mut current = piece.location();
    while let Ok(target) = current.offset(dx, dy) {
        match board.piece(target) {
            None => out.push(target),
            Some(blocker) => {
                if blocker.team() != piece.team() {
                    out.push(target);
                }
                break;
            }
        }
        current = target;
    }
}

/// Fixed-offset targets (knight and king): in bounds and not friendly.
pub fn step_targets(piece: &Piece, board: &Board, offsets: &[(i8, i8)], out: &mut Vec<Coord>) {
    for &(dx, dy) in offsets {
        let Ok(target) = piece.location().offset(dx, dy) else {
            continue;
        };
        match board.piece(target) {
            Some(occupant) if occupant.team() == piece.team() => {}
            _ => out.push(target),
        }
    }
}
