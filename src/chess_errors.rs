//! Errors used throughout the chess game.
//!
//! `ChessErrors` is the single error type returned by recoverable operations:
//! parsing user input, validating commands against the current position,
//! reading configuration and writing the finished game record.
//!
//! Broken board invariants (an out-of-bounds slot access, a piece whose stored
//! location disagrees with its slot) are not represented here. Those are bugs
//! and panic at the point of detection.

use thiserror::Error;

use crate::game::command::Command;
use crate::game_state::chess_types::Team;
use crate::game_state::coord::Coord;

/// Unified error type for the chess game.
#[derive(Debug, Error)]
pub enum ChessErrors {
    /// Stepping from `from` by `(dx, dy)` would leave the board.
    #[error("stepping from {from} by ({dx}, {dy}) leaves the board")]
    TriedToMoveOutOfBounds { from: Coord, dx: i8, dy: i8 },

    /// A command referenced a square outside the board.
    #[error("square {0} is outside the board")]
    CoordOutOfBounds(Coord),

    /// A single character of an algebraic square was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square or a move.
    #[error("invalid algebraic string \"{0}\"")]
    InvalidAlgebraicString(String),

    /// The source square of a command holds no piece.
    #[error("there is no piece on {0}")]
    TryToMoveFromEmptySquare(Coord),

    /// The piece on the source square belongs to the side not on move.
    #[error("the piece on {location} belongs to {owner}, but it is {to_move}'s turn")]
    NotYourTurn {
        location: Coord,
        owner: Team,
        to_move: Team,
    },

    /// The destination is not among the moving piece's possible moves.
    #[error("{0} is not a legal move")]
    IllegalMove(Command),

    /// A command arrived after the game ended.
    #[error("the game is already over")]
    GameIsOver,

    /// A command-line argument was missing its value or could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidConfigArgument(String),

    /// Writing the game record failed.
    #[error("failed to write the game record: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising the game record failed.
    #[error("failed to serialise the game record: {0}")]
    Serialization(#[from] serde_json::Error),
}
