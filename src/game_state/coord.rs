use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;

pub const BOARD_SIZE: i8 = 8;

/// A board position. `x` is the file (0 = a), `y` the row as drawn on screen
/// (0 = rank 8, Black's back row).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

/// Cursor directions as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn delta(self) -> Coord {
        match self {
            Direction::Up => Coord::new(0, -1),
            Direction::Down => Coord::new(0, 1),
            Direction::Left => Coord::new(-1, 0),
            Direction::Right => Coord::new(1, 0),
        }
    }
}

impl Coord {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn is_in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Adds `delta` in place, wrapping each axis around the board edge.
    /// Only the cursor moves this way; pieces never do.
    pub fn add_wrapped(&mut self, delta: Coord) {
        self.x = (self.x + delta.x).rem_euclid(BOARD_SIZE);
        self.y = (self.y + delta.y).rem_euclid(BOARD_SIZE);
    }

    /// Steps by `(dx, dy)`, failing if the result leaves the board.
    pub fn offset(&self, dx: i8, dy: i8) -> Result<Coord, ChessErrors> {
        let target = Coord::new(self.x + dx, self.y + dy);
        if target.is_in_bounds() {
            Ok(target)
        } else {
            Err(ChessErrors::TriedToMoveOutOfBounds {
                from: *self,
                dx,
                dy,
            })
        }
    }

    /// All 64 squares, row by row from the top of the screen.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }

    /// Parses a square such as `e2`.
    pub fn from_algebraic(square: &str) -> Result<Coord, ChessErrors> {
        let mut chars = square.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
        };
        let x = match file {
            'a'..='h' => file as i8 - b'a' as i8,
            _ => return Err(ChessErrors::InvalidAlgebraicChar(file)),
        };
        let y = match rank {
            '1'..='8' => BOARD_SIZE - (rank as i8 - b'0' as i8),
            _ => return Err(ChessErrors::InvalidAlgebraicChar(rank)),
        };
        Ok(Coord::new(x, y))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_bounds() {
            let file = char::from(b'a' + self.x as u8);
            let rank = BOARD_SIZE - self.y;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
