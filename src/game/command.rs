use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::coord::Coord;

/// One move: the piece on `source` goes to `destination`.
///
/// Commands are immutable once built; the game history is the ordered list of
/// the commands that were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    source: Coord,
    destination: Coord,
}

impl Command {
    pub const fn new(source: Coord, destination: Coord) -> Self {
        Self {
            source,
            destination,
        }
    }

    #[inline]
    pub fn source(&self) -> Coord {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Coord {
        self.destination
    }

    /// Parses long algebraic notation such as `e2e4`.
    pub fn from_long_algebraic(text: &str) -> Result<Self, ChessErrors> {
        let text = text.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
        }
        let source = Coord::from_algebraic(&text[0..2])?;
        let destination = Coord::from_algebraic(&text[2..4])?;
        Ok(Self::new(source, destination))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_algebraic() -> Result<(), ChessErrors> {
        let command = Command::from_long_algebraic("e2e4")?;
        assert_eq!(command.source(), Coord::new(4, 6));
        assert_eq!(command.destination(), Coord::new(4, 4));
        assert_eq!(command.to_string(), "e2e4");
        Ok(())
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!(matches!(
            Command::from_long_algebraic("e2e"),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
        assert!(matches!(
            Command::from_long_algebraic("e2e9"),
            Err(ChessErrors::InvalidAlgebraicChar('9'))
        ));
        assert!(Command::from_long_algebraic("é2e4").is_err());
    }
}
