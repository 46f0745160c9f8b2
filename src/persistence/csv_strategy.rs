use std::fs;
use std::path::PathBuf;

use log::info;

use crate::chess_errors::ChessErrors;
use crate::game::command::Command;
use crate::persistence::save_strategy::SaveStrategy;

const CSV_HEADER: &str = "ply,source_x,source_y,destination_x,destination_y,move";

/// Writes one row per ply.
#[derive(Debug, Clone)]
pub struct CsvStrategy {
    path: PathBuf,
}

impl CsvStrategy {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn render(moves: &[Command]) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for (ply, command) in moves.iter().enumerate() {
            let (s, d) = (command.source(), command.destination());
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                ply + 1,
                s.x,
                s.y,
                d.x,
                d.y,
                command
            ));
        }
        out
    }
}

impl SaveStrategy for CsvStrategy {
    fn write(&mut self, moves: &[Command]) -> Result<(), ChessErrors> {
        fs::write(&self.path, Self::render(moves))?;
        info!("wrote {} moves to {}", moves.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::coord::Coord;

    #[test]
    fn one_row_per_ply() {
        let moves = [
            Command::new(Coord::new(4, 6), Coord::new(4, 4)),
            Command::new(Coord::new(4, 1), Coord::new(4, 3)),
        ];
        let text = CsvStrategy::render(&moves);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![CSV_HEADER, "1,4,6,4,4,e2e4", "2,4,1,4,3,e7e5"]);
    }

    #[test]
    fn write_creates_the_file() -> Result<(), ChessErrors> {
        let path = std::env::temp_dir().join(format!("tty_chess_csv_{}.csv", std::process::id()));
        let mut strategy = CsvStrategy::new(path.clone());
        strategy.write(&[Command::new(Coord::new(1, 7), Coord::new(2, 5))])?;
        let written = fs::read_to_string(&path)?;
        assert!(written.ends_with("1,1,7,2,5,b1c3\n"));
        fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let mut strategy = CsvStrategy::new(PathBuf::from("/nonexistent-dir/record.csv"));
        assert!(matches!(strategy.write(&[]), Err(ChessErrors::Io(_))));
    }
}
