//! Pluggable writers for the finished game record.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::chess_errors::ChessErrors;
use crate::game::command::Command;
use crate::persistence::csv_strategy::CsvStrategy;
use crate::persistence::json_strategy::JsonStrategy;

/// Receives the complete move history once, when the game ends.
pub trait SaveStrategy {
    fn write(&mut self, moves: &[Command]) -> Result<(), ChessErrors>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveFormat {
    Csv,
    #[default]
    Json,
}

impl SaveFormat {
    pub fn parse(text: &str) -> Result<Self, ChessErrors> {
        match text.to_ascii_lowercase().as_str() {
            "csv" => Ok(SaveFormat::Csv),
            "json" => Ok(SaveFormat::Json),
            _ => Err(ChessErrors::InvalidConfigArgument(format!(
                "unknown save format \"{text}\" (expected csv or json)"
            ))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Csv => "csv",
            SaveFormat::Json => "json",
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub fn build_save_strategy(format: SaveFormat, path: &Path) -> Box<dyn SaveStrategy> {
    let path = PathBuf::from(path);
    match format {
        SaveFormat::Csv => Box::new(CsvStrategy::new(path)),
        SaveFormat::Json => Box::new(JsonStrategy::new(path)),
    }
}
