use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game::command::Command;
use crate::persistence::save_strategy::SaveStrategy;

/// On-disk shape of a JSON game record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub recorded_at: String,
    pub moves: Vec<Command>,
}

#[derive(Debug, Clone)]
pub struct JsonStrategy {
    path: PathBuf,
}

impl JsonStrategy {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn render(moves: &[Command]) -> Result<String, ChessErrors> {
        let record = GameRecord {
            recorded_at: Utc::now().to_rfc3339(),
            moves: moves.to_vec(),
        };
        Ok(serde_json::to_string_pretty(&record)?)
    }

    pub fn read(text: &str) -> Result<GameRecord, ChessErrors> {
        Ok(serde_json::from_str(text)?)
    }
}

impl SaveStrategy for JsonStrategy {
    fn write(&mut self, moves: &[Command]) -> Result<(), ChessErrors> {
        fs::write(&self.path, Self::render(moves)?)?;
        info!("wrote {} moves to {}", moves.len(), self.path.display());
        Ok(())
    }
}
