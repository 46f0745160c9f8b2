//! Command-line configuration for a terminal game.

use std::path::PathBuf;
use std::time::Duration;

use crate::chess_errors::ChessErrors;
use crate::game_state::rule_set::RuleSet;
use crate::persistence::save_strategy::SaveFormat;

pub const USAGE: &str = "\
usage: tty_chess [options]
  --time <secs>       starting clock for each player (default 600)
  --tick-ms <ms>      length of one game-loop tick (default 100)
  --format csv|json   game record format (default json)
  --out <path>        game record path (default game_record.<format>)
  --king-safety       forbid moves that leave your own king in check
  --en-passant        allow en passant captures
  --random-sides      pick who plays White at random
  --seed <n>          seed for --random-sides";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub timer_start: Duration,
    pub tick: Duration,
    pub save_format: SaveFormat,
    pub save_path: Option<PathBuf>,
    pub rules: RuleSet,
    pub random_sides: bool,
    pub seed: Option<u64>,
    pub show_help: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timer_start: Duration::from_secs(600),
            tick: Duration::from_millis(100),
            save_format: SaveFormat::default(),
            save_path: None,
            rules: RuleSet::classic(),
            random_sides: false,
            seed: None,
            show_help: false,
        }
    }
}

impl GameConfig {
    /// Parses flags, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ChessErrors>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = GameConfig::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--time" => {
                    config.timer_start = Duration::from_secs(parse_value(&flag, args.next())?)
                }
                "--tick-ms" => {
                    let millis: u64 = parse_value(&flag, args.next())?;
                    if millis == 0 {
                        return Err(ChessErrors::InvalidConfigArgument(
                            "--tick-ms must be positive".to_owned(),
                        ));
                    }
                    config.tick = Duration::from_millis(millis);
                }
                "--format" => {
                    let value = require_value(&flag, args.next())?;
                    config.save_format = SaveFormat::parse(&value)?;
                }
                "--out" => config.save_path = Some(PathBuf::from(require_value(&flag, args.next())?)),
                "--king-safety" => config.rules.king_safety = true,
                "--en-passant" => config.rules.en_passant = true,
                "--random-sides" => config.random_sides = true,
                "--seed" => config.seed = Some(parse_value(&flag, args.next())?),
                "-h" | "--help" => config.show_help = true,
                other => {
                    return Err(ChessErrors::InvalidConfigArgument(format!(
                        "unknown flag \"{other}\""
                    )))
                }
            }
        }
        Ok(config)
    }

    pub fn resolved_save_path(&self) -> PathBuf {
        self.save_path.clone().unwrap_or_else(|| {
            PathBuf::from(format!("game_record.{}", self.save_format.extension()))
        })
    }
}

fn require_value(flag: &str, value: Option<String>) -> Result<String, ChessErrors> {
    value.ok_or_else(|| ChessErrors::InvalidConfigArgument(format!("{flag} needs a value")))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ChessErrors> {
    let value = require_value(flag, value)?;
    value.parse().map_err(|_| {
        ChessErrors::InvalidConfigArgument(format!("{flag}: cannot parse \"{value}\""))
    })
}
