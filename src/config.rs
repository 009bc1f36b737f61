//! Command line configuration

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::board::Stone;
use crate::engine::Difficulty;

/// Color the human plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorArg {
    #[default]
    Black,
    White,
}

impl From<ColorArg> for Stone {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Black => Stone::Black,
            ColorArg::White => Stone::White,
        }
    }
}

/// Gomoku: five in a row against the computer
#[derive(Debug, Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// AI difficulty
    #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,

    /// Color you play (Black moves first)
    #[arg(short, long, value_enum, default_value_t = ColorArg::Black)]
    pub color: ColorArg,

    /// Shortest artificial AI "thinking" delay in milliseconds
    #[arg(long, default_value_t = 800)]
    pub think_min_ms: u64,

    /// Longest artificial AI "thinking" delay in milliseconds
    #[arg(long, default_value_t = 1800)]
    pub think_max_ms: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn into_config(self) -> GameConfig {
        let (min, max) = if self.think_min_ms <= self.think_max_ms {
            (self.think_min_ms, self.think_max_ms)
        } else {
            (self.think_max_ms, self.think_min_ms)
        };
        GameConfig {
            difficulty: self.difficulty,
            player_color: self.color.into(),
            think_min: Duration::from_millis(min),
            think_max: Duration::from_millis(max),
            log_level: self.log_level,
        }
    }
}

/// Validated startup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub player_color: Stone,
    /// Delay bounds, `think_min <= think_max`
    pub think_min: Duration,
    pub think_max: Duration,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Cli::parse_from(["gomoku"]).into_config()
    }
}
