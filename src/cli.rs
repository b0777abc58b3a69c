//! Command-line flags, each with a `SNAKE_*` environment fallback.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use tui_snake::core::{ConfigError, GameConfig};
use tui_snake::term::ThemeChoice;
use tui_snake::types::{BASE_TICK_MS, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "tui-snake", version, about = "Snake in the terminal")]
pub struct Args {
    /// Grid width in cells
    #[arg(long, env = "SNAKE_WIDTH", default_value_t = GRID_WIDTH)]
    pub width: u8,

    /// Grid height in cells
    #[arg(long, env = "SNAKE_HEIGHT", default_value_t = GRID_HEIGHT)]
    pub height: u8,

    /// Starting tick interval in milliseconds
    #[arg(long, env = "SNAKE_SPEED", default_value_t = BASE_TICK_MS)]
    pub speed: u32,

    /// Food placement seed (random when omitted)
    #[arg(long, env = "SNAKE_SEED")]
    pub seed: Option<u32>,

    /// Where the best score is kept
    #[arg(long, env = "SNAKE_SCORES_PATH")]
    pub scores_file: Option<PathBuf>,

    /// Write logs here (nothing is logged otherwise)
    #[arg(long, env = "SNAKE_LOG_PATH")]
    pub log_file: Option<PathBuf>,

    /// auto, morning, afternoon, evening or night
    #[arg(long, env = "SNAKE_THEME", default_value = "auto")]
    pub theme: ThemeChoice,
}

impl Args {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig::default()
            .with_grid(self.width, self.height)
            .with_initial_interval_ms(self.speed)
            .with_seed(self.seed.unwrap_or_else(clock_seed));
        config.validate()?;
        Ok(config)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
