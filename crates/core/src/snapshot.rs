use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{Cell, Direction, GameOverReason, GameStatus};

/// Read-only view of a game, handed to renderers.
///
/// `snake` is head-first. The vector is reused by
/// [`crate::GameState::snapshot_into`], so a long-lived snapshot does not
/// allocate once the snake stops growing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid_width: u8,
    pub grid_height: u8,
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub status: GameStatus,
    pub over_reason: Option<GameOverReason>,
    pub new_best: bool,
    pub score: u32,
    pub best_score: u32,
    pub level: u32,
    pub food_in_level: u32,
    pub food_per_level: u32,
    pub interval_ms: u32,
    pub episode_id: u32,
    pub ticks: u64,
    /// Level being announced after a level-up, until the banner expires.
    pub level_banner: Option<u32>,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Cheap content hash, used to skip redrawing identical frames.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid_width: 0,
            grid_height: 0,
            snake: Vec::new(),
            food: None,
            direction: Direction::Right,
            status: GameStatus::Idle,
            over_reason: None,
            new_best: false,
            score: 0,
            best_score: 0,
            level: 1,
            food_in_level: 0,
            food_per_level: 0,
            interval_ms: 0,
            episode_id: 0,
            ticks: 0,
            level_banner: None,
        }
    }
}
