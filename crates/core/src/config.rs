//! Game configuration and its validation.

use thiserror::Error;

use crate::types::{
    BASE_TICK_MS, FOOD_PER_LEVEL, FOOD_PER_LEVEL_CAP, GRID_HEIGHT, GRID_WIDTH, MIN_TICK_MS,
    POINTS_PER_FOOD, TICK_STEP_MS,
};

/// Smallest playable grid edge; a 1-wide grid has no room to turn.
pub const MIN_GRID_EDGE: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall { width: u8, height: u8, min: u8 },
    #[error("tick interval must be positive")]
    ZeroInterval,
    #[error("minimum tick interval {min_ms}ms exceeds the initial interval {initial_ms}ms")]
    MinIntervalAboveInitial { min_ms: u32, initial_ms: u32 },
    #[error("food per level must be positive and at most the cap ({per_level} > {cap})")]
    FoodPerLevel { per_level: u32, cap: u32 },
    #[error("cell {x},{y} lies outside the {width}x{height} grid")]
    OutOfBounds { x: i16, y: i16, width: u8, height: u8 },
    #[error("food cannot be placed on the snake")]
    FoodOnSnake,
}

/// Tunables for one game.
///
/// Defaults: 20x20 grid, 200ms ticks that
/// speed up by 5ms per food down to 120ms, levels every 5 food (+1 per level,
/// capped at 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub initial_interval_ms: u32,
    pub min_interval_ms: u32,
    pub interval_step_ms: u32,
    pub points_per_food: u32,
    pub food_per_level: u32,
    pub food_per_level_cap: u32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            initial_interval_ms: BASE_TICK_MS,
            min_interval_ms: MIN_TICK_MS,
            interval_step_ms: TICK_STEP_MS,
            points_per_food: POINTS_PER_FOOD,
            food_per_level: FOOD_PER_LEVEL,
            food_per_level_cap: FOOD_PER_LEVEL_CAP,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_grid(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting interval, pulling the floor down with it if needed.
    pub fn with_initial_interval_ms(mut self, interval_ms: u32) -> Self {
        self.initial_interval_ms = interval_ms;
        self.min_interval_ms = self.min_interval_ms.min(interval_ms);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID_EDGE || self.height < MIN_GRID_EDGE {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_GRID_EDGE,
            });
        }
        if self.initial_interval_ms == 0 || self.min_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.min_interval_ms > self.initial_interval_ms {
            return Err(ConfigError::MinIntervalAboveInitial {
                min_ms: self.min_interval_ms,
                initial_ms: self.initial_interval_ms,
            });
        }
        if self.food_per_level == 0 || self.food_per_level > self.food_per_level_cap {
            return Err(ConfigError::FoodPerLevel {
                per_level: self.food_per_level,
                cap: self.food_per_level_cap,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_grid() {
        let err = GameConfig::default().with_grid(1, 20).validate().unwrap_err();
        assert!(matches!(err, ConfigError::GridTooSmall { width: 1, .. }));
    }

    #[test]
    fn rejects_floor_above_start() {
        let config = GameConfig {
            min_interval_ms: 300,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinIntervalAboveInitial { .. })
        ));
    }

    #[test]
    fn slow_start_lowers_floor() {
        let config = GameConfig::default().with_initial_interval_ms(80);
        assert_eq!(config.min_interval_ms, 80);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_interval() {
        let config = GameConfig::default().with_initial_interval_ms(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }
}
