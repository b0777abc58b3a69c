//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! from the simulation, the input layer and the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! The default playfield is 20x20 cells.
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing down.
//! A fresh snake is a single segment in the middle of the grid, heading right.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 200 | Interval between steps at the start of a run |
//! | `MIN_TICK_MS` | 120 | Speed-up floor |
//! | `TICK_STEP_MS` | 5 | Interval shaved off per food eaten |
//! | `INPUT_COOLDOWN_MS` | 100 | Minimum spacing between accepted inputs |
//! | `LEVEL_BANNER_MS` | 1500 | How long a level-up stays announced |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GameAction, GRID_WIDTH, GRID_HEIGHT};
//!
//! let head = Cell::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Cell::new(11, 10));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! let action = GameAction::Steer(Direction::Left);
//! assert_ne!(action, GameAction::Pause);
//!
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use std::fmt;

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: u8 = 20;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Tick interval at the start of a run (200ms per step)
pub const BASE_TICK_MS: u32 = 200;

/// The tick interval never drops below this floor (120ms)
pub const MIN_TICK_MS: u32 = 120;

/// Interval removed after each food eaten (5ms)
pub const TICK_STEP_MS: u32 = 5;

/// Score awarded per food eaten
pub const POINTS_PER_FOOD: u32 = 1;

/// Food needed to clear the first level
pub const FOOD_PER_LEVEL: u32 = 5;

/// Food-per-level grows by one each level up to this cap
pub const FOOD_PER_LEVEL_CAP: u32 = 10;

/// Inputs arriving closer together than this are dropped (100ms)
pub const INPUT_COOLDOWN_MS: u32 = 100;

/// How long the level-up banner stays on screen (1.5s)
pub const LEVEL_BANNER_MS: u32 = 1500;

/// Minimum drag distance, in board cells, for a mouse drag to count as a swipe
pub const MIN_SWIPE_CELLS: u16 = 2;

/// Key under which the best score is persisted
pub const BEST_SCORE_KEY: &str = "snake.best_score";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(BASE_TICK_MS, 200);
        assert_eq!(MIN_TICK_MS, 120);
        assert_eq!(TICK_STEP_MS, 5);
        assert_eq!(FOOD_PER_LEVEL, 5);
        assert_eq!(FOOD_PER_LEVEL_CAP, 10);
        assert_eq!(INPUT_COOLDOWN_MS, 100);
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
    }

    #[test]
    fn cell_step_can_leave_the_grid() {
        assert_eq!(Cell::new(0, 5).step(Direction::Left), Cell::new(-1, 5));
        assert_eq!(Cell::new(3, 0).step(Direction::Up), Cell::new(3, -1));
    }
}

/// An integer grid coordinate.
///
/// Signed so that a head stepping off the left or top edge is still
/// representable and can be rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four movement directions.
///
/// Each maps to a unit vector; `y` grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)`.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Lifecycle of a single run.
///
/// `Idle -> Running <-> Paused`, `Running -> Over`, and `reset` returns to `Idle`
/// from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Over,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The head left the grid.
    Wall,
    /// The head ran into the body (the tail cell included).
    SelfCollision,
    /// The snake covers every cell; there is nowhere left to put food.
    BoardFilled,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::Wall => "wall",
            GameOverReason::SelfCollision => "self",
            GameOverReason::BoardFilled => "board_filled",
        }
    }
}

/// Player intents, normalised from keyboard, on-screen buttons and swipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new heading for the next tick
    Steer(Direction),
    /// Start a run from the ready screen (or play again after game over)
    Start,
    /// Toggle pause
    Pause,
    /// Abandon the current run and return to the ready screen
    Reset,
}

/// Core-side event emitted by a tick.
///
/// Consumed by the runner, e.g. to persist a new best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    FoodEaten {
        score: u32,
        level: u32,
        leveled_up: bool,
    },
    GameOver {
        reason: GameOverReason,
        score: u32,
        new_best: bool,
    },
}
