//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical runs
//! - **Testable**: Time is injected, so no test ever sleeps
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: bounds checking and free-cell sampling for food placement
//! - [`snake`]: head-first body with an occupancy set
//! - [`direction`]: committed heading plus one pending request
//! - [`scheduler`]: the single repeating tick timer (replace-or-cancel)
//! - [`resolver`]: the one-tick move/eat/collide transition
//! - [`game_state`]: lifecycle, levels, speed and best score
//! - [`rng`]: deterministic LCG
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in the committed direction
//! - Reversing onto the neck is impossible; such requests are dropped
//! - Leaving the grid or touching the body (tail included) ends the run
//! - Food adds a segment and a point, and shaves 5ms off the tick interval
//!   down to a 120ms floor
//! - Every few meals the level goes up and the next level needs one more meal
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState};
//! use tui_snake_types::{Direction, GameStatus};
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! game.start(0);
//! game.request_direction(Direction::Up);
//!
//! // Nothing happens until the first interval elapses.
//! assert!(game.poll(100).is_none());
//! assert!(game.poll(200).is_some());
//! assert_eq!(game.direction(), Direction::Up);
//! assert_eq!(game.status(), GameStatus::Running);
//! ```

pub mod config;
pub mod direction;
pub mod game_state;
pub mod grid;
pub mod resolver;
pub mod rng;
pub mod scheduler;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use direction::DirectionBuffer;
pub use game_state::GameState;
pub use grid::Grid;
pub use resolver::{Resolver, Step, StepOutcome};
pub use rng::SimpleRng;
pub use scheduler::{TickPermit, TickScheduler, TimerId};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
