//! Game state module - manages the complete game state
//!
//! This module ties together the core components: grid, snake, direction
//! buffer, tick scheduler, resolver and RNG. It owns the run lifecycle
//! (`Idle -> Running <-> Paused -> Over -> Idle`), level and speed progression,
//! and the best score seen so far.
//!
//! Time only enters through [`GameState::poll`], which asks the scheduler for
//! a permit and runs at most one tick per call.

use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};
use crate::direction::DirectionBuffer;
use crate::grid::Grid;
use crate::resolver::{Resolver, Step, StepOutcome};
use crate::rng::SimpleRng;
use crate::scheduler::TickScheduler;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    direction: DirectionBuffer,
    scheduler: TickScheduler,
    rng: SimpleRng,
    status: GameStatus,
    over_reason: Option<GameOverReason>,
    /// Whether the run that just ended beat the previous best.
    new_best: bool,
    score: u32,
    best_score: u32,
    level: u32,
    food_in_level: u32,
    food_per_level: u32,
    interval_ms: u32,
    /// Monotonic run id (increments on reset).
    episode_id: u32,
    /// Ticks resolved in the current run.
    ticks: u64,
    /// Clock reading of the last timed tick.
    last_tick_ms: u64,
    /// Level being announced, and when the announcement ends.
    level_banner: Option<(u32, u64)>,
    /// Last meal/game-over event (consumed by the runner).
    last_event: Option<CoreEvent>,
}

impl GameState {
    /// Create a new game in the `Idle` state.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::from_config(&config)?;
        Ok(Self::fresh(config, grid))
    }

    /// Create a game from a hand-placed layout, e.g. to replay a position.
    ///
    /// Every snake cell and the food must lie inside the grid, and the food
    /// must not sit on the snake.
    pub fn from_layout(
        config: GameConfig,
        snake: Snake,
        food: Cell,
        direction: Direction,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::from_config(&config)?;

        let out_of_bounds = |c: Cell| ConfigError::OutOfBounds {
            x: c.x,
            y: c.y,
            width: grid.width(),
            height: grid.height(),
        };
        if let Some(cell) = snake.iter().find(|&c| !grid.is_in_bounds(c)) {
            return Err(out_of_bounds(cell));
        }
        if !grid.is_in_bounds(food) {
            return Err(out_of_bounds(food));
        }
        if snake.contains(food) {
            return Err(ConfigError::FoodOnSnake);
        }

        let mut state = Self::fresh(config, grid);
        state.snake = snake;
        state.food = Some(food);
        state.direction = DirectionBuffer::new(direction);
        Ok(state)
    }

    fn fresh(config: GameConfig, grid: Grid) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let snake = Snake::new(grid.center());
        let food = grid.random_free_cell(snake.occupied(), &mut rng);

        Self {
            config,
            grid,
            snake,
            food,
            direction: DirectionBuffer::default(),
            scheduler: TickScheduler::new(config.initial_interval_ms),
            rng,
            status: GameStatus::Idle,
            over_reason: None,
            new_best: false,
            score: 0,
            best_score: 0,
            level: 1,
            food_in_level: 0,
            food_per_level: config.food_per_level,
            interval_ms: config.initial_interval_ms,
            episode_id: 0,
            ticks: 0,
            last_tick_ms: 0,
            level_banner: None,
            last_event: None,
        }
    }

    pub fn with_best_score(mut self, best_score: u32) -> Self {
        self.best_score = best_score;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Direction applied on the last tick.
    pub fn direction(&self) -> Direction {
        self.direction.committed()
    }

    /// Direction the next tick will apply.
    pub fn pending_direction(&self) -> Direction {
        self.direction.pending()
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn over_reason(&self) -> Option<GameOverReason> {
        self.over_reason
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn food_in_level(&self) -> u32 {
        self.food_in_level
    }

    pub fn food_per_level(&self) -> u32 {
        self.food_per_level
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Level announced by a recent level-up, while its banner is up.
    pub fn level_banner(&self) -> Option<u32> {
        self.level_banner.map(|(level, _)| level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_width = self.grid.width();
        out.grid_height = self.grid.height();
        out.snake.clear();
        out.snake.extend(self.snake.iter());
        out.food = self.food;
        out.direction = self.direction.committed();
        out.status = self.status;
        out.over_reason = self.over_reason;
        out.new_best = self.new_best;
        out.score = self.score;
        out.best_score = self.best_score;
        out.level = self.level;
        out.food_in_level = self.food_in_level;
        out.food_per_level = self.food_per_level;
        out.interval_ms = self.interval_ms;
        out.episode_id = self.episode_id;
        out.ticks = self.ticks;
        out.level_banner = self.level_banner();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Begin a run: `Idle -> Running`.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.status != GameStatus::Idle {
            return false;
        }
        self.status = GameStatus::Running;
        self.scheduler.start(now_ms, self.interval_ms);
        debug!(episode = self.episode_id, "run started");
        true
    }

    /// `Running -> Paused`; the tick timer is cancelled.
    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        self.scheduler.cancel();
        true
    }

    /// `Paused -> Running`; a new timer starts with the last interval.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Running;
        self.scheduler.resume(now_ms);
        true
    }

    pub fn toggle_pause(&mut self, now_ms: u64) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(now_ms),
            _ => false,
        }
    }

    /// Abandon the run and return to `Idle` with a fresh snake.
    ///
    /// The RNG keeps going, so consecutive runs see different food.
    /// The best score survives.
    pub fn reset(&mut self) {
        self.scheduler.cancel();

        self.snake = Snake::new(self.grid.center());
        self.food = self.grid.random_free_cell(self.snake.occupied(), &mut self.rng);
        self.direction = DirectionBuffer::default();
        self.status = GameStatus::Idle;
        self.over_reason = None;
        self.new_best = false;
        self.score = 0;
        self.level = 1;
        self.food_in_level = 0;
        self.food_per_level = self.config.food_per_level;
        self.interval_ms = self.config.initial_interval_ms;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.ticks = 0;
        self.level_banner = None;
        self.last_event = None;
        debug!(episode = self.episode_id, "game reset");
    }

    /// Ask for a new heading on the next tick.
    ///
    /// Reversals are silently dropped (returns `false`); so is anything after
    /// the run is over.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::Over {
            return false;
        }
        self.direction.request(direction)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::Steer(direction) => self.request_direction(direction),
            GameAction::Start => match self.status {
                GameStatus::Idle => self.start(now_ms),
                GameStatus::Paused => self.resume(now_ms),
                GameStatus::Over => {
                    self.reset();
                    self.start(now_ms)
                }
                GameStatus::Running => false,
            },
            GameAction::Pause => self.toggle_pause(now_ms),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Milliseconds until the next tick is due; `None` while not running.
    pub fn time_until_next_tick(&self, now_ms: u64) -> Option<u64> {
        self.scheduler.time_until_due(now_ms)
    }

    /// Run one tick if the scheduler says one is due.
    ///
    /// Also retires an expired level-up banner, due tick or not.
    pub fn poll(&mut self, now_ms: u64) -> Option<Step> {
        if matches!(self.level_banner, Some((_, until)) if now_ms >= until) {
            self.level_banner = None;
        }
        let permit = self.scheduler.begin(now_ms)?;
        self.last_tick_ms = permit.fired_at_ms();
        let step = self.tick();
        self.scheduler.complete(permit);
        step
    }

    /// Resolve a single step. Does nothing unless `Running`.
    ///
    /// [`GameState::poll`] is the timed entry point; calling this directly
    /// steps the simulation regardless of the clock.
    pub fn tick(&mut self) -> Option<Step> {
        if self.status != GameStatus::Running {
            return None;
        }

        let direction = self.direction.commit();
        let step = Resolver::new(&self.grid, self.config.points_per_food).resolve(
            &mut self.snake,
            &mut self.food,
            direction,
            &mut self.rng,
        );
        self.ticks += 1;

        match step.outcome {
            StepOutcome::Moved { .. } => {}
            StepOutcome::Ate { next_food, .. } => {
                self.on_food_eaten(step.score_delta);
                if next_food.is_none() {
                    self.finish(GameOverReason::BoardFilled);
                }
            }
            StepOutcome::Collided { reason, .. } => self.finish(reason),
        }

        Some(step)
    }

    /// Take and clear the last meal/game-over event.
    pub fn take_last_event(&mut self) -> Option<CoreEvent> {
        self.last_event.take()
    }

    fn on_food_eaten(&mut self, score_delta: u32) {
        self.score += score_delta;
        self.food_in_level += 1;

        let leveled_up = self.food_in_level >= self.food_per_level;
        if leveled_up {
            self.level += 1;
            self.food_in_level = 0;
            self.food_per_level = (self.food_per_level + 1).min(self.config.food_per_level_cap);
            self.level_banner = Some((self.level, self.last_tick_ms + LEVEL_BANNER_MS as u64));
            debug!(level = self.level, food_per_level = self.food_per_level, "level up");
        }

        if self.interval_ms > self.config.min_interval_ms {
            let faster = self
                .interval_ms
                .saturating_sub(self.config.interval_step_ms)
                .max(self.config.min_interval_ms);
            if faster != self.interval_ms {
                self.interval_ms = faster;
                self.scheduler.restart_with_interval(faster);
            }
        }

        self.last_event = Some(CoreEvent::FoodEaten {
            score: self.score,
            level: self.level,
            leveled_up,
        });
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.status = GameStatus::Over;
        self.over_reason = Some(reason);
        self.scheduler.cancel();

        self.new_best = self.score > self.best_score;
        if self.new_best {
            self.best_score = self.score;
        }

        info!(
            episode = self.episode_id,
            reason = reason.as_str(),
            score = self.score,
            length = self.snake.len(),
            new_best = self.new_best,
            "game over"
        );

        self.last_event = Some(CoreEvent::GameOver {
            reason,
            score: self.score,
            new_best: self.new_best,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(GameConfig::default(), Grid::default())
    }
}
