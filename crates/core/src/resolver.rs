//! Collision/consumption resolver - the one-tick state transition.
//!
//! Given the committed direction, moves the snake one cell and decides what
//! happened: a plain move, a meal, or a collision. This is the only code that
//! mutates a live snake or its food.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Cell, Direction, GameOverReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced, tail followed; length unchanged.
    Moved { head: Cell },
    /// Head landed on the food; the tail stays, so the snake grew by one.
    /// `next_food` is `None` when the snake now covers the whole grid.
    Ate { head: Cell, next_food: Option<Cell> },
    /// The would-be head hit a wall or the body. Nothing was mutated.
    Collided { reason: GameOverReason, at: Cell },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub outcome: StepOutcome,
    pub score_delta: u32,
}

impl Step {
    pub fn grew(&self) -> bool {
        matches!(self.outcome, StepOutcome::Ate { .. })
    }

    pub fn collided(&self) -> Option<GameOverReason> {
        match self.outcome {
            StepOutcome::Collided { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    grid: &'a Grid,
    points_per_food: u32,
}

impl<'a> Resolver<'a> {
    pub fn new(grid: &'a Grid, points_per_food: u32) -> Self {
        Self {
            grid,
            points_per_food,
        }
    }

    /// Advance `snake` one cell in `direction`.
    ///
    /// The self-collision check runs against the body as it is before the
    /// move, tail included: steering into the cell the tail is about to leave
    /// ends the run.
    pub fn resolve(
        &self,
        snake: &mut Snake,
        food: &mut Option<Cell>,
        direction: Direction,
        rng: &mut SimpleRng,
    ) -> Step {
        let new_head = snake.head().step(direction);

        if !self.grid.is_in_bounds(new_head) {
            return Step {
                outcome: StepOutcome::Collided {
                    reason: GameOverReason::Wall,
                    at: new_head,
                },
                score_delta: 0,
            };
        }

        if snake.contains(new_head) {
            return Step {
                outcome: StepOutcome::Collided {
                    reason: GameOverReason::SelfCollision,
                    at: new_head,
                },
                score_delta: 0,
            };
        }

        snake.push_head(new_head);

        if *food == Some(new_head) {
            let next_food = self.grid.random_free_cell(snake.occupied(), rng);
            *food = next_food;
            return Step {
                outcome: StepOutcome::Ate {
                    head: new_head,
                    next_food,
                },
                score_delta: self.points_per_food,
            };
        }

        snake.pop_tail();
        Step {
            outcome: StepOutcome::Moved { head: new_head },
            score_delta: 0,
        }
    }
}
