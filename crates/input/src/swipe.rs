//! Mouse drags as swipe gestures.
//!
//! A press records the origin; the release turns the drag vector into a
//! direction along its dominant axis. Terminal columns are about half as wide
//! as rows are tall, so horizontal distance is scaled down before comparing.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, MIN_SWIPE_CELLS};

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
    min_distance: u16,
    column_scale: u16,
}

impl SwipeTracker {
    /// `min_distance` is measured in rows; `column_scale` is how many
    /// columns make up one row's worth of distance.
    pub fn new(min_distance: u16, column_scale: u16) -> Self {
        Self {
            origin: None,
            min_distance,
            column_scale: column_scale.max(1),
        }
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.origin = Some((column, row));
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Finish a drag. Short drags in both axes are not swipes.
    pub fn release(&mut self, column: u16, row: u16) -> Option<Direction> {
        let (ox, oy) = self.origin.take()?;
        let dx = (column as i32 - ox as i32) / self.column_scale as i32;
        let dy = row as i32 - oy as i32;
        let (ax, ay) = (dx.abs(), dy.abs());
        let min = self.min_distance as i32;

        if ax < min && ay < min {
            return None;
        }
        if ax > ay {
            Some(if dx > 0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0 { Direction::Down } else { Direction::Up })
        }
    }

    /// Feed a raw mouse event; returns a direction when a left-button drag
    /// completes as a swipe.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(event.column, event.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(event.column, event.row),
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(MIN_SWIPE_CELLS, 2)
    }
}
