//! Input cooldown.
//!
//! Keyboard and on-screen button inputs closer together than the cooldown
//! are dropped, so a held key or a double tap cannot queue up turns faster
//! than the snake can take them. Swipes are deliberate gestures and skip the
//! cooldown.

use crate::types::{GameAction, INPUT_COOLDOWN_MS};

/// Where an input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Button,
    Swipe,
}

#[derive(Debug, Clone)]
pub struct InputHandler {
    cooldown_ms: u32,
    last_accepted_ms: Option<u64>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_cooldown_ms(INPUT_COOLDOWN_MS)
    }

    pub fn with_cooldown_ms(cooldown_ms: u32) -> Self {
        Self {
            cooldown_ms,
            last_accepted_ms: None,
        }
    }

    pub fn cooldown_ms(&self) -> u32 {
        self.cooldown_ms
    }

    /// Filter one action.
    ///
    /// Only steering and pause are rate limited; start and reset always pass.
    pub fn accept(&mut self, now_ms: u64, action: GameAction, source: InputSource) -> Option<GameAction> {
        let limited = matches!(action, GameAction::Steer(_) | GameAction::Pause)
            && source != InputSource::Swipe;
        if !limited {
            return Some(action);
        }

        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.cooldown_ms as u64 {
                return None;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        Some(action)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
