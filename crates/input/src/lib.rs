//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` event types. It maps key events into [`crate::types::GameAction`],
//! turns mouse drags into swipe directions, and rate limits steering inputs.

pub mod handler;
pub mod map;
pub mod swipe;

pub use tui_snake_types as types;

pub use handler::{InputHandler, InputSource};
pub use map::{handle_key_event, should_quit};
pub use swipe::SwipeTracker;
