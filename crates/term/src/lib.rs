//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Allow precise control over aspect ratio (2 chars wide per grid cell)
//! - Follow the local clock with a time-of-day accent palette

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod theme;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Layout, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, SurfaceError, TerminalRenderer};
pub use theme::{Palette, ThemeChoice, TimeOfDay, UnknownTheme};
