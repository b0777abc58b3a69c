//! Skip redundant frames.
//!
//! While the snake moves every frame is drawn. Once the board is static
//! (ready screen, paused, game over) a frame is drawn only when the snapshot
//! changes, plus a slow heartbeat so a garbled terminal heals itself.

use crate::core::GameSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Forget the last frame, e.g. after a terminal resize.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }

    /// Decide whether to render `snap` at `now_ms`.
    pub fn should_render(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        let fingerprint = snap.fingerprint();
        let changed = self.last_fingerprint != Some(fingerprint);
        let heartbeat =
            now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        let render = changed || (!snap.playable() && heartbeat);
        if render {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
        }
        render
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(1000)
    }
}
