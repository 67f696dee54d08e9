//! Frame pacing for the terminal loop.

/// Decides when a new frame is worth drawing.
///
/// Frames are identified by a fingerprint of everything that is drawn
/// (game state, overlay, viewport). A static screen (idle or ended) is only
/// redrawn when its fingerprint changes or once per `min_static_interval_ms`;
/// a live screen is redrawn whenever asked.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Forget the last frame so the next call always renders (e.g. after a resize).
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if changed || !is_static || stale {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        false
    }
}
