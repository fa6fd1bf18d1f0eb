//! Frame pacing for mostly-static screens.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Decides whether a new frame is worth drawing.
///
/// While the snake moves every frame differs and is drawn. Once the game is
/// over the screen is static, so it is only refreshed occasionally.
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

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: always render (no throttling).
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let due = !self.has_rendered
            || !is_static
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Forget the last frame so the next call always renders (e.g. on resize).
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}

/// Stable-within-a-process hash of anything hashable, e.g. a `GameSnapshot`.
pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
