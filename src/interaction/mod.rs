use serde::{Deserialize, Serialize};

use crate::core::CursorPos;

/// Tuning for pointer-driven redraw pacing.
///
/// Continuous touch movement is throttled to roughly one redraw per frame,
/// and a lifted touch keeps its tooltip on screen for a short grace period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerConfig {
    /// Minimum spacing between touch-driven redraws, in milliseconds.
    pub redraw_throttle_ms: u64,
    /// How long a tooltip lingers after a touch ends, in milliseconds.
    pub touch_linger_ms: u64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            redraw_throttle_ms: 16,
            touch_linger_ms: 1500,
        }
    }
}

/// Deterministic pointer/touch state machine driving cursor-bound redraws.
///
/// The tracker never reads the wall clock; hosts pass a monotonic millisecond
/// timestamp into the touch paths. Every event method returns `true` when the
/// host should redraw with the tracker's current `cursor()`. Throttled touch
/// moves return `false` and simply keep the latest position, since redraws
/// are idempotent and always take the newest cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    config: PointerConfig,
    cursor: Option<CursorPos>,
    touching: bool,
    last_touch_redraw_ms: Option<u64>,
    linger_deadline_ms: Option<u64>,
}

impl PointerTracker {
    #[must_use]
    pub fn new(config: PointerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(self) -> PointerConfig {
        self.config
    }

    /// Cursor to render with, or `None` when no tooltip should show.
    #[must_use]
    pub fn cursor(self) -> Option<CursorPos> {
        self.cursor
    }

    /// True while a touch is active, i.e. while the host should suppress the
    /// platform's default scroll/gesture handling over the surface.
    #[must_use]
    pub fn wants_gesture_suppression(self) -> bool {
        self.touching
    }

    pub fn on_mouse_move(&mut self, x: f64, y: f64) -> bool {
        self.cursor = Some(CursorPos::new(x, y));
        self.linger_deadline_ms = None;
        true
    }

    pub fn on_mouse_leave(&mut self) -> bool {
        self.cursor = None;
        self.linger_deadline_ms = None;
        true
    }

    pub fn on_touch_start(&mut self, x: f64, y: f64, now_ms: u64) -> bool {
        self.touching = true;
        self.cursor = Some(CursorPos::new(x, y));
        self.linger_deadline_ms = None;
        self.last_touch_redraw_ms = Some(now_ms);
        true
    }

    pub fn on_touch_move(&mut self, x: f64, y: f64, now_ms: u64) -> bool {
        if !self.touching {
            return false;
        }

        self.cursor = Some(CursorPos::new(x, y));
        let due = match self.last_touch_redraw_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.config.redraw_throttle_ms,
            None => true,
        };
        if due {
            self.last_touch_redraw_ms = Some(now_ms);
        }
        due
    }

    /// Ends a touch; the tooltip stays visible until the linger deadline.
    pub fn on_touch_end(&mut self, now_ms: u64) -> bool {
        self.touching = false;
        self.last_touch_redraw_ms = None;
        self.linger_deadline_ms = Some(now_ms + self.config.touch_linger_ms);
        false
    }

    /// Aborted touch: clear the tooltip immediately.
    pub fn on_touch_cancel(&mut self) -> bool {
        self.touching = false;
        self.last_touch_redraw_ms = None;
        self.linger_deadline_ms = None;
        self.cursor = None;
        true
    }

    /// Advances linger expiry. Returns `true` once when the grace period has
    /// elapsed and the host should redraw without a cursor. A touch that began
    /// in the meantime cancels the pending clear.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.linger_deadline_ms else {
            return false;
        };
        if self.touching {
            self.linger_deadline_ms = None;
            return false;
        }
        if now_ms < deadline {
            return false;
        }

        self.linger_deadline_ms = None;
        self.cursor = None;
        true
    }
}
