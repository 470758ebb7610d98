//! Touch press feedback and double-tap zoom suppression.

use crate::core::effect::Effect;

/// Opacity restored once a press ends.
pub const RESTING_OPACITY: &str = "1";

/// Effects for touchstart on a touch target.
#[must_use]
pub fn on_press(pressed_opacity: &str) -> Vec<Effect> {
    vec![Effect::style("opacity", pressed_opacity)]
}

/// Effects for touchend on a touch target.
#[must_use]
pub fn on_release(release_delay_ms: u32) -> Vec<Effect> {
    vec![Effect::Defer {
        delay_ms: release_delay_ms,
        effects: vec![Effect::style("opacity", RESTING_OPACITY)],
    }]
}

/// Page-session state for double-tap detection.
///
/// Owns the timestamp of the previous touchend for the lifetime of the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapZoomGuard {
    window_ms: f64,
    last_touch_end: Option<f64>,
}

impl TapZoomGuard {
    /// Create a guard treating touchends within `window_ms` as a double tap.
    #[must_use]
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms: f64::from(window_ms),
            last_touch_end: None,
        }
    }

    #[cfg(test)]
    const fn last_touch_end(&self) -> Option<f64> {
        self.last_touch_end
    }

    /// Record a touchend at `now_ms` and return the effects for it.
    pub fn on_touch_end(&mut self, now_ms: f64) -> Vec<Effect> {
        let suppress = self
            .last_touch_end
            .is_some_and(|last| now_ms - last <= self.window_ms);
        self.last_touch_end = Some(now_ms);
        if suppress {
            vec![Effect::PreventDefault]
        } else {
            Vec::new()
        }
    }
}
