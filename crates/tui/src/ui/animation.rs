//! Tweens used by the dock and the host page.
//!
//! All interpolation, interruption and completion is delegated to `lilt`.
//! Callers only state the desired end value and sample the tween at the
//! frame time; a transition requested while another is running retargets
//! from the current position instead of jumping or queueing.

use std::fmt;
use std::time::{Duration, Instant};

use lilt::{Animated, Easing};

const PULSE_HALF_PERIOD_MS: f32 = 1000.0;
const TITLE_FADE_MS: f32 = 1000.0;

/// Width tween of the dock between its collapsed and expanded widths.
pub struct WidthTransition {
    animated: Animated<bool, Instant>,
}

impl WidthTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            animated: Animated::new(false)
                .duration(duration.as_millis() as f32)
                .easing(Easing::EaseOutCubic),
        }
    }

    /// Requests an animated change toward the expanded (`true`) or collapsed width.
    pub fn retarget(&mut self, expanded: bool, now: Instant) {
        self.animated.transition(expanded, now);
    }

    /// The width at `now`, given the current collapsed/expanded bounds.
    pub fn width(&self, collapsed: u16, expanded: u16, now: Instant) -> u16 {
        let low = collapsed.min(expanded);
        let high = collapsed.max(expanded);
        let sampled: f32 = self.animated.animate_bool(collapsed as f32, expanded as f32, now);
        (sampled.round() as u16).clamp(low, high)
    }

    pub fn in_progress(&self, now: Instant) -> bool {
        self.animated.in_progress(now)
    }
}

impl fmt::Debug for WidthTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WidthTransition")
    }
}

/// Endless breathing animation for the status dot.
pub struct Pulse {
    animated: Animated<bool, Instant>,
}

impl Pulse {
    pub fn start(now: Instant) -> Self {
        let mut animated = Animated::new(false)
            .duration(PULSE_HALF_PERIOD_MS)
            .easing(Easing::EaseInOut)
            .repeat_forever()
            .auto_reverse();
        animated.transition(true, now);
        Self { animated }
    }

    /// Brightness in `0.5..=1.0`; fully lit at the start of each cycle.
    pub fn level(&self, now: Instant) -> f32 {
        self.animated.animate_bool(1.0, 0.5, now)
    }
}

impl fmt::Debug for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pulse")
    }
}

/// One-shot fade used for the page title on startup.
pub struct FadeIn {
    animated: Animated<bool, Instant>,
}

impl FadeIn {
    pub fn start(now: Instant) -> Self {
        let mut animated = Animated::new(false).duration(TITLE_FADE_MS).easing(Easing::EaseOut);
        animated.transition(true, now);
        Self { animated }
    }

    /// Opacity in `0.0..=1.0`.
    pub fn opacity(&self, now: Instant) -> f32 {
        self.animated.animate_bool(0.0, 1.0, now)
    }

    pub fn in_progress(&self, now: Instant) -> bool {
        self.animated.in_progress(now)
    }
}

impl fmt::Debug for FadeIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FadeIn")
    }
}
