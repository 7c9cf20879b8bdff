//! Expand/collapse progress animation
//!
//! Drives the island's interpolation progress between 0 (compact) and
//! 1 (expanded) over a fixed duration with an ease-in-out curve.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Expand/collapse duration (700ms, matching the motion design)
const TOGGLE_DURATION: Duration = Duration::from_millis(700);

/// Create the toggle easing with its fixed duration
fn toggle_easing() -> Easing {
    Easing::EASE_IN_OUT.with_duration(TOGGLE_DURATION)
}

/// Progress animation between the two island states
///
/// Retargeting mid-flight restarts the transition from the current
/// interpolated value, never from an endpoint, so a tap during the
/// animation reverses it without a visual jump.
#[derive(Debug)]
pub struct ToggleAnimation {
    animation: Animated<f32>,
}

impl Default for ToggleAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleAnimation {
    /// Create a new animation at rest in the compact state
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, toggle_easing()),
        }
    }

    /// Animate toward the given endpoint (0.0 or 1.0)
    pub fn set_target(&mut self, target: f32) {
        // Rebuild the transition at the in-flight value so the new
        // animation starts from wherever the previous one got to
        let current = *self.animation.value();
        self.animation = Animated::transition(current, toggle_easing());
        self.animation.update(target.into());
    }

    /// Current interpolation progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    /// The endpoint currently being animated toward
    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    /// Check if a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update the value
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
