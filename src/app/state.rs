//! Application state

use std::time::Instant;

use crate::motion::MotionScene;
use crate::ui::animation::ToggleAnimation;

/// Top-level application state
pub struct App {
    pub island: IslandState,
}

/// The island's state: one boolean plus its progress animation
///
/// `expanded` is the only persisted state and always starts false; the
/// animation is derived and never outlives the widget.
pub struct IslandState {
    pub expanded: bool,
    pub animation: ToggleAnimation,
    pub scene: MotionScene,
}

impl IslandState {
    /// Create the island in its compact state
    pub fn new(scene: MotionScene) -> Self {
        Self {
            expanded: false,
            animation: ToggleAnimation::new(),
            scene,
        }
    }

    /// Toggle between compact and expanded, retargeting any in-flight
    /// animation from its current value
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        let target = if self.expanded { 1.0 } else { 0.0 };
        tracing::debug!(expanded = self.expanded, "island toggled");
        self.animation.set_target(target);
    }

    /// Current interpolation progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.animation.progress()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn island() -> IslandState {
        IslandState::new(MotionScene::load().unwrap())
    }

    #[test]
    fn starts_compact() {
        let island = island();
        assert!(!island.expanded);
        assert_eq!(island.progress(), 0.0);
        assert!(!island.is_animating());
    }

    #[test]
    fn each_tap_toggles_exactly_once() {
        let mut island = island();

        island.toggle();
        assert!(island.expanded);
        assert_eq!(island.animation.target(), 1.0);

        island.toggle();
        assert!(!island.expanded);
        assert_eq!(island.animation.target(), 0.0);
    }

    #[test]
    fn tap_mid_flight_reverses_from_the_current_value() {
        let mut island = island();
        island.toggle();

        island.tick(Instant::now() + Duration::from_millis(350));
        let mid = island.progress();
        assert!(mid > 0.0 && mid < 1.0);

        // Second tap before the expansion finishes
        island.toggle();
        assert!(!island.expanded);
        assert_eq!(island.animation.target(), 0.0);
        assert!(
            (island.progress() - mid).abs() < 1e-3,
            "reversal must start from the in-flight value"
        );
    }

    #[test]
    fn round_trip_returns_to_the_start_geometry() {
        let mut island = island();

        island.toggle();
        island.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(island.progress(), 1.0);

        island.toggle();
        island.tick(Instant::now() + Duration::from_secs(2));
        assert_eq!(island.progress(), 0.0);

        // Every slot is back at its start frame
        for slot in crate::ui::components::island::SLOT_IDS {
            assert_eq!(
                island.scene.sample(slot, island.progress()),
                island.scene.start.slots[slot]
            );
        }
    }

    #[test]
    fn animation_settles_after_the_toggle_duration() {
        let mut island = island();
        island.toggle();
        assert!(island.is_animating());

        island.tick(Instant::now() + Duration::from_millis(750));
        assert_eq!(island.progress(), 1.0);
        assert!(!island.is_animating());
    }
}
