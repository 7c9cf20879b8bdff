//! Motion scene loading and interpolation
//!
//! The island's two visual extremes are described declaratively: a
//! "start" (compact pill) and an "end" (expanded panel) constraint set,
//! each mapping slot ids to geometry, opacity and scale. The scene is
//! parsed once at startup and every rendered slot id is validated
//! against both sets before anything is drawn.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Bundled motion scene resource
const MOTION_SCENE: &str = include_str!("../assets/motion_scene.json");

/// Per-slot property values at one visual extreme
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Corner radius (only meaningful for the container slot)
    #[serde(default)]
    pub radius: f32,
    #[serde(default = "default_one")]
    pub opacity: f32,
    #[serde(default = "default_one")]
    pub scale: f32,
}

fn default_one() -> f32 {
    1.0
}

impl SlotFrame {
    /// Component-wise linear blend between two frames
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self {
            x: lerp_f32(a.x, b.x, t),
            y: lerp_f32(a.y, b.y, t),
            width: lerp_f32(a.width, b.width, t),
            height: lerp_f32(a.height, b.height, t),
            radius: lerp_f32(a.radius, b.radius, t),
            opacity: lerp_f32(a.opacity, b.opacity, t),
            scale: lerp_f32(a.scale, b.scale, t),
        }
    }
}

/// Linear interpolation between two values
fn lerp_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A named snapshot of per-slot property values
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConstraintSet {
    pub slots: BTreeMap<String, SlotFrame>,
}

/// The two-state motion description driving the island
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotionScene {
    pub start: ConstraintSet,
    pub end: ConstraintSet,
}

impl MotionScene {
    /// Parse a motion scene from its declarative JSON form
    ///
    /// A malformed resource (including a missing constraint set) fails
    /// with `MotionError::Configuration`; no partial scene is produced.
    pub fn from_str(content: &str) -> Result<Self, MotionError> {
        serde_json::from_str(content).map_err(|e| MotionError::Configuration(e.to_string()))
    }

    /// Load the bundled motion scene and validate it against the
    /// island's rendered slot ids
    pub fn load() -> Result<Self, MotionError> {
        let scene = Self::from_str(MOTION_SCENE)?;
        scene.validate(&crate::ui::components::island::SLOT_IDS)?;
        Ok(scene)
    }

    /// Check that every given slot id exists in both constraint sets
    ///
    /// Interpolating a slot that is absent from either set is undefined,
    /// so this runs eagerly at load time.
    pub fn validate(&self, slot_ids: &[&str]) -> Result<(), MotionError> {
        for &slot in slot_ids {
            if !self.start.slots.contains_key(slot) {
                return Err(MotionError::MissingSlot {
                    slot: slot.to_string(),
                    set: "start",
                });
            }
            if !self.end.slots.contains_key(slot) {
                return Err(MotionError::MissingSlot {
                    slot: slot.to_string(),
                    set: "end",
                });
            }
        }
        Ok(())
    }

    /// Sample a slot at the given progress, clamped to [0, 1]
    ///
    /// Total for any slot id that passed `validate`.
    pub fn sample(&self, slot: &str, progress: f32) -> SlotFrame {
        let t = progress.clamp(0.0, 1.0);
        match (self.start.slots.get(slot), self.end.slots.get(slot)) {
            (Some(a), Some(b)) => SlotFrame::lerp(a, b, t),
            _ => {
                debug_assert!(false, "unvalidated slot id: {slot}");
                SlotFrame {
                    x: 0.0,
                    y: 0.0,
                    width: 0.0,
                    height: 0.0,
                    radius: 0.0,
                    opacity: 0.0,
                    scale: 0.0,
                }
            }
        }
    }

    /// Number of slots declared in the start constraint set
    pub fn slot_count(&self) -> usize {
        self.start.slots.len()
    }
}

/// Errors that can occur while loading a motion scene
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Malformed or missing motion resource
    Configuration(String),
    /// A rendered slot id is absent from one of the constraint sets
    MissingSlot { slot: String, set: &'static str },
}

impl std::fmt::Display for MotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionError::Configuration(e) => write!(f, "malformed motion scene: {}", e),
            MotionError::MissingSlot { slot, set } => {
                write!(f, "slot '{}' missing from '{}' constraint set", slot, set)
            }
        }
    }
}

impl std::error::Error for MotionError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_slot_scene() -> MotionScene {
        MotionScene::from_str(
            r#"{
                "start": {
                    "slots": {
                        "box": { "x": 100, "y": 20, "width": 140, "height": 40, "radius": 50 },
                        "call_icon": { "x": 110, "y": 30, "width": 20, "height": 20 }
                    }
                },
                "end": {
                    "slots": {
                        "box": { "x": 20, "y": 20, "width": 340, "height": 190, "radius": 12 },
                        "call_icon": { "x": 110, "y": 30, "width": 20, "height": 20, "opacity": 0, "scale": 0 }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn bundled_scene_parses_and_validates() {
        let scene = MotionScene::load().unwrap();
        assert_eq!(
            scene.slot_count(),
            crate::ui::components::island::SLOT_IDS.len()
        );
    }

    #[test]
    fn defaults_applied_for_omitted_fields() {
        let scene = two_slot_scene();
        let frame = scene.start.slots["box"];
        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.scale, 1.0);
    }

    #[test]
    fn midpoint_radius_interpolates_linearly() {
        // start radius 50, end radius 12 -> 31 at progress 0.5
        let scene = two_slot_scene();
        let frame = scene.sample("box", 0.5);
        assert_eq!(frame.radius, 31.0);
    }

    #[test]
    fn endpoints_reproduce_constraint_sets_exactly() {
        let scene = two_slot_scene();
        for slot in ["box", "call_icon"] {
            assert_eq!(scene.sample(slot, 0.0), scene.start.slots[slot]);
            assert_eq!(scene.sample(slot, 1.0), scene.end.slots[slot]);
        }
    }

    #[test]
    fn progress_is_clamped() {
        let scene = two_slot_scene();
        assert_eq!(scene.sample("box", -0.5), scene.sample("box", 0.0));
        assert_eq!(scene.sample("box", 1.5), scene.sample("box", 1.0));
    }

    #[test]
    fn missing_end_set_is_a_configuration_error() {
        let result = MotionScene::from_str(
            r#"{
                "start": {
                    "slots": {
                        "box": { "x": 0, "y": 0, "width": 10, "height": 10 }
                    }
                }
            }"#,
        );
        assert!(matches!(result, Err(MotionError::Configuration(_))));
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let result = MotionScene::from_str("{ not json");
        assert!(matches!(result, Err(MotionError::Configuration(_))));
    }

    #[test]
    fn validate_reports_the_missing_slot_and_set() {
        let scene = two_slot_scene();
        assert_eq!(scene.validate(&["box", "call_icon"]), Ok(()));

        let err = scene.validate(&["box", "mic_icon"]).unwrap_err();
        assert_eq!(
            err,
            MotionError::MissingSlot {
                slot: "mic_icon".to_string(),
                set: "start",
            }
        );
    }

    #[test]
    fn validate_checks_both_sets() {
        let mut scene = two_slot_scene();
        scene.end.slots.remove("call_icon");

        let err = scene.validate(&["call_icon"]).unwrap_err();
        assert_eq!(
            err,
            MotionError::MissingSlot {
                slot: "call_icon".to_string(),
                set: "end",
            }
        );
    }
}
