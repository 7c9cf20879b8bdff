//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, IslandState};

use crate::motion::MotionScene;

/// Stage width the motion scene coordinates are authored against
pub const STAGE_WIDTH: f32 = 390.0;
/// Stage height
pub const STAGE_HEIGHT: f32 = 700.0;

impl App {
    /// Create a new application instance around a validated motion scene
    pub fn new(scene: MotionScene) -> (Self, Task<Message>) {
        (
            Self {
                island: IslandState::new(scene),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Islet".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Animation frames (~60fps) while a transition is in flight,
    /// nothing otherwise
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if subscription_logic::needs_animation_frames(&self.island) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use super::IslandState;

    /// Frames are only requested while the toggle animation is in
    /// flight; an island at rest subscribes to nothing
    pub fn needs_animation_frames(island: &IslandState) -> bool {
        island.is_animating()
    }
}
