//! Application messages

/// Application messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The island container was tapped
    IslandPressed,
    /// Per-frame animation update
    AnimationTick,
}
