//! Color tokens for the island widget
//!
//! The island keeps its own fixed chrome regardless of the host theme:
//! a black pill on a dark backdrop, white content, and the two semantic
//! call colors.

use iced::Color;
use iced::color;

/// Accept-call green (also the avatar ring)
pub const ACCEPT_GREEN: Color = color!(0x27c46d);
/// Decline / mic-muted red
pub const DECLINE_RED: Color = color!(0xe5484d);

/// Island container fill
pub const ISLAND_FILL: Color = color!(0x000000);
/// Island foreground (icons, text)
pub const ISLAND_FG: Color = color!(0xffffff);

/// Window backdrop behind the island
pub const BACKDROP: Color = color!(0x1a1a1a);

/// A color with its alpha multiplied by `opacity`
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}
