//! Animation system for the island
//!
//! CSS-like transitions built on `iced_anim`. The single driver here is
//! the expand/collapse toggle animation; it is ticked once per frame
//! from the application's `window::frames()` subscription while a
//! transition is in flight.

mod toggle;

pub use toggle::ToggleAnimation;
