//! UI module for the call indicator
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): composable patterns without business logic
//! - **Components** (`components`): app-specific UI with Message handling
//! - **Animation** (`animation`): progress drivers built on `iced_anim`

pub mod animation;
pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;
