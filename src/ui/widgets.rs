//! Composable widgets without business logic

pub mod control_button;

pub use control_button::ControlButtonSpec;
