//! Application-specific UI components

pub mod island;
