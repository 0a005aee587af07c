//! Command handlers, one module per command group.

pub mod menu;
pub mod misc;
pub mod notes;
