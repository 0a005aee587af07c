//! Application-level utilities for the Notes CLI.
//!
//! This module provides:
//! - Path resolution for config and notes files
//! - The per-invocation `AppContext`

mod context;
mod resolver;

pub use context::AppContext;
