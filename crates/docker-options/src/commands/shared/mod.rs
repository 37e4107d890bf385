//! Shared helpers for command implementations.

pub mod context;
pub mod targets;

pub use context::CommandContext;
pub use targets::{option_entries, resolve_targets, Target};
