//! Command implementations

pub mod add;
pub mod display;
pub mod help;
pub mod remove;
pub mod report;
pub mod shared;
