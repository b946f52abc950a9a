//! Command-line flag parsing
//!
//! This module handles token classification, flag schemas, the parse loop
//! and help/report rendering.

pub mod args;
pub mod classify;
pub mod flag;
pub mod help;

// Re-export main types
pub use args::*;
pub use classify::*;
pub use flag::*;
