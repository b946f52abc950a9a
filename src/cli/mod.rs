//! CLI interface
//!
//! This module handles the flagscan command line, schema loading and
//! report output.

pub mod app;
pub mod context;

// Re-export main types
pub use app::*;
pub use context::*;
