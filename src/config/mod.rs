//! Schema documents
//!
//! This module handles loading flagscan.yml schema files and validating
//! them before a parser is built from them.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
