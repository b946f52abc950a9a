//! Flagscan - a small command-line flag tokenizer
//!
//! Flagscan classifies raw argv tokens as short flags, long flags, inline
//! values or standalone arguments, and matches them against a declared flag
//! schema with per-flag arity bounds. It also provides a lookup table over
//! `KEY=VALUE` environment entries.

// Public modules
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use env::EnvironmentTable;
pub use error::{EnvError, FlagscanError, ParseError, QueryError, Result};
pub use parser::{ArgumentParser, FlagId, FlagSpec, ParseResult, StandaloneFlag};

/// Current version of flagscan
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
