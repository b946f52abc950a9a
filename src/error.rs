//! Error types for flagscan

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for flagscan operations
pub type Result<T> = std::result::Result<T, FlagscanError>;

/// Main error type for flagscan
#[derive(Error, Debug)]
pub enum FlagscanError {
    /// Argument parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Flag query errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Environment lookup errors
    #[error(transparent)]
    Env(#[from] EnvError),

    /// Schema document errors
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised while parsing an argument vector.
///
/// Parsing stops at the first one; no partial result survives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token looks like a flag but no declared flag matches it
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    /// A flag was given more than once, under either spelling
    #[error("Flag set twice: {0}")]
    DuplicateFlag(String),

    /// Fewer arguments than the flag's minimum were available
    #[error("Missing arguments for flag: {0}")]
    MissingArguments(String),
}

/// Errors raised when querying a parse result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
}

/// Environment table errors
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Unknown environment variable: {0}")]
    UnknownKey(String),

    #[error("Failed to read env file '{path}': {error}")]
    Dotenv { path: PathBuf, error: String },
}

/// Schema document validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Failed to find schema file (searched: {0})")]
    NotFound(String),

    #[error("Flag #{0} has neither a short nor a long name")]
    MissingName(usize),

    #[error("Short name '{0}' must be an ASCII letter")]
    InvalidShort(char),

    #[error("Long name '{0}' must be non-empty and start with an ASCII letter")]
    InvalidLong(String),

    #[error("Flag '{flag}' has min_args {min} greater than max_args {max}")]
    InvalidArity { flag: String, min: u8, max: u8 },

    #[error("Short name '-{0}' is declared more than once")]
    DuplicateShort(char),

    #[error("Long name '--{0}' is declared more than once")]
    DuplicateLong(String),
}

/// Specialized result type for schema operations
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;
