//! Schema validation
//!
//! The parser accepts whatever schema it is given. Documents loaded from disk
//! are checked here first so that every declared flag is reachable.

use crate::config::types::Schema;
use crate::error::{SchemaError, SchemaResult};
use crate::parser::FlagSpec;
use std::collections::HashSet;

/// Validate a complete schema
pub fn validate_schema(schema: &Schema) -> SchemaResult<()> {
    let mut shorts = HashSet::new();
    let mut longs = HashSet::new();

    for (index, flag) in schema.flags.iter().enumerate() {
        validate_flag(index, flag)?;

        if let Some(short) = flag.short {
            if !shorts.insert(short) {
                return Err(SchemaError::DuplicateShort(short));
            }
        }
        if let Some(long) = &flag.long {
            if !longs.insert(long.as_str()) {
                return Err(SchemaError::DuplicateLong(long.clone()));
            }
        }
    }

    Ok(())
}

/// Validate a single flag
pub fn validate_flag(index: usize, flag: &FlagSpec) -> SchemaResult<()> {
    if flag.short.is_none() && flag.long.is_none() {
        return Err(SchemaError::MissingName(index));
    }

    if let Some(short) = flag.short {
        if !short.is_ascii_alphabetic() {
            return Err(SchemaError::InvalidShort(short));
        }
    }

    if let Some(long) = &flag.long {
        validate_long_name(long)?;
    }

    if flag.min_args > flag.max_args {
        return Err(SchemaError::InvalidArity {
            flag: flag.display_name().unwrap_or_default(),
            min: flag.min_args,
            max: flag.max_args,
        });
    }

    Ok(())
}

/// A long name must classify as a long flag when written as `--name`
fn validate_long_name(long: &str) -> SchemaResult<()> {
    let starts_with_letter = long.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_with_letter || long.contains('=') {
        return Err(SchemaError::InvalidLong(long.to_string()));
    }
    Ok(())
}
