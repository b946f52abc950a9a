//! Schema document types
//!
//! A schema document describes the flags and positional slots of the
//! program whose argument vector is being tokenized.

use crate::parser::{ArgumentParser, FlagSpec, StandaloneFlag};
use serde::{Deserialize, Serialize};

/// Program name used when a schema does not name one
pub const DEFAULT_PROGRAM_NAME: &str = "prog";

/// Top-level schema document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Schema {
    /// Program name used as argv[0] (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Documented positional slots
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub standalone: Vec<StandaloneFlag>,

    /// Declared flags, in lookup order
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
}

impl Schema {
    /// Program name, falling back to the default
    pub fn program_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_PROGRAM_NAME)
    }

    /// Build a parser over this schema
    pub fn to_parser(&self) -> ArgumentParser {
        ArgumentParser::new(self.standalone.clone(), self.flags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_default() {
        let schema = Schema::default();
        assert_eq!(schema.program_name(), "prog");

        let named = Schema {
            name: Some("tool".to_string()),
            ..Schema::default()
        };
        assert_eq!(named.program_name(), "tool");
    }

    #[test]
    fn test_to_parser_keeps_order() {
        let schema = Schema {
            name: None,
            standalone: vec![StandaloneFlag::new("file", "")],
            flags: vec![
                FlagSpec::new().with_short('a'),
                FlagSpec::new().with_short('b'),
            ],
        };
        let parser = schema.to_parser();
        assert_eq!(parser.flags()[0].short, Some('a'));
        assert_eq!(parser.flags()[1].short, Some('b'));
        assert_eq!(parser.standalone()[0].name, "file");
    }
}
