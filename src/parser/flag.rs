//! Flag schema types
//!
//! A parser is built from two ordered lists: standalone slots (documentation
//! only) and flag specs. Both are fixed for the lifetime of the parser.

use crate::parser::classify::FlagToken;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A documented positional slot, shown in help output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StandaloneFlag {
    /// Placeholder name, e.g. `input`
    pub name: String,

    /// Help text
    #[serde(default)]
    pub description: String,
}

impl StandaloneFlag {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        StandaloneFlag {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A declared flag with its short/long identity and arity bounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlagSpec {
    /// Single-letter name used as `-x`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,

    /// Word name used as `--name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,

    /// Help text
    #[serde(default)]
    pub description: String,

    /// Minimum number of arguments the flag must receive
    #[serde(default)]
    pub min_args: u8,

    /// Maximum number of arguments; zero means the flag takes none
    #[serde(default)]
    pub max_args: u8,
}

impl FlagSpec {
    /// Create an empty spec; add names with the `with_*` methods
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the short name
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Set the long name
    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    /// Set the help text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the arity bounds
    pub fn with_arity(mut self, min_args: u8, max_args: u8) -> Self {
        self.min_args = min_args;
        self.max_args = max_args;
        self
    }

    /// Whether the flag consumes any following tokens
    pub fn takes_args(&self) -> bool {
        self.max_args > 0
    }

    /// Whether this spec answers to the given identity
    pub fn is(&self, id: FlagId<'_>) -> bool {
        match id {
            FlagId::Short(c) => self.short == Some(c),
            FlagId::Long(name) => self.long.as_deref() == Some(name),
        }
    }

    /// Whether a classified token refers to this spec.
    ///
    /// Short names compare only when the token carries one, likewise long names.
    pub fn matches_token(&self, token: &FlagToken) -> bool {
        let short_match = token.short.is_some() && token.short == self.short;
        let long_match = token.long.is_some() && token.long == self.long;
        short_match || long_match
    }

    /// Name used in error messages: the long name, or `-x` when there is none
    pub fn error_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => format!("-{}", short),
            (None, None) => String::new(),
        }
    }

    /// Canonical form for help and reports, e.g. `-h, --help`.
    ///
    /// Returns `None` for a spec with no names at all.
    pub fn display_name(&self) -> Option<String> {
        match (self.short, self.long.as_deref()) {
            (Some(short), Some(long)) => Some(format!("-{}, --{}", short, long)),
            (Some(short), None) => Some(format!("-{}", short)),
            (None, Some(long)) => Some(format!("--{}", long)),
            (None, None) => None,
        }
    }
}

/// Identity used to look up a declared flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagId<'a> {
    Short(char),
    Long(&'a str),
}

impl From<char> for FlagId<'_> {
    fn from(c: char) -> Self {
        FlagId::Short(c)
    }
}

impl<'a> From<&'a str> for FlagId<'a> {
    fn from(name: &'a str) -> Self {
        FlagId::Long(name)
    }
}

impl<'a> From<&'a String> for FlagId<'a> {
    fn from(name: &'a String) -> Self {
        FlagId::Long(name.as_str())
    }
}

impl fmt::Display for FlagId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagId::Short(c) => write!(f, "{}", c),
            FlagId::Long(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(short: Option<char>, long: Option<&str>) -> FlagToken {
        FlagToken {
            short,
            long: long.map(String::from),
            value: None,
        }
    }

    #[test]
    fn test_builder() {
        let spec = FlagSpec::new()
            .with_short('o')
            .with_long("output")
            .with_description("Output file")
            .with_arity(1, 2);
        assert_eq!(spec.short, Some('o'));
        assert_eq!(spec.long.as_deref(), Some("output"));
        assert_eq!(spec.description, "Output file");
        assert_eq!((spec.min_args, spec.max_args), (1, 2));
        assert!(spec.takes_args());
    }

    #[test]
    fn test_display_name() {
        let both = FlagSpec::new().with_short('h').with_long("help");
        assert_eq!(both.display_name(), Some("-h, --help".to_string()));

        let short = FlagSpec::new().with_short('v');
        assert_eq!(short.display_name(), Some("-v".to_string()));

        let long = FlagSpec::new().with_long("level");
        assert_eq!(long.display_name(), Some("--level".to_string()));

        assert_eq!(FlagSpec::new().display_name(), None);
    }

    #[test]
    fn test_matches_token_ignores_absent_names() {
        // A long-only token must not match a spec that merely lacks a short name
        let long_only = FlagSpec::new().with_long("bar");
        assert!(!long_only.matches_token(&token(None, Some("foo"))));
        assert!(long_only.matches_token(&token(None, Some("bar"))));

        let short_only = FlagSpec::new().with_short('x');
        assert!(!short_only.matches_token(&token(Some('y'), None)));
        assert!(short_only.matches_token(&token(Some('x'), None)));
    }

    #[test]
    fn test_is_identity() {
        let spec = FlagSpec::new().with_short('h').with_long("help");
        assert!(spec.is('h'.into()));
        assert!(spec.is("help".into()));
        assert!(!spec.is('x'.into()));
        assert!(!spec.is("h".into()));
    }

    #[test]
    fn test_error_name_falls_back_to_short() {
        assert_eq!(FlagSpec::new().with_short('n').error_name(), "-n");
        assert_eq!(
            FlagSpec::new().with_short('o').with_long("output").error_name(),
            "output"
        );
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
short: o
long: output
description: Output file
min_args: 1
max_args: 1
"#;
        let spec: FlagSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            spec,
            FlagSpec::new()
                .with_short('o')
                .with_long("output")
                .with_description("Output file")
                .with_arity(1, 1)
        );
    }
}
