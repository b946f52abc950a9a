//! Environment lookup table
//!
//! Builds a key/value table from `KEY=VALUE` strings, the shape of a process
//! environment block.

use crate::error::EnvError;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

/// Key/value table built from environment entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentTable {
    vars: BTreeMap<String, String>,
}

impl EnvironmentTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `KEY=VALUE` entries.
    ///
    /// Entries are split at the first `=`. Entries without one are skipped and
    /// later keys overwrite earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        table.extend_entries(entries);
        table
    }

    /// Snapshot of the current process environment
    pub fn from_process() -> Self {
        let mut table = Self::new();
        for (key, value) in std::env::vars_os() {
            table.insert(
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            );
        }
        table
    }

    /// Overlay entries from a dotenv file; file values win
    pub fn with_dotenv(mut self, path: &Path) -> Result<Self, EnvError> {
        let dotenv_error = |e: dotenvy::Error| EnvError::Dotenv {
            path: path.to_path_buf(),
            error: e.to_string(),
        };

        for item in dotenvy::from_path_iter(path).map_err(dotenv_error)? {
            let (key, value) = item.map_err(dotenv_error)?;
            self.insert(key, value);
        }
        Ok(self)
    }

    /// Add `KEY=VALUE` entries to the table
    pub fn extend_entries<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            if let Some((key, value)) = entry.as_ref().split_once('=') {
                self.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Set a single variable
    pub fn insert(&mut self, key: String, value: String) {
        self.vars.insert(key, value);
    }

    /// Look up a variable
    pub fn get(&self, key: &str) -> Result<&str, EnvError> {
        self.vars
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| EnvError::UnknownKey(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render every entry as `KEY: VALUE`, one per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            let _ = writeln!(out, "{}: {}", key, value);
        }
        out
    }
}

impl<S: AsRef<str>> FromIterator<S> for EnvironmentTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
