//! Schema file parsing and discovery

use crate::config::types::Schema;
use crate::error::{FlagscanError, SchemaError, SchemaResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default schema file names to search for
const SCHEMA_FILE_NAMES: &[&str] = &["flagscan.yml", "flagscan.yaml"];

/// Find the schema file by searching current and parent directories
pub fn find_schema_file() -> Result<PathBuf, FlagscanError> {
    let cwd = env::current_dir()?;
    Ok(find_schema_file_from(cwd)?)
}

/// Find the schema file starting from a specific directory
pub fn find_schema_file_from(start_dir: PathBuf) -> SchemaResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in SCHEMA_FILE_NAMES {
            let schema_path = current_dir.join(file_name);
            searched_paths.push(schema_path.display().to_string());

            if schema_path.is_file() {
                return Ok(schema_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(SchemaError::NotFound(searched_paths.join(", "))),
        }
    }
}

/// Parse a schema file from a path
pub fn parse_schema_file(path: &Path) -> Result<Schema, FlagscanError> {
    let contents = fs::read_to_string(path)?;
    parse_schema(&contents)
}

/// Parse a schema from a YAML string
pub fn parse_schema(yaml: &str) -> Result<Schema, FlagscanError> {
    let schema: Schema = serde_yaml::from_str(yaml)?;
    Ok(schema)
}

/// Parse a schema with automatic file discovery
pub fn parse_schema_auto() -> Result<(Schema, PathBuf), FlagscanError> {
    let schema_path = find_schema_file()?;
    let schema = parse_schema_file(&schema_path)?;
    Ok((schema, schema_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SIMPLE: &str = r#"
name: prog
flags:
  - short: h
    long: help
    description: Print help
"#;

    #[test]
    fn test_parse_simple_schema() {
        let schema = parse_schema(SIMPLE).unwrap();
        assert_eq!(schema.name, Some("prog".to_string()));
        assert_eq!(schema.flags.len(), 1);
        assert_eq!(schema.flags[0].long.as_deref(), Some("help"));
        assert_eq!(schema.flags[0].max_args, 0);
    }

    #[test]
    fn test_parse_empty_document() {
        let schema = parse_schema("{}").unwrap();
        assert!(schema.name.is_none());
        assert!(schema.flags.is_empty());
        assert!(schema.standalone.is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_schema("flags: [short: ");
        assert!(matches!(result, Err(FlagscanError::Yaml(_))));
    }

    #[test]
    fn test_short_name_must_be_one_char() {
        let result = parse_schema("flags:\n  - short: hh\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_schema_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let schema_path = temp_dir.path().join("flagscan.yml");
        fs::write(&schema_path, SIMPLE).unwrap();

        let found = find_schema_file_from(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(found, schema_path);
    }

    #[test]
    fn test_find_schema_in_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let schema_path = temp_dir.path().join("flagscan.yaml");
        let sub_dir = temp_dir.path().join("subdir");

        fs::create_dir(&sub_dir).unwrap();
        fs::write(&schema_path, SIMPLE).unwrap();

        let found = find_schema_file_from(sub_dir).unwrap();
        assert_eq!(found, schema_path);
    }

    #[test]
    fn test_schema_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_schema_file_from(temp_dir.path().to_path_buf());
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
