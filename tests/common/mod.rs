//! Common test utilities
#![allow(dead_code)]

use flagscan::{ArgumentParser, FlagSpec, StandaloneFlag};
use std::fs;
use tempfile::TempDir;

/// Create a temporary directory with a flagscan.yml file
pub fn create_test_schema(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("flagscan.yml");
    fs::write(&schema_path, content).unwrap();
    (temp_dir, schema_path)
}

/// Create a test schema with a subdirectory to run from
pub fn create_test_schema_in_subdir(
    content: &str,
) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("flagscan.yml");
    let sub_dir = temp_dir.path().join("subdir");

    fs::write(&schema_path, content).unwrap();
    fs::create_dir(&sub_dir).unwrap();

    (temp_dir, schema_path, sub_dir)
}

/// The help/output schema used across tests
pub fn help_output_parser() -> ArgumentParser {
    ArgumentParser::new(
        vec![StandaloneFlag::new("input", "Input file")],
        vec![
            FlagSpec::new()
                .with_short('h')
                .with_long("help")
                .with_description("Print this help and exit"),
            FlagSpec::new()
                .with_short('o')
                .with_long("output")
                .with_description("Output file")
                .with_arity(1, 1),
        ],
    )
}

pub const HELP_OUTPUT_SCHEMA: &str = r#"
name: prog
standalone:
  - name: input
    description: Input file
flags:
  - short: h
    long: help
    description: Print this help and exit
  - short: o
    long: output
    description: Output file
    min_args: 1
    max_args: 1
"#;
