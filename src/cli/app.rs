//! Main CLI application

use crate::cli::context::{Context, Verbosity};
use crate::config::{parse_schema_auto, parse_schema_file, validate_schema, Schema};
use crate::env::EnvironmentTable;
use anyhow::Context as _;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    /// Create a new app
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with the given command line
    pub fn run<I, T>(self, args: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.get_matches_from(args);
        let ctx = Context::new().with_verbosity(get_verbosity(&matches));

        let env_keys: Vec<&String> = matches
            .get_many::<String>("env")
            .map(|keys| keys.collect())
            .unwrap_or_default();
        if !env_keys.is_empty() {
            let table = load_environment(&matches, &ctx)?;
            for key in &env_keys {
                let value = table.get(key)?;
                if ctx.prints_output() {
                    println!("{}={}", key, value);
                }
            }
        }

        let tokens: Vec<String> = matches
            .get_many::<String>("args")
            .map(|args| args.cloned().collect())
            .unwrap_or_default();
        let show_help = matches.get_flag("help-schema");

        // Environment lookups alone need no schema
        if !env_keys.is_empty() && tokens.is_empty() && !show_help {
            return Ok(());
        }

        let schema = load_schema(&matches, &ctx)?;
        let program = schema.program_name().to_string();
        let parser = schema.to_parser();

        if show_help {
            if ctx.prints_output() {
                print!("{}", parser.render_help(&program));
            }
            return Ok(());
        }

        let argv: Vec<&str> = std::iter::once(program.as_str())
            .chain(tokens.iter().map(String::as_str))
            .collect();
        let result = match parser.parse(&argv) {
            Ok(result) => result,
            Err(e) => {
                ctx.print_info("Run with --help-schema to list the accepted flags");
                return Err(e.into());
            }
        };

        ctx.print_debug(&format!(
            "Parsed {} standalone argument(s) and {} flag(s)",
            result.standalone_args().len(),
            result.seen_flags().count()
        ));

        if ctx.prints_output() {
            print!("{}", result.render_report());
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
fn build_command() -> Command {
    Command::new("flagscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize an argument vector against a flag schema")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to flagscan.yml schema file"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print results and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("help-schema")
                .long("help-schema")
                .help("Print the help text described by the schema")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("env")
                .long("env")
                .value_name("KEY")
                .help("Print an environment variable (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("dotenv")
                .long("dotenv")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Overlay variables from a dotenv file for --env lookups"),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .help("Arguments to tokenize, given after --")
                .num_args(0..)
                .last(true),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Load and validate the schema named by `--file`, or discover one
fn load_schema(matches: &ArgMatches, ctx: &Context) -> anyhow::Result<Schema> {
    let (schema, path) = match matches.get_one::<PathBuf>("file") {
        Some(path) => {
            let schema = parse_schema_file(path)
                .with_context(|| format!("Failed to load schema '{}'", path.display()))?;
            (schema, path.clone())
        }
        None => parse_schema_auto()?,
    };

    validate_schema(&schema)
        .with_context(|| format!("Invalid schema '{}'", path.display()))?;
    ctx.print_debug(&format!(
        "Loaded {} flag(s) from {}",
        schema.flags.len(),
        path.display()
    ));

    Ok(schema)
}

/// Process environment, overlaid with `--dotenv` when given
fn load_environment(matches: &ArgMatches, ctx: &Context) -> anyhow::Result<EnvironmentTable> {
    let table = EnvironmentTable::from_process();
    match matches.get_one::<PathBuf>("dotenv") {
        Some(path) => {
            ctx.print_debug(&format!("Reading env file {}", path.display()));
            Ok(table.with_dotenv(path)?)
        }
        None => Ok(table),
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<()> {
    App::new().run(std::env::args_os())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_verbosity_normal() {
        let matches = build_command().get_matches_from(vec!["flagscan"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Normal);
    }

    #[test]
    fn test_get_verbosity_silent_wins() {
        let matches = build_command().get_matches_from(vec!["flagscan", "-v", "-s"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Silent);
    }

    #[test]
    fn test_args_after_separator() {
        let matches = build_command().get_matches_from(vec![
            "flagscan", "-q", "--", "-o", "file", "--", "--help",
        ]);
        let args: Vec<&String> = matches.get_many::<String>("args").unwrap().collect();
        assert_eq!(args, ["-o", "file", "--", "--help"]);
        assert!(!matches.get_flag("help-schema"));
    }

    #[test]
    fn test_repeated_env_keys() {
        let matches =
            build_command().get_matches_from(vec!["flagscan", "--env", "HOME", "--env", "PATH"]);
        let keys: Vec<&String> = matches.get_many::<String>("env").unwrap().collect();
        assert_eq!(keys, ["HOME", "PATH"]);
    }

    #[test]
    fn test_file_arg() {
        let matches = build_command().get_matches_from(vec!["flagscan", "-f", "schema.yml"]);
        assert_eq!(
            matches.get_one::<PathBuf>("file"),
            Some(&PathBuf::from("schema.yml"))
        );
    }
}
