//! Argument parser
//!
//! Walks an argument vector once, matching flag tokens against the declared
//! specs and consuming arity-bounded runs of following tokens as arguments.

use crate::error::{ParseError, QueryError};
use crate::parser::classify::{classify, is_flag, Classified, FlagToken};
use crate::parser::flag::{FlagId, FlagSpec, StandaloneFlag};
use std::collections::BTreeSet;

/// Parser over a fixed flag schema
#[derive(Debug, Clone, Default)]
pub struct ArgumentParser {
    standalone: Vec<StandaloneFlag>,
    flags: Vec<FlagSpec>,
}

impl ArgumentParser {
    /// Create a parser. The schema is taken as given and not validated.
    pub fn new(standalone: Vec<StandaloneFlag>, flags: Vec<FlagSpec>) -> Self {
        ArgumentParser { standalone, flags }
    }

    /// Declared flag specs in declaration order
    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    /// Declared standalone slots
    pub fn standalone(&self) -> &[StandaloneFlag] {
        &self.standalone
    }

    /// Index of the first spec answering to `id`
    pub fn find(&self, id: FlagId<'_>) -> Option<usize> {
        self.flags.iter().position(|f| f.is(id))
    }

    fn find_token(&self, token: &FlagToken) -> Option<usize> {
        self.flags.iter().position(|f| f.matches_token(token))
    }

    /// Parse an argument vector whose first element is the program name.
    ///
    /// Every call starts from a clean result; the parser itself is unchanged.
    pub fn parse<S: AsRef<str>>(&self, argv: &[S]) -> Result<ParseResult<'_>, ParseError> {
        let mut result = ParseResult {
            parser: self,
            program_name: argv
                .first()
                .map(|s| s.as_ref().to_string())
                .unwrap_or_default(),
            standalone_args: Vec::new(),
            flag_args: vec![Vec::new(); self.flags.len()],
            seen: BTreeSet::new(),
        };

        let mut i = 1;
        while i < argv.len() {
            let raw = argv[i].as_ref();

            let token = match classify(raw) {
                Classified::Positional => {
                    result.standalone_args.push(raw.to_string());
                    i += 1;
                    continue;
                }
                Classified::Flag(token) => token,
            };

            let index = self
                .find_token(&token)
                .ok_or_else(|| ParseError::UnknownFlag(raw.to_string()))?;
            if !result.seen.insert(index) {
                return Err(ParseError::DuplicateFlag(raw.to_string()));
            }

            let spec = &self.flags[index];
            let (args, consumed) = collect_args(spec, token.value, &argv[i + 1..])?;
            result.flag_args[index] = args;
            i += 1 + consumed;
        }

        Ok(result)
    }
}

/// Build a flag's argument list from its inline value and the tokens after it.
///
/// Returns the list and how many following tokens were consumed.
fn collect_args<S: AsRef<str>>(
    spec: &FlagSpec,
    inline: Option<String>,
    following: &[S],
) -> Result<(Vec<String>, usize), ParseError> {
    // Zero-arity flags drop any inline value
    if !spec.takes_args() {
        return Ok((Vec::new(), 0));
    }

    let max = usize::from(spec.max_args);
    let mut args: Vec<String> = inline.into_iter().filter(|v| !v.is_empty()).collect();
    let mut consumed = 0;

    for next in following {
        let next = next.as_ref();
        if args.len() >= max || is_flag(next) {
            break;
        }
        args.push(next.to_string());
        consumed += 1;
    }

    if args.len() < usize::from(spec.min_args) {
        return Err(ParseError::MissingArguments(spec.error_name()));
    }

    Ok((args, consumed))
}

/// Outcome of a successful parse
#[derive(Debug, Clone)]
pub struct ParseResult<'p> {
    parser: &'p ArgumentParser,
    program_name: String,
    standalone_args: Vec<String>,
    flag_args: Vec<Vec<String>>,
    seen: BTreeSet<usize>,
}

impl<'p> ParseResult<'p> {
    /// The parser that produced this result
    pub fn parser(&self) -> &'p ArgumentParser {
        self.parser
    }

    /// First element of the argument vector
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Tokens that were not flag syntax, in input order
    pub fn standalone_args(&self) -> &[String] {
        &self.standalone_args
    }

    /// Whether a declared flag with this identity was given
    pub fn contains_flag<'a>(&self, id: impl Into<FlagId<'a>>) -> bool {
        self.parser
            .find(id.into())
            .is_some_and(|index| self.seen.contains(&index))
    }

    /// Arguments collected for a declared flag.
    ///
    /// A declared flag that was not given yields an empty slice.
    pub fn flag_args<'a>(&self, id: impl Into<FlagId<'a>>) -> Result<&[String], QueryError> {
        let id = id.into();
        self.parser
            .find(id)
            .map(|index| self.flag_args[index].as_slice())
            .ok_or_else(|| QueryError::UnknownFlag(id.to_string()))
    }

    /// Specs of the flags that were given, in declaration order, with their arguments
    pub fn seen_flags(&self) -> impl Iterator<Item = (&'p FlagSpec, &[String])> + '_ {
        let parser = self.parser;
        let flag_args = &self.flag_args;
        self.seen
            .iter()
            .map(move |&index| (&parser.flags[index], flag_args[index].as_slice()))
    }
}
