//! Token classification
//!
//! Decides from syntax alone whether a raw token is a flag occurrence. The
//! flag schema is not consulted here.

/// A token recognised as a flag, with any value written into the same token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagToken {
    pub short: Option<char>,
    pub long: Option<String>,
    pub value: Option<String>,
}

/// Classification of a single raw token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Not flag syntax; collected as a standalone argument
    Positional,
    Flag(FlagToken),
}

impl Classified {
    pub fn is_flag(&self) -> bool {
        matches!(self, Classified::Flag(_))
    }
}

/// Classify one token.
///
/// - `-x` short flag
/// - `-xVALUE` short flag with inline value
/// - `--name` long flag
/// - `--name=VALUE` long flag with inline value
/// - `--`, `---name`, `--1` and anything not starting with `-` are positional
pub fn classify(token: &str) -> Classified {
    let mut chars = token.char_indices();

    match chars.next() {
        Some((_, '-')) => {}
        _ => return Classified::Positional,
    }
    let (second_at, second) = match chars.next() {
        Some(pair) => pair,
        None => return Classified::Positional,
    };
    let rest_at = second_at + second.len_utf8();
    let third = chars.next().map(|(_, c)| c);

    if second == '-' {
        return match third {
            Some(c) if c.is_ascii_alphabetic() => classify_long(&token[rest_at..]),
            _ => Classified::Positional,
        };
    }

    if !second.is_ascii_alphabetic() {
        return Classified::Positional;
    }

    let value = match third {
        None => None,
        Some(_) => Some(token[rest_at..].to_string()),
    };
    Classified::Flag(FlagToken {
        short: Some(second),
        long: None,
        value,
    })
}

/// Split the part after `--` at the first `=`
fn classify_long(body: &str) -> Classified {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (body, None),
    };
    Classified::Flag(FlagToken {
        short: None,
        long: Some(name.to_string()),
        value,
    })
}

/// Shorthand for `classify(token).is_flag()`
pub fn is_flag(token: &str) -> bool {
    classify(token).is_flag()
}
