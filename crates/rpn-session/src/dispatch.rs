//! Token classification.
//!
//! Categories are tried in a fixed order and the first match wins:
//! session commands, then library operators and functions, then numeric
//! literals. Anything left over is an invalid token.

use rpn_stdlib::{CommandInfo, LibraryRegistry, parse_number};

/// Session commands (single-letter, case-sensitive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `q` - end the session, dropping the rest of the line.
    Quit,
    /// `h` - print the help text.
    Help,
    /// `c` - empty the stack.
    Clear,
    /// `p` - print the top of stack.
    Peek,
    /// `s` - print the fixed-height stack window.
    Show,
}

impl Command {
    /// Match a token against the command letters.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "q" => Some(Command::Quit),
            "h" => Some(Command::Help),
            "c" => Some(Command::Clear),
            "p" => Some(Command::Peek),
            "s" => Some(Command::Show),
            _ => None,
        }
    }
}

/// A classified token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token<'a> {
    Command(Command),
    /// Operator or named function provided by a library.
    Operation(CommandInfo),
    Number(f64),
    Invalid(&'a str),
}

/// Classify one token.
pub fn classify<'a>(registry: &LibraryRegistry, token: &'a str) -> Token<'a> {
    if let Some(cmd) = Command::parse(token) {
        return Token::Command(cmd);
    }
    if let Some(info) = registry.lookup(token) {
        return Token::Operation(*info);
    }
    match parse_number(token) {
        Some(value) => Token::Number(value),
        None => Token::Invalid(token),
    }
}

/// Split one input line into tokens.
///
/// The line ends at the first `\r` or `\n`; tokens are separated by runs of
/// spaces and tabs.
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    let line = line.split(['\r', '\n']).next().unwrap_or_default();
    line.split([' ', '\t']).filter(|token| !token.is_empty())
}
