pub mod lexer;
pub mod validator;

use crate::ir::{LineNumber, LineResult};

/// Text to validated line: tokenize, then check against the registry.
pub fn parse_line(line: &str, number: LineNumber) -> LineResult {
    let parsed = lexer::tokenize(line, number);
    validator::validate(&parsed)
}
