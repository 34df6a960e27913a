use std::fmt;

use crate::diagnostic::Diagnostic;
use crate::registry::CommandKind;

/// Where a line came from: typed directly, or line `n` of a running program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineNumber {
    #[default]
    AdHoc,
    Program(usize),
}

impl LineNumber {
    pub fn is_ad_hoc(&self) -> bool {
        matches!(self, Self::AdHoc)
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdHoc => Ok(()),
            Self::Program(n) => write!(f, "[Line No. {}]", n),
        }
    }
}

/// Output of the lexer. Any input, however malformed, fits here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    pub line: LineNumber,
    /// Trimmed, lowercased text of the whole line
    pub source: String,
    pub command: String,
    pub raw_parameters: Vec<String>,
    /// Second whitespace-delimited token, as typed
    pub first_argument: Option<String>,
}

impl ParsedLine {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int(i32),
    Token(String),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Token(t) => f.write_str(t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    pub line: LineNumber,
    /// Matched or attempted command name
    pub command: String,
    pub kind: Option<CommandKind>,
    /// Typed values; only filled when the line validated
    pub parameters: Vec<Param>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LineResult {
    pub fn succeeded(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Execution-log text for every diagnostic, in order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|d| {
                let prefix = match self.line {
                    LineNumber::AdHoc => String::new(),
                    number => format!("{} ", number),
                };
                format!("{}{}\n\t{}", prefix, d.headline(), d.detail())
            })
            .collect()
    }
}
