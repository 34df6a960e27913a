use std::fmt;

use crate::ir::{LineNumber, LineResult};

const SEPARATOR: &str = "_____________________________________________";

/// One processed line, ready for an execution log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    pub line: LineNumber,
    pub succeeded: bool,
    pub message: String,
}

impl From<&LineResult> for LineReport {
    fn from(result: &LineResult) -> Self {
        let message = if result.succeeded() {
            match result.line {
                LineNumber::AdHoc => format!("{} ok", result.command),
                number => format!("{} {} ok", number, result.command),
            }
        } else {
            result
                .messages()
                .into_iter()
                .map(|m| format!("{}\n{}", m, SEPARATOR))
                .collect::<Vec<_>>()
                .join("\n")
        };
        Self { line: result.line, succeeded: result.succeeded(), message }
    }
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives structured results; presentation is up to the implementor.
pub trait Reporter {
    fn line(&mut self, report: &LineReport);

    fn advisory(&mut self, line: LineNumber, message: &str);

    /// Ad-hoc command as typed, tagged with its outcome.
    fn history(&mut self, command: &str, succeeded: bool);
}

/// Prints failures to stderr and everything else to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub quiet: bool,
}

impl Reporter for ConsoleReporter {
    fn line(&mut self, report: &LineReport) {
        if !report.succeeded {
            eprintln!("{}", report);
        } else if !self.quiet {
            println!("{}", report);
        }
    }

    fn advisory(&mut self, line: LineNumber, message: &str) {
        match line {
            LineNumber::AdHoc => println!("{}", message),
            number => println!("{} {}", number, message),
        }
    }

    fn history(&mut self, command: &str, succeeded: bool) {
        println!("{}", history_entry(command, succeeded));
    }
}

pub fn history_entry(command: &str, succeeded: bool) -> String {
    let tag = if succeeded { "[SUCCESS]" } else { "[FAILURE]" };
    format!("{}- {}", tag, command)
}

/// Keeps everything in memory.
#[derive(Debug, Default)]
pub struct Transcript {
    pub lines: Vec<LineReport>,
    pub advisories: Vec<(LineNumber, String)>,
    pub history: Vec<String>,
}

impl Reporter for Transcript {
    fn line(&mut self, report: &LineReport) {
        self.lines.push(report.clone());
    }

    fn advisory(&mut self, line: LineNumber, message: &str) {
        self.advisories.push((line, message.to_string()));
    }

    fn history(&mut self, command: &str, succeeded: bool) {
        self.history.push(history_entry(command, succeeded));
    }
}
