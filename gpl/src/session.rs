use std::fmt;

use log::{debug, info};

use crate::executor::{self, Effect};
use crate::ir::{LineNumber, LineResult};
use crate::parser::parse_line;
use crate::pen::PenState;
use crate::render::Surface;
use crate::report::{LineReport, Reporter};

/// One drawing session: a pen, a surface, a log and the loaded program.
pub struct Session<S, R> {
    pen: PenState,
    surface: S,
    reporter: R,
    program: String,
}

impl<S: Surface, R: Reporter> Session<S, R> {
    pub fn new(surface: S, reporter: R) -> Self {
        Self { pen: PenState::new(), surface, reporter, program: String::new() }
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Replaces the program an ad-hoc `run` will execute.
    pub fn load_program(&mut self, text: impl Into<String>) {
        self.program = text.into();
    }

    /// Runs every line of `text` in order. A failing line is reported and
    /// skipped; the rest still run.
    pub fn run_program(&mut self, text: &str) -> Vec<LineResult> {
        let results: Vec<_> = text
            .lines()
            .enumerate()
            // a program line can never trigger another run, so only the line result matters
            .map(|(i, line)| self.process(line, LineNumber::Program(i + 1)).line)
            .collect();
        info!("{}", RunSummary::from(results.as_slice()));
        results
    }

    /// Runs a single line typed outside any program.
    ///
    /// For `run` the outcome also carries every line of the loaded program,
    /// and the history entry only reads success when all of them passed.
    pub fn execute_command(&mut self, line: &str) -> CommandOutcome {
        let outcome = self.process(line, LineNumber::AdHoc);
        self.reporter.history(line.trim(), outcome.succeeded());
        outcome
    }

    fn process(&mut self, line: &str, number: LineNumber) -> CommandOutcome {
        let result = parse_line(line, number);
        self.reporter.line(&LineReport::from(&result));
        if !result.succeeded() {
            debug!("skipping {:?}: {} diagnostic(s)", line, result.diagnostics.len());
            return CommandOutcome { line: result, program: None };
        }

        let execution = executor::execute(&result, &mut self.pen);
        if let Some(advisory) = execution.advisory {
            self.reporter.advisory(number, &advisory.to_string());
        }

        // hand the effect over to the surface (or re-enter for `run`)
        let program = match execution.effect {
            Effect::Nothing => None,
            Effect::Point { at, color } => {
                self.surface.draw_point(at, color);
                None
            }
            Effect::Shape(request) => {
                self.surface.draw_shape(&request);
                None
            }
            Effect::Clear => {
                self.surface.clear_surface();
                None
            }
            Effect::RunProgram => {
                let text = self.program.clone();
                Some(self.run_program(&text))
            }
        };
        CommandOutcome { line: result, program }
    }
}

/// Result of one ad-hoc command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The typed line itself
    pub line: LineResult,
    /// Per-line results of the program an ad-hoc `run` executed
    pub program: Option<Vec<LineResult>>,
}

impl CommandOutcome {
    /// The line validated and, for `run`, every program line did too.
    pub fn succeeded(&self) -> bool {
        let program_ok = self
            .program
            .as_ref()
            .is_none_or(|lines| lines.iter().all(LineResult::succeeded));
        self.line.succeeded() && program_ok
    }

    pub fn summary(&self) -> Option<RunSummary> {
        self.program.as_deref().map(RunSummary::from)
    }
}

/// Aggregate outcome of a program run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub total: usize,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

impl From<&[LineResult]> for RunSummary {
    fn from(results: &[LineResult]) -> Self {
        Self {
            succeeded: results.iter().filter(|r| r.succeeded()).count(),
            total: results.len(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} lines succeeded", self.succeeded, self.total)
    }
}
