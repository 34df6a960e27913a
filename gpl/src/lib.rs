//! Interpreter for GPL, a line-oriented pen drawing language.
//!
//! A line flows lexer → validator → executor; the [`Session`] drives that
//! pipeline over whole programs and forwards draw requests to a [`Surface`].

pub mod diagnostic;
pub mod error;
pub mod executor;
pub mod ir;
pub mod parser;
pub mod pen;
pub mod registry;
pub mod render;
pub mod report;
pub mod session;
pub mod shape;
pub mod storage;

pub use diagnostic::{CountMismatch, Diagnostic, DiagnosticKind};
pub use error::GplError;
pub use ir::{LineNumber, LineResult, Param, ParsedLine};
pub use pen::{Color, PenState, Point};
pub use render::{DrawOp, Recorder, Surface};
pub use report::{ConsoleReporter, LineReport, Reporter, Transcript};
pub use session::{CommandOutcome, RunSummary, Session};
pub use shape::{Shape, ShapeRequest};
