pub mod line;

pub use line::{LineNumber, LineResult, Param, ParsedLine};
