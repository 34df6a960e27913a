use crate::ir::{LineNumber, ParsedLine};

/// Splits one line into command keyword and comma separated parameters.
///
/// Case is folded before anything else. The keyword ends at the first
/// whitespace run; the remainder loses all whitespace and is split on `,`.
/// No validation happens here.
pub fn tokenize(line: &str, number: LineNumber) -> ParsedLine {
    let source = line.trim().to_lowercase();

    let (command, rest) = match source.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (source.as_str(), ""),
    };

    let rest: String = rest.split_whitespace().collect();
    let raw_parameters = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(',').map(|p| p.trim().to_string()).collect()
    };

    let first_argument = source.split_whitespace().nth(1).map(str::to_string);

    ParsedLine {
        line: number,
        command: command.to_string(),
        raw_parameters,
        first_argument,
        source,
    }
}
