use crate::diagnostic::Diagnostic;
use crate::ir::{LineResult, Param, ParsedLine};
use crate::registry::{self, CommandDescriptor, CommandKind, ParamKind};

/// Checks a tokenized line against the registry.
///
/// Every applicable check runs and contributes its diagnostics; the line
/// succeeds only when none were produced.
pub fn validate(parsed: &ParsedLine) -> LineResult {
    let mut result = LineResult {
        line: parsed.line,
        command: parsed.command.clone(),
        kind: None,
        parameters: Vec::new(),
        diagnostics: Vec::new(),
    };

    if parsed.is_empty() {
        result.diagnostics.push(Diagnostic::EmptyCommand);
        return result;
    }

    let Some(descriptor) = registry::lookup(&parsed.command) else {
        result.diagnostics.push(Diagnostic::UnknownCommand { text: parsed.source.clone() });
        return result;
    };
    result.kind = Some(descriptor.kind);

    let parameters = check_parameters(descriptor, parsed, &mut result.diagnostics);

    if descriptor.kind == CommandKind::Run && !parsed.line.is_ad_hoc() {
        result.diagnostics.push(Diagnostic::NestedRun);
    }

    if result.succeeded() {
        result.parameters = parameters;
    }
    result
}

fn check_parameters(
    descriptor: &CommandDescriptor,
    parsed: &ParsedLine,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Param> {
    let supplied = parsed.raw_parameters.len();
    if let Some(mismatch) = Diagnostic::count_mismatch(supplied, descriptor.arity, descriptor.usage) {
        diagnostics.push(mismatch);
        return Vec::new();
    }

    match descriptor.params {
        ParamKind::None => Vec::new(),
        ParamKind::Enumerated(allowed) => {
            let token = parsed.first_argument.clone().unwrap_or_default();
            if allowed.contains(&token.as_str()) {
                vec![Param::Token(token)]
            } else {
                diagnostics.push(Diagnostic::InvalidEnumToken {
                    command: descriptor.name,
                    token,
                    allowed,
                });
                Vec::new()
            }
        }
        ParamKind::IntegerList => {
            let mut values = Vec::with_capacity(descriptor.arity);
            for raw in parsed.raw_parameters.iter().take(descriptor.arity) {
                match raw.parse::<i32>() {
                    Ok(value) => values.push(Param::Int(value)),
                    Err(_) => diagnostics.push(Diagnostic::InvalidIntegerToken {
                        command: descriptor.name,
                        param: raw.clone(),
                    }),
                }
            }
            values
        }
    }
}
