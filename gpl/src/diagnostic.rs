use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMismatch {
    /// Arity > 0 but nothing supplied
    Missing,
    Insufficient,
    TooMany,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnknownCommand,
    ParamCountMismatch(CountMismatch),
    InvalidEnumToken,
    InvalidIntegerToken,
    NestedRunForbidden,
}

/// One validation failure on a line. `Display` renders the detail text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Command cannot be an empty string.")]
    EmptyCommand,

    #[error("'{text}' not a valid command.")]
    UnknownCommand { text: String },

    #[error("Please enter complete command.\n\tHint! {usage}")]
    MissingParams { usage: &'static str },

    #[error("Insufficient parameters supplied. Please enter complete command.\n\tHint! {usage}")]
    InsufficientParams { usage: &'static str },

    #[error("Too many parameters supplied. Please follow command format.\n\tHint! {usage}")]
    TooManyParams { usage: &'static str },

    #[error("'{token}' is not a valid param for command '{command}'.\n\tHint! Use any of {choices}", choices = quote_all(.allowed))]
    InvalidEnumToken {
        command: &'static str,
        token: String,
        allowed: &'static [&'static str],
    },

    #[error("Invalid parameter '{param}'. Command '{command}' only accepts integer parameters.")]
    InvalidIntegerToken { command: &'static str, param: String },

    #[error("A program cannot contain a 'run' command.")]
    NestedRun,
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::EmptyCommand | Self::UnknownCommand { .. } => DiagnosticKind::UnknownCommand,
            Self::MissingParams { .. } => DiagnosticKind::ParamCountMismatch(CountMismatch::Missing),
            Self::InsufficientParams { .. } => {
                DiagnosticKind::ParamCountMismatch(CountMismatch::Insufficient)
            }
            Self::TooManyParams { .. } => DiagnosticKind::ParamCountMismatch(CountMismatch::TooMany),
            Self::InvalidEnumToken { .. } => DiagnosticKind::InvalidEnumToken,
            Self::InvalidIntegerToken { .. } => DiagnosticKind::InvalidIntegerToken,
            Self::NestedRun => DiagnosticKind::NestedRunForbidden,
        }
    }

    pub fn headline(&self) -> &'static str {
        match self.kind() {
            DiagnosticKind::UnknownCommand => "Invalid Command",
            DiagnosticKind::ParamCountMismatch(_) => "Invalid Command Param",
            DiagnosticKind::InvalidEnumToken => "Invalid Command String Param",
            DiagnosticKind::InvalidIntegerToken => "Invalid Param Type",
            DiagnosticKind::NestedRunForbidden => "Recursive Run Found",
        }
    }

    pub fn detail(&self) -> String {
        self.to_string()
    }

    pub(crate) fn count_mismatch(supplied: usize, arity: usize, usage: &'static str) -> Option<Self> {
        if supplied == arity {
            None
        } else if supplied == 0 {
            Some(Self::MissingParams { usage })
        } else if supplied < arity {
            Some(Self::InsufficientParams { usage })
        } else {
            Some(Self::TooManyParams { usage })
        }
    }
}

fn quote_all(allowed: &[&str]) -> String {
    allowed
        .iter()
        .map(|token| format!("'{}'", token))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_mismatch_categories() {
        assert_eq!(Diagnostic::count_mismatch(2, 2, "moveto {x}, {y}"), None);
        assert_eq!(
            Diagnostic::count_mismatch(0, 2, "u").map(|d| d.kind()),
            Some(DiagnosticKind::ParamCountMismatch(CountMismatch::Missing))
        );
        assert_eq!(
            Diagnostic::count_mismatch(1, 2, "u").map(|d| d.kind()),
            Some(DiagnosticKind::ParamCountMismatch(CountMismatch::Insufficient))
        );
        assert_eq!(
            Diagnostic::count_mismatch(3, 2, "u").map(|d| d.kind()),
            Some(DiagnosticKind::ParamCountMismatch(CountMismatch::TooMany))
        );
        assert_eq!(
            Diagnostic::count_mismatch(1, 0, "run").map(|d| d.kind()),
            Some(DiagnosticKind::ParamCountMismatch(CountMismatch::TooMany))
        );
    }

    #[test]
    fn detail_carries_usage_hint() {
        let d = Diagnostic::InsufficientParams { usage: "moveto {x}, {y}" };
        assert!(d.detail().to_lowercase().contains("insufficient param"));
        assert!(d.detail().ends_with("Hint! moveto {x}, {y}"));
    }

    #[test]
    fn enum_detail_lists_choices() {
        let d = Diagnostic::InvalidEnumToken {
            command: "fill",
            token: "maybe".to_string(),
            allowed: &["on", "off"],
        };
        assert_eq!(
            d.detail(),
            "'maybe' is not a valid param for command 'fill'.\n\tHint! Use any of 'on', 'off'"
        );
        assert_eq!(d.headline(), "Invalid Command String Param");
    }
}
