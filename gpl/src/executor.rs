use std::fmt;

use log::{debug, warn};

use crate::ir::{LineResult, Param};
use crate::pen::{Color, PenState, Point};
use crate::registry::CommandKind;
use crate::shape::ShapeRequest;

/// What the surrounding session has to do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    Nothing,
    /// Cursor marker left by `drawto`
    Point { at: Point, color: Color },
    Shape(ShapeRequest),
    Clear,
    RunProgram,
}

/// Non-fatal notice; drawing goes ahead regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    Unpositioned,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unpositioned => f.write_str("Warning! No position defined, drawing from (0, 0)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Execution {
    pub effect: Effect,
    pub advisory: Option<Advisory>,
}

impl From<Effect> for Execution {
    fn from(effect: Effect) -> Self {
        Self { effect, advisory: None }
    }
}

/// Applies a validated line to the pen.
///
/// Lines that failed validation do nothing. A parameter shape the validator
/// cannot produce means the two disagree, and panics.
pub fn execute(result: &LineResult, pen: &mut PenState) -> Execution {
    let Some(kind) = result.kind.filter(|_| result.succeeded()) else {
        return Execution::default();
    };
    debug!("executing {} {:?}", kind.name(), result.parameters);

    // Drawing before any moveto/drawto still works, from the origin
    let advisory = match kind {
        CommandKind::DrawTo | CommandKind::Rectangle | CommandKind::Circle | CommandKind::Triangle
            if !pen.positioned =>
        {
            warn!("{} issued before the pen was positioned", kind.name());
            Some(Advisory::Unpositioned)
        }
        _ => None,
    };

    let effect = match (kind, result.parameters.as_slice()) {
        // The session re-enters itself with the loaded program
        (CommandKind::Run, []) => Effect::RunProgram,
        (CommandKind::MoveTo, [Param::Int(x), Param::Int(y)]) => {
            pen.move_to(Point::new(*x, *y));
            Effect::Nothing
        }
        // Same move as moveto, plus a marker at the new spot
        (CommandKind::DrawTo, [Param::Int(x), Param::Int(y)]) => {
            pen.move_to(Point::new(*x, *y));
            Effect::Point { at: pen.position, color: pen.color }
        }
        // Visual only: the pen keeps position and color
        (CommandKind::Clear, []) => Effect::Clear,
        // Position only; color and fill stay
        (CommandKind::Reset, []) => {
            pen.reset();
            Effect::Nothing
        }
        // Shapes copy the pen state and leave the pen where it is
        (CommandKind::Rectangle, [Param::Int(width), Param::Int(height)]) => {
            Effect::Shape(ShapeRequest::rectangle(pen, *width, *height))
        }
        (CommandKind::Circle, [Param::Int(radius)]) => Effect::Shape(ShapeRequest::circle(pen, *radius)),
        (CommandKind::Triangle, [Param::Int(side)]) => Effect::Shape(ShapeRequest::triangle(pen, *side)),
        (CommandKind::Pen, [Param::Token(token)]) => {
            let color = Color::from_name(token)
                .unwrap_or_else(|| panic!("validator accepted unknown pen color '{}'", token));
            pen.set_color(color);
            Effect::Nothing
        }
        // Validator only lets "on" and "off" through
        (CommandKind::Fill, [Param::Token(mode)]) => {
            pen.set_fill(mode == "on");
            Effect::Nothing
        }
        (kind, params) => panic!("validator accepted '{}' with {:?}", kind.name(), params),
    };

    Execution { effect, advisory }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::LineNumber;
    use crate::parser::parse_line;
    use crate::shape::Shape;

    fn exec(line: &str, pen: &mut PenState) -> Execution {
        let result = parse_line(line, LineNumber::AdHoc);
        assert!(result.succeeded(), "{} -> {:?}", line, result.diagnostics);
        execute(&result, pen)
    }

    #[test]
    fn moveto_positions_silently() {
        let mut pen = PenState::new();
        let execution = exec("moveto 30, 40", &mut pen);
        assert_eq!(execution, Execution::default());
        assert_eq!(pen.position, Point::new(30, 40));
        assert!(pen.positioned);
    }

    #[test]
    fn drawto_moves_and_marks() {
        let mut pen = PenState::new();
        let execution = exec("drawto 100, 100", &mut pen);
        assert_eq!(pen.position, Point::new(100, 100));
        assert_eq!(execution.effect, Effect::Point { at: Point::new(100, 100), color: Color::Red });
        assert_eq!(execution.advisory, Some(Advisory::Unpositioned));

        let again = exec("drawto 5, 5", &mut pen);
        assert_eq!(again.advisory, None);
    }

    #[test]
    fn shapes_use_pen_without_moving_it() {
        let mut pen = PenState::new();
        exec("moveto 10, 10", &mut pen);
        exec("pen cyan", &mut pen);
        exec("fill on", &mut pen);

        let execution = exec("triangle 20", &mut pen);
        assert_eq!(
            execution.effect,
            Effect::Shape(ShapeRequest {
                shape: Shape::Triangle { side: 20 },
                origin: Point::new(10, 10),
                color: Color::Cyan,
                filled: true,
            })
        );
        assert_eq!(execution.advisory, None);
        assert_eq!(pen.position, Point::new(10, 10));
    }

    #[test]
    fn unpositioned_shape_still_draws() {
        let mut pen = PenState::new();
        let execution = exec("circle 50", &mut pen);
        assert_eq!(execution.advisory, Some(Advisory::Unpositioned));
        assert!(matches!(execution.effect, Effect::Shape(ShapeRequest { origin: Point::ORIGIN, .. })));
    }

    #[test]
    fn clear_keeps_pen() {
        let mut pen = PenState::new();
        exec("moveto 7, 8", &mut pen);
        exec("pen blue", &mut pen);
        let before = pen.clone();
        assert_eq!(exec("clear", &mut pen).effect, Effect::Clear);
        assert_eq!(pen, before);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut pen = PenState::new();
        exec("moveto 7, 8", &mut pen);
        exec("pen green", &mut pen);
        exec("reset", &mut pen);
        assert_eq!(pen.position, Point::ORIGIN);
        exec("reset", &mut pen);
        assert_eq!(pen.position, Point::ORIGIN);
        assert_eq!(pen.color, Color::Green);
    }

    #[test]
    fn fill_toggles() {
        let mut pen = PenState::new();
        exec("fill on", &mut pen);
        assert!(pen.fill);
        exec("FILL OFF", &mut pen);
        assert!(!pen.fill);
    }

    #[test]
    fn run_asks_for_program() {
        let mut pen = PenState::new();
        assert_eq!(exec("run", &mut pen).effect, Effect::RunProgram);
    }

    #[test]
    fn failed_lines_are_inert() {
        let mut pen = PenState::new();
        let result = parse_line("moveto 1", LineNumber::AdHoc);
        assert_eq!(execute(&result, &mut pen), Execution::default());
        assert_eq!(pen, PenState::new());
    }

    #[test]
    #[should_panic(expected = "unknown pen color")]
    fn unmapped_color_is_fatal() {
        let result = LineResult {
            line: LineNumber::AdHoc,
            command: "pen".to_string(),
            kind: Some(CommandKind::Pen),
            parameters: vec![Param::Token("black".to_string())],
            diagnostics: Vec::new(),
        };
        execute(&result, &mut PenState::new());
    }
}
