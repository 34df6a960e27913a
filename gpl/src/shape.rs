use std::fmt;

use crate::pen::{Color, PenState, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle { width: i32, height: i32 },
    Circle { radius: i32 },
    Triangle { side: i32 },
}

/// A shape plus the pen state it was issued under.
///
/// Values are copied out of the pen, so later pen changes never reach a
/// request that has already been handed to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRequest {
    pub shape: Shape,
    pub origin: Point,
    pub color: Color,
    pub filled: bool,
}

impl ShapeRequest {
    fn snapshot(pen: &PenState, shape: Shape) -> Self {
        Self { shape, origin: pen.position, color: pen.color, filled: pen.fill }
    }

    pub fn rectangle(pen: &PenState, width: i32, height: i32) -> Self {
        Self::snapshot(pen, Shape::Rectangle { width, height })
    }

    pub fn circle(pen: &PenState, radius: i32) -> Self {
        Self::snapshot(pen, Shape::Circle { radius })
    }

    pub fn triangle(pen: &PenState, side: i32) -> Self {
        Self::snapshot(pen, Shape::Triangle { side })
    }
}

impl fmt::Display for ShapeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Rectangle { width, height } => write!(f, "rectangle {}x{}", width, height)?,
            Shape::Circle { radius } => write!(f, "circle r={}", radius)?,
            Shape::Triangle { side } => write!(f, "triangle s={}", side)?,
        }
        write!(f, " at {} in {}", self.origin, self.color)?;
        if self.filled {
            f.write_str(" (filled)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_a_snapshot() {
        let mut pen = PenState::new();
        pen.move_to(Point::new(10, 20));
        pen.set_color(Color::Green);
        let request = ShapeRequest::circle(&pen, 5);

        pen.set_color(Color::Blue);
        pen.move_to(Point::new(0, 0));
        pen.set_fill(true);

        assert_eq!(request.color, Color::Green);
        assert_eq!(request.origin, Point::new(10, 20));
        assert!(!request.filled);
    }

    #[test]
    fn display() {
        let mut pen = PenState::new();
        pen.set_fill(true);
        let request = ShapeRequest::rectangle(&pen, 3, 4);
        assert_eq!(request.to_string(), "rectangle 3x4 at (0, 0) in red (filled)");
    }
}
