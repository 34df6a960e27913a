use std::fmt;

use crate::pen::{Color, Point};
use crate::shape::ShapeRequest;

use super::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Shape(ShapeRequest),
    Point { at: Point, color: Color },
    Clear,
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(request) => write!(f, "{}", request),
            Self::Point { at, color } => write!(f, "point at {} in {}", at, color),
            Self::Clear => f.write_str("clear"),
        }
    }
}

/// Surface that keeps every request in order instead of drawing.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeRequest> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Shape(request) => Some(request),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn draw_shape(&mut self, shape: &ShapeRequest) {
        self.ops.push(DrawOp::Shape(*shape));
    }

    fn draw_point(&mut self, at: Point, color: Color) {
        self.ops.push(DrawOp::Point { at, color });
    }

    fn clear_surface(&mut self) {
        self.ops.push(DrawOp::Clear);
    }
}
