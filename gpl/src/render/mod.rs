pub mod recorder;

use crate::pen::{Color, Point};
use crate::shape::ShapeRequest;

pub use recorder::{DrawOp, Recorder};

/// Anything that can turn draw requests into a picture.
pub trait Surface {
    fn draw_shape(&mut self, shape: &ShapeRequest);
    fn draw_point(&mut self, at: Point, color: Color);
    fn clear_surface(&mut self);
}
