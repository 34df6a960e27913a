use gpl::{Color, Point, Shape, ShapeRequest, Surface};

use crate::constants::{BACKGROUND, MARKER_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: i64 = SCREEN_WIDTH as i64;
const HEIGHT: i64 = SCREEN_HEIGHT as i64;

/// Framebuffer the viewer window shows.
pub struct Display {
    pixels: Vec<u32>,
    // Set by every drawing call, cleared by the window loop
    pub needs_redraw: bool,
}

impl Display {
    pub fn new() -> Self {
        Display {
            pixels: vec![BACKGROUND; SCREEN_WIDTH * SCREEN_HEIGHT],
            needs_redraw: true,
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
        self.needs_redraw = true;
    }

    /// Row-major buffer in the format minifb expects.
    pub fn buffer(&self) -> &[u32] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn pixel(&self, x: i64, y: i64) -> Option<u32> {
        index(x, y).map(|i| self.pixels[i])
    }

    fn plot(&mut self, x: i64, y: i64, color: u32) {
        if let Some(i) = index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn hline(&mut self, x0: i64, x1: i64, y: i64, color: u32) {
        // Row entirely off screen
        if !(0..HEIGHT).contains(&y) {
            return;
        }
        // Order the ends and clip them to the screen
        let (x0, x1) = (x0.min(x1).max(0), x0.max(x1).min(WIDTH - 1));
        for x in x0..=x1 {
            self.plot(x, y, color);
        }
    }

    fn vline(&mut self, x: i64, y0: i64, y1: i64, color: u32) {
        // Column entirely off screen
        if !(0..WIDTH).contains(&x) {
            return;
        }
        let (y0, y1) = (y0.min(y1).max(0), y0.max(y1).min(HEIGHT - 1));
        for y in y0..=y1 {
            self.plot(x, y, color);
        }
    }

    /// Top-left corner at `origin`; negative sizes grow the other way.
    pub fn rectangle(&mut self, origin: Point, width: i32, height: i32, color: u32, filled: bool) {
        let (x0, y0) = (i64::from(origin.x), i64::from(origin.y));
        // Opposite corner, widened to i64 so huge sizes cannot overflow
        let (x1, y1) = (x0 + i64::from(width), y0 + i64::from(height));

        // Interior first, row by row, only over visible rows
        if filled {
            for y in y0.min(y1).max(0)..=y0.max(y1).min(HEIGHT - 1) {
                self.hline(x0, x1, y, color);
            }
        }
        // Outline: top, bottom, left, right
        self.hline(x0, x1, y0, color);
        self.hline(x0, x1, y1, color);
        self.vline(x0, y0, y1, color);
        self.vline(x1, y0, y1, color);
        self.needs_redraw = true;
    }

    /// Scanline circle, only visiting rows that are on screen.
    pub fn circle(&mut self, center: Point, radius: i32, color: u32, filled: bool) {
        let r = i64::from(radius).abs();
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));

        for y in (cy - r).max(0)..=(cy + r).min(HEIGHT - 1) {
            // Distance from the centre row and the circle's half-width there
            let dy = (y - cy).abs();
            let span = half_width(r, dy);
            if filled {
                // Whole chord
                self.hline(cx - span, cx + span, y, color);
            } else {
                // Row further from the centre bounds this row's ring segment
                let inner = if dy == r { -1 } else { half_width(r, dy + 1) };
                // At least one pixel per side, even where the ring is steep
                let inner = inner.min(span - 1);
                // Left and right arcs of the ring
                self.hline(cx - span, cx - inner - 1, y, color);
                self.hline(cx + inner + 1, cx + span, y, color);
            }
        }
        self.needs_redraw = true;
    }

    /// Apex at `(x, y - side/2)`, base corners at `(x ± side/2, y)`.
    pub fn triangle(&mut self, origin: Point, side: i32, color: u32, filled: bool) {
        let half = i64::from(side / 2);
        let (cx, base) = (i64::from(origin.x), i64::from(origin.y));
        // Negative sides put the apex below the base
        let apex = base - half;

        for y in apex.min(base).max(0)..=apex.max(base).min(HEIGHT - 1) {
            // Both slanted edges are 45°, so the half-width equals the distance from the apex
            let t = (y - apex).abs();
            if filled || y == base {
                // Filled row, or the base edge
                self.hline(cx - t, cx + t, y, color);
            } else {
                // Just the two slanted edges
                self.plot(cx - t, y, color);
                self.plot(cx + t, y, color);
            }
        }
        self.needs_redraw = true;
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for Display {
    fn draw_shape(&mut self, request: &ShapeRequest) {
        let color = request.color.rgb();
        match request.shape {
            Shape::Rectangle { width, height } => {
                self.rectangle(request.origin, width, height, color, request.filled)
            }
            Shape::Circle { radius } => self.circle(request.origin, radius, color, request.filled),
            Shape::Triangle { side } => self.triangle(request.origin, side, color, request.filled),
        }
    }

    fn draw_point(&mut self, at: Point, color: Color) {
        // Small ring where the pen landed
        self.circle(at, MARKER_RADIUS, color.rgb(), false);
    }

    fn clear_surface(&mut self) {
        self.clear();
    }
}

fn index(x: i64, y: i64) -> Option<usize> {
    if (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y) {
        Some((y * WIDTH + x) as usize)
    } else {
        None
    }
}

/// Half-width of a circle of radius `r` at `dy` rows from its centre.
fn half_width(r: i64, dy: i64) -> i64 {
    ((r * r - dy * dy).max(0) as f64).sqrt() as i64
}
