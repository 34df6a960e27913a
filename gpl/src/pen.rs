use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pen palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    #[default]
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
}

impl Color {
    pub fn all() -> [Self; 6] {
        [Self::Red, Self::Green, Self::Blue, Self::Cyan, Self::Magenta, Self::Yellow]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// 0x00RRGGBB
    pub fn rgb(&self) -> u32 {
        match self {
            Self::Red => 0xFF0000,
            Self::Green => 0x008000,
            Self::Blue => 0x0000FF,
            Self::Cyan => 0x00FFFF,
            Self::Magenta => 0xFF00FF,
            Self::Yellow => 0xFFFF00,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drawing cursor of one session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PenState {
    pub position: Point,
    pub color: Color,
    pub fill: bool,
    /// Set once `moveto` or `drawto` has placed the pen
    pub positioned: bool,
}

impl PenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
        self.positioned = true;
    }

    /// Back to the origin. Color and fill mode stay.
    pub fn reset(&mut self) {
        self.position = Point::ORIGIN;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_fill(&mut self, fill: bool) {
        self.fill = fill;
    }
}
