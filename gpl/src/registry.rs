/// Closed set of GPL commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Run,
    MoveTo,
    DrawTo,
    Clear,
    Reset,
    Rectangle,
    Circle,
    Triangle,
    Pen,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    None,
    IntegerList,
    /// Single token out of a fixed set
    Enumerated(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub kind: CommandKind,
    pub name: &'static str,
    pub arity: usize,
    pub params: ParamKind,
    pub usage: &'static str,
}

pub const PEN_COLORS: &[&str] = &["red", "green", "blue", "cyan", "magenta", "yellow"];
pub const FILL_MODES: &[&str] = &["on", "off"];

static COMMANDS: [CommandDescriptor; 10] = [
    CommandDescriptor::bare(CommandKind::Run, "run"),
    CommandDescriptor::integers(CommandKind::MoveTo, "moveto", 2, "moveto {x}, {y}"),
    CommandDescriptor::integers(CommandKind::DrawTo, "drawto", 2, "drawto {x}, {y}"),
    CommandDescriptor::bare(CommandKind::Clear, "clear"),
    CommandDescriptor::bare(CommandKind::Reset, "reset"),
    CommandDescriptor::integers(CommandKind::Rectangle, "rectangle", 2, "rectangle {width}, {height}"),
    CommandDescriptor::integers(CommandKind::Circle, "circle", 1, "circle {radius}"),
    CommandDescriptor::integers(CommandKind::Triangle, "triangle", 1, "triangle {side-length}"),
    CommandDescriptor::enumerated(
        CommandKind::Pen,
        "pen",
        PEN_COLORS,
        "pen {red|green|blue|cyan|magenta|yellow}",
    ),
    CommandDescriptor::enumerated(CommandKind::Fill, "fill", FILL_MODES, "fill {on|off}"),
];

impl CommandDescriptor {
    const fn bare(kind: CommandKind, name: &'static str) -> Self {
        Self { kind, name, arity: 0, params: ParamKind::None, usage: name }
    }

    const fn integers(kind: CommandKind, name: &'static str, arity: usize, usage: &'static str) -> Self {
        Self { kind, name, arity, params: ParamKind::IntegerList, usage }
    }

    const fn enumerated(
        kind: CommandKind,
        name: &'static str,
        allowed: &'static [&'static str],
        usage: &'static str,
    ) -> Self {
        Self { kind, name, arity: 1, params: ParamKind::Enumerated(allowed), usage }
    }
}

impl CommandKind {
    pub fn descriptor(&self) -> &'static CommandDescriptor {
        COMMANDS
            .iter()
            .find(|d| d.kind == *self)
            .unwrap_or_else(|| unreachable!("{:?} has no registry entry", self))
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Run => "Run the loaded program",
            Self::MoveTo => "Move the pen without drawing",
            Self::DrawTo => "Move the pen and mark the new position",
            Self::Clear => "Erase the drawing surface",
            Self::Reset => "Move the pen back to the origin",
            Self::Rectangle => "Rectangle anchored at the pen",
            Self::Circle => "Circle centred on the pen",
            Self::Triangle => "Triangle standing on the pen",
            Self::Pen => "Change the pen color",
            Self::Fill => "Toggle solid fill for shapes",
        }
    }
}

/// All descriptors, in declaration order.
pub fn all() -> &'static [CommandDescriptor] {
    &COMMANDS
}

pub fn lookup(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|d| d.name == name)
}
