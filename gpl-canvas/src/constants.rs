pub const SCREEN_WIDTH: usize = 640;
pub const SCREEN_HEIGHT: usize = 480;

/// 0x00RRGGBB, same layout as `gpl::Color::rgb`
pub const BACKGROUND: u32 = 0xF0F0F0;

/// Radius of the marker `drawto` leaves behind
pub const MARKER_RADIUS: i32 = 1;
