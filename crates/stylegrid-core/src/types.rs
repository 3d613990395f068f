// File: crates/stylegrid-core/src/types.rs
// Summary: Shared sizes, font sizes and paddings used by layout and rendering.

/// Default figure width in pixels (14.8 in at 100 dpi).
pub const FIGURE_WIDTH: i32 = 1480;
/// Default figure height in pixels (2.8 in at 100 dpi).
pub const FIGURE_HEIGHT: i32 = 280;

/// Number of panel rows/columns in every figure.
pub const GRID_ROWS: usize = 2;
pub const GRID_COLS: usize = 2;

pub const SUPTITLE_FONT_SIZE: f32 = 14.0;
pub const PANEL_TITLE_FONT_SIZE: f32 = 10.0;
pub const LABEL_FONT_SIZE: f32 = 9.0;
pub const TICK_FONT_SIZE: f32 = 8.0;
pub const LEGEND_FONT_SIZE: f32 = 7.0;
/// Tick mark length in pixels, drawn outside the plot area.
pub const TICK_LENGTH: f32 = 3.5;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}
