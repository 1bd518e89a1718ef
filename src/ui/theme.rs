//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Background gradient, dark blue top to lighter blue bottom
pub const BG_TOP: Color32 = Color32::from_rgb(25, 25, 51);
pub const BG_BOTTOM: Color32 = Color32::from_rgb(51, 51, 102);

// Cell colors
pub const CELL_BG: Color32 = Color32::from_rgb(38, 38, 63);
pub const CELL_HOVER: Color32 = Color32::from_rgb(63, 63, 89);
pub const CELL_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 90);

// Mark colors
pub const X_COLOR: Color32 = Color32::from_rgb(229, 76, 76);
pub const O_COLOR: Color32 = Color32::from_rgb(76, 178, 229);

// Grid and text
pub const GRID_LINE: Color32 = Color32::from_rgb(102, 102, 153);
pub const STATUS_TEXT: Color32 = Color32::WHITE;
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 214, 90);

// Banner card
pub const BANNER_BG: Color32 = Color32::from_rgb(45, 48, 80);
pub const BANNER_TEXT: Color32 = Color32::from_rgb(240, 240, 245);

// Sizes
pub const CELL_SIZE: f32 = 120.0;
pub const STATUS_BAR_HEIGHT: f32 = 60.0;
pub const CANVAS_WIDTH: f32 = CELL_SIZE * 3.0;
pub const CANVAS_HEIGHT: f32 = CELL_SIZE * 3.0 + STATUS_BAR_HEIGHT;

pub const CELL_INSET: f32 = 5.0;
pub const SHADOW_OFFSET: f32 = 3.0;
pub const X_HALF_LEN: f32 = 30.0;
pub const O_RADIUS: f32 = 25.0;
pub const MARK_STROKE_WIDTH: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const STATUS_FONT_SIZE: f32 = 24.0;
