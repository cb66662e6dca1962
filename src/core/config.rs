/// Drawing defaults and demo constants.

use super::types::Color;

// --- Stroke / shape defaults ---
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
pub const DEFAULT_STROKE: Color = Color::BLACK;
pub const HEART_STROKE: Color = Color::RED;

// --- Center marker ---
pub const MARK_COLOR: Color = Color::RED;
pub const MARK_SIZE: f64 = 20.0;
pub const MARK_LINE_WIDTH: f64 = 2.0;

// --- Heart ---
/// Edge length of the local frame the heart silhouette is designed in.
pub const HEART_DESIGN_SIZE: f64 = 100.0;

// --- Text ---
pub const DEFAULT_FONT: &str = "16px Arial";
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_TEXT_COLOR: Color = Color::BLACK;

// --- Text shadow ---
pub const SHADOW_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);
pub const SHADOW_BLUR: f64 = 4.0;
pub const SHADOW_OFFSET_X: f64 = 2.0;
pub const SHADOW_OFFSET_Y: f64 = 2.0;

// --- Text outline ---
pub const OUTLINE_COLOR: Color = Color::BLACK;
pub const OUTLINE_WIDTH: f64 = 2.0;

// --- Text measurement fallback (surfaces without real font metrics) ---
pub const APPROX_CHAR_WIDTH: f64 = 0.6;

// --- Demo ---
pub const DEMO_WIDTH: i32 = 800;
pub const DEMO_HEIGHT: i32 = 600;
pub const DEMO_OUTPUT: &str = "shapes.png";
pub const DEMO_BACKGROUND: u32 = 0xFAFAFA;
