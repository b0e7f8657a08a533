//! Tunables for the board, the camera and the isometric renderer.

use std::f64::consts::PI;

// ---------------- Viewport -----------------
pub const ISO_MIN_WIDTH: f64 = 240.0;
pub const ISO_MAX_WIDTH: f64 = 720.0;
/// Page padding plus the canvas border, in CSS pixels.
pub const PAGE_CHROME_PX: f64 = 70.0;
/// Window width assumed when the browser does not report one.
pub const FALLBACK_WINDOW_WIDTH: f64 = 800.0;
pub const CANVAS_PADDING_PX: f64 = 24.0;

// ---------------- Projection -----------------
/// Vertical squash of the ground plane (0.5 = classic 2:1 isometric).
pub const PERSPECTIVE_RATIO: f64 = 0.5;
pub const BLOCK_HEIGHT_FACTOR: f64 = 0.6;
pub const MIN_DEPTH_RANGE: f64 = 0.001;
pub const GRID_LINE_MIN_TILE_PX: f64 = 5.0;
pub const BLOCK_INSET: f64 = 0.1;
pub const SHADOW_INSET: f64 = 0.05;

// ---------------- Camera -----------------
pub const PERSPECTIVE_MAX: f64 = 0.8;
pub const PERSPECTIVE_STEP: f64 = 0.1;
pub const PERSPECTIVE_DEFAULT: f64 = 0.3;
/// 5 degrees per key press.
pub const ROTATION_STEP: f64 = PI / 36.0;
pub const ROTATION_DEFAULT: f64 = PI / 4.0;

// ---------------- Game progression -----------------
pub const GRID_SIZE_INITIAL: u32 = 10;
pub const GRID_SIZE_MIN: u32 = 5;
pub const GRID_SIZE_MAX: u32 = 100;
pub const GRID_GROWTH_PER_LEVEL: u32 = 2;
pub const TICK_MS_INITIAL: u32 = 200;
pub const TICK_MS_MIN: u32 = 25;
pub const FOOD_PER_LEVEL: u32 = 5;

pub const HIGH_SCORE_KEY: &str = "iso_snake_high_score";

/// Fill colours for the three visible faces of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockColors {
    pub top: &'static str,
    pub right: &'static str,
    pub left: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub ground_even: &'static str,
    pub ground_odd: &'static str,
    pub grid_line: &'static str,
    pub grid_line_width: f64,
    pub border: &'static str,
    pub border_width: f64,
    pub shadow: &'static str,
    pub head: BlockColors,
    pub body: BlockColors,
    pub food: BlockColors,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#0e1116",
            ground_even: "#161b22",
            ground_odd: "#1c2128",
            grid_line: "rgba(255,255,255,0.08)",
            grid_line_width: 1.0,
            border: "#30363d",
            border_width: 2.0,
            shadow: "rgba(0,0,0,0.35)",
            head: BlockColors {
                top: "#7ee787",
                right: "#3fb950",
                left: "#2ea043",
            },
            body: BlockColors {
                top: "#26a641",
                right: "#1a7f37",
                left: "#116329",
            },
            food: BlockColors {
                top: "#ff7b72",
                right: "#f85149",
                left: "#b62324",
            },
        }
    }
}
