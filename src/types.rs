use serde::{Deserialize, Serialize};

/// One RGBA pixel.
pub type Rgba = [u8; 4];

/// Colour of the reserved label column.
pub const GRID_EMPTY_COLOR: Rgba = [0x33, 0x33, 0x33, 0xFF];
/// Placeholder for usable cells with no crop and for collapsed crops.
pub const FILLER_COLOR: Rgba = [0x00, 0x00, 0x00, 0xFF];
/// Written outside the disc when masking a coin crop.
pub const MASK_BACKGROUND: Rgba = [0x00, 0x00, 0x00, 0xFF];
pub const GRID_LINE_COLOR: Rgba = [0, 255, 0, 255];
pub const CIRCLE_COLOR: Rgba = [255, 0, 0, 255];
pub const CENTER_COLOR: Rgba = [0, 0, 255, 255];
pub const LABEL_COLOR: Rgba = [255, 255, 255, 255];

/// A detected circle in frame pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Largest magnitude a rounded coordinate or radius may take. Squared
/// distances between such values still fit in `i64`.
pub const MAX_PIXEL_COORD: i64 = 1 << 30;

/// Integer circle obtained by rounding a detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelCircle {
    pub cx: i64,
    pub cy: i64,
    pub radius: i64,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Round centre and radius half up. Non-finite values map to 0, a
    /// negative radius maps to 0 and everything is clamped to
    /// `±MAX_PIXEL_COORD`.
    pub fn rounded(&self) -> PixelCircle {
        PixelCircle {
            cx: round_half_up(self.x),
            cy: round_half_up(self.y),
            radius: round_half_up(self.radius).max(0),
        }
    }
}

#[inline]
fn round_half_up(v: f32) -> i64 {
    if v.is_finite() {
        ((v + 0.5).floor() as i64).clamp(-MAX_PIXEL_COORD, MAX_PIXEL_COORD)
    } else {
        0
    }
}
