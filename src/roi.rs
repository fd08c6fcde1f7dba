//! Integer regions of interest and clamping against frame bounds.
//!
//! Coordinates are clamped rather than rejected: a box that leaves the frame
//! shrinks to the visible part, possibly down to zero area.
use crate::types::Circle;

/// Half-open box `[x0, x1) × [y0, y1)` in signed pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

/// Unsigned, non-empty region that lies inside an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropBounds {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl PixelBox {
    /// Bounding square of the rounded circle.
    pub fn around_circle(circle: &Circle) -> Self {
        let c = circle.rounded();
        Self {
            x0: c.cx.saturating_sub(c.radius),
            y0: c.cy.saturating_sub(c.radius),
            x1: c.cx.saturating_add(c.radius),
            y1: c.cy.saturating_add(c.radius),
        }
    }

    /// Clamp every corner into `[0, width] × [0, height]`.
    pub fn clamp_to(&self, width: usize, height: usize) -> Self {
        let w = width as i64;
        let h = height as i64;
        Self {
            x0: self.x0.clamp(0, w),
            y0: self.y0.clamp(0, h),
            x1: self.x1.clamp(0, w),
            y1: self.y1.clamp(0, h),
        }
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.x1.saturating_sub(self.x0)
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.y1.saturating_sub(self.y0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Unsigned bounds, or `None` when the box has no area or starts at a
    /// negative coordinate.
    pub fn to_bounds(&self) -> Option<CropBounds> {
        if self.is_empty() || self.x0 < 0 || self.y0 < 0 {
            return None;
        }
        Some(CropBounds {
            x: self.x0 as usize,
            y: self.y0 as usize,
            width: self.width() as usize,
            height: self.height() as usize,
        })
    }
}
