//! Raster primitives used for overlays and masking.
//!
//! All routines clip against the image bounds, so callers can pass
//! coordinates that partially (or completely) leave the canvas.
pub mod font;

use crate::image::ImageRgba8;
use crate::types::Rgba;

pub use font::{draw_number, number_height, number_width};

const EPS: f32 = 1e-4;

/// Draw the segment `p0 → p1` with the given stroke thickness.
///
/// A pixel is painted when its distance to the segment is at most
/// `thickness / 2`. A thickness of zero is treated as one.
pub fn draw_line(
    img: &mut ImageRgba8,
    p0: (i64, i64),
    p1: (i64, i64),
    color: Rgba,
    thickness: u32,
) {
    let half = thickness.max(1) as f32 * 0.5;
    let pad = half.ceil() as i64;
    let x_lo = p0.0.min(p1.0) - pad;
    let x_hi = p0.0.max(p1.0) + pad;
    let y_lo = p0.1.min(p1.1) - pad;
    let y_hi = p0.1.max(p1.1) + pad;

    let (ax, ay) = (p0.0 as f32, p0.1 as f32);
    let (dx, dy) = ((p1.0 - p0.0) as f32, (p1.1 - p0.1) as f32);
    let len_sq = dx * dx + dy * dy;

    for y in y_lo.max(0)..=y_hi.min(img.h as i64 - 1) {
        for x in x_lo.max(0)..=x_hi.min(img.w as i64 - 1) {
            let (px, py) = (x as f32 - ax, y as f32 - ay);
            let t = if len_sq > 0.0 {
                ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (ex, ey) = (px - t * dx, py - t * dy);
            if (ex * ex + ey * ey).sqrt() <= half + EPS {
                img.set(x as usize, y as usize, color);
            }
        }
    }
}

/// Draw a circle outline centred at `center`.
pub fn draw_circle(
    img: &mut ImageRgba8,
    center: (i64, i64),
    radius: i64,
    color: Rgba,
    thickness: u32,
) {
    let half = thickness.max(1) as f32 * 0.5;
    let r = radius.max(0) as f32;
    let reach = radius.max(0).saturating_add(half.ceil() as i64);
    let (y0, y1) = (center.1.saturating_sub(reach), center.1.saturating_add(reach));
    let (x0, x1) = (center.0.saturating_sub(reach), center.0.saturating_add(reach));
    for y in y0.max(0)..=y1.min(img.h as i64 - 1) {
        for x in x0.max(0)..=x1.min(img.w as i64 - 1) {
            let dx = (x as f64 - center.0 as f64) as f32;
            let dy = (y as f64 - center.1 as f64) as f32;
            let d = (dx * dx + dy * dy).sqrt();
            if (d - r).abs() <= half + EPS {
                img.set(x as usize, y as usize, color);
            }
        }
    }
}

/// Paint every pixel outside the disc with `background`.
///
/// Pixel `(x, y)` is inside when `(x - cx)² + (y - cy)² <= r²`. The centre
/// may lie outside the image, which happens for crops clamped at a frame
/// edge. Distances are compared in `i128`, so any centre and radius are
/// accepted.
pub fn fill_disc_mask(img: &mut ImageRgba8, center: (i64, i64), radius: i64, background: Rgba) {
    let r = radius.max(0) as i128;
    let r_sq = r * r;
    let w = img.w;
    for (y, row) in img.data.chunks_exact_mut(w.max(1)).enumerate() {
        let dy = y as i128 - center.1 as i128;
        for (x, px) in row.iter_mut().enumerate() {
            let dx = x as i128 - center.0 as i128;
            if (dx * dx).saturating_add(dy * dy) > r_sq {
                *px = background;
            }
        }
    }
}
