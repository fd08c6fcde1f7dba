//! Live-view annotations: circle outlines, centre marks and a coin count.
use crate::draw::{draw_circle, draw_number, number_height, number_width};
use crate::image::ImageRgba8;
use crate::types::{Circle, Rgba, CENTER_COLOR, CIRCLE_COLOR};

#[derive(Clone, Debug)]
pub struct OverlayParams {
    pub circle_color: Rgba,
    pub circle_thickness: u32,
    pub center_color: Rgba,
    pub center_radius: i64,
    pub show_count: bool,
    pub count_color: Rgba,
    pub count_scale: usize,
    /// Left margin and baseline offset from the bottom edge. The count is
    /// shifted left when it would run past the right edge.
    pub count_margin: (i64, i64),
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            circle_color: CIRCLE_COLOR,
            circle_thickness: 2,
            center_color: CENTER_COLOR,
            center_radius: 3,
            show_count: true,
            count_color: [0, 0, 0, 255],
            count_scale: 4,
            count_margin: (10, 30),
        }
    }
}

/// Draw the detections onto `canvas` in place.
pub fn annotate(canvas: &mut ImageRgba8, circles: &[Circle], params: &OverlayParams) {
    for circle in circles {
        let c = circle.rounded();
        draw_circle(
            canvas,
            (c.cx, c.cy),
            c.radius,
            params.circle_color,
            params.circle_thickness,
        );
        draw_circle(
            canvas,
            (c.cx, c.cy),
            params.center_radius,
            params.center_color,
            params.circle_thickness,
        );
    }

    if params.show_count {
        let count = circles.len();
        let baseline = canvas.h as i64 - params.count_margin.1;
        let top = baseline - number_height(params.count_scale) as i64;
        let widest_left = canvas.w as i64 - number_width(count, params.count_scale) as i64;
        let left = params.count_margin.0.min(widest_left).max(0);
        draw_number(
            canvas,
            (left, top),
            count,
            params.count_scale,
            params.count_color,
        );
    }
}
