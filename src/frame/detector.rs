//! Circle detector seam.
//!
//! Detection numerics (grayscale conversion, median blur, Hough voting) live
//! in an external vision library. The handler only needs something that
//! turns a frame into a list of circles.
use crate::image::ImageRgba8;
use crate::types::Circle;
use serde::{Deserialize, Serialize};

/// Source of circle detections for a frame.
pub trait CircleDetector {
    fn detect(&mut self, frame: &ImageRgba8) -> Vec<Circle>;
}

impl<F> CircleDetector for F
where
    F: FnMut(&ImageRgba8) -> Vec<Circle>,
{
    fn detect(&mut self, frame: &ImageRgba8) -> Vec<Circle> {
        self(frame)
    }
}

/// Detector that reports the same circles for every frame.
#[derive(Clone, Debug, Default)]
pub struct FixedCircles {
    circles: Vec<Circle>,
}

impl FixedCircles {
    pub fn new(circles: Vec<Circle>) -> Self {
        Self { circles }
    }
}

impl CircleDetector for FixedCircles {
    fn detect(&mut self, _frame: &ImageRgba8) -> Vec<Circle> {
        self.circles.clone()
    }
}

/// Hough-gradient tuning used by the camera app.
///
/// Detector implementations backed by a vision library take their knobs
/// from here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoughParams {
    /// Median blur aperture applied to the grayscale frame.
    pub median_blur: u32,
    /// Inverse accumulator resolution.
    pub dp: f64,
    /// Minimum centre distance is `frame_rows / min_dist_divisor`.
    pub min_dist_divisor: u32,
    /// Upper Canny threshold.
    pub canny_threshold: f64,
    /// Accumulator vote threshold for centres.
    pub accumulator_threshold: f64,
    pub min_radius: u32,
    pub max_radius: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            median_blur: 5,
            dp: 1.0,
            min_dist_divisor: 8,
            canny_threshold: 100.0,
            accumulator_threshold: 50.0,
            min_radius: 5,
            max_radius: 150,
        }
    }
}

impl HoughParams {
    /// Minimum distance between detected centres for a frame of `rows` rows.
    pub fn min_dist(&self, rows: usize) -> f64 {
        rows as f64 / self.min_dist_divisor.max(1) as f64
    }
}
