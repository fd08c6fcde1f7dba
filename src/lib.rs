#![doc = include_str!("../README.md")]

pub mod config;
pub mod crop;
pub mod diagnostics;
pub mod draw;
pub mod frame;
pub mod grid;
pub mod image;
pub mod roi;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::crop::{extract_coin_crop, extract_coin_crops, CoinCrop, CropParams};
pub use crate::diagnostics::AssemblyReport;
pub use crate::frame::{CircleDetector, FixedCircles, FrameHandler, HandlerParams, ViewMode};
pub use crate::grid::{AssemblyParams, GridAssembler, GridLayout, GridSpec};
pub use crate::types::Circle;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use coin_puzzle::prelude::*;
///
/// # fn main() {
/// let frame = ImageRgba8::filled(1280, 720, [128, 128, 128, 255]);
/// let detector = FixedCircles::new(vec![Circle::new(320.0, 240.0, 60.0)]);
/// let mut handler = FrameHandler::new(detector, frame.w, frame.h, HandlerParams::default());
///
/// handler.on_frame(&frame);
/// handler.on_touch();
/// let report = handler.last_report().unwrap();
/// println!("placed={} dropped={}", report.placed_crops, report.dropped_crops);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgba8;
    pub use crate::{Circle, FixedCircles, FrameHandler, HandlerParams, ViewMode};
}
