//! Camera-frame handling: detection seam, live overlay and the view toggle.
//!
//! Modules
//! - [`detector`] – the [`CircleDetector`] trait and Hough tuning knobs.
//! - [`overlay`] – annotations drawn on live frames.
//! - [`handler`] – [`FrameHandler`], which owns the grid assembler and
//!   switches between the live and grid views on touch.

pub mod detector;
pub mod handler;
pub mod overlay;

pub use detector::{CircleDetector, FixedCircles, HoughParams};
pub use handler::{FrameHandler, HandlerParams, ViewMode};
pub use overlay::{annotate, OverlayParams};
