//! Frame handler driving the live view and the grid view.
//!
//! The handler is fed one frame per tick and one event per tap, all on the
//! same thread. Each frame is run through the detector and annotated. A tap
//! in live mode freezes the current detections into the grid, and the next
//! tap returns to the live view.
use super::detector::CircleDetector;
use super::overlay::{annotate, OverlayParams};
use crate::crop::extract_coin_crops;
use crate::diagnostics::AssemblyReport;
use crate::grid::{AssemblyParams, GridAssembler, GridSpec};
use crate::image::ImageRgba8;
use crate::types::Circle;
use log::debug;

/// Which surface the handler currently returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Annotated camera frames.
    #[default]
    Live,
    /// The last assembled grid.
    Grid,
}

/// Parameters for [`FrameHandler`].
#[derive(Clone, Debug, Default)]
pub struct HandlerParams {
    pub grid: GridSpec,
    pub assembly: AssemblyParams,
    pub overlay: OverlayParams,
}

pub struct FrameHandler<D: CircleDetector> {
    detector: D,
    overlay: OverlayParams,
    assembler: GridAssembler,
    mode: ViewMode,
    raw: Option<ImageRgba8>,
    annotated: ImageRgba8,
    circles: Vec<Circle>,
}

impl<D: CircleDetector> FrameHandler<D> {
    /// Create a handler for frames of `frame_width × frame_height`; the grid
    /// canvas has the same size.
    pub fn new(
        detector: D,
        frame_width: usize,
        frame_height: usize,
        params: HandlerParams,
    ) -> Self {
        let assembler =
            GridAssembler::new(params.grid, frame_width, frame_height, params.assembly);
        Self {
            detector,
            overlay: params.overlay,
            assembler,
            mode: ViewMode::Live,
            raw: None,
            annotated: ImageRgba8::new(frame_width, frame_height),
            circles: Vec::new(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Detections from the most recent frame.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// The most recent unannotated frame, if any has arrived.
    pub fn last_frame(&self) -> Option<&ImageRgba8> {
        self.raw.as_ref()
    }

    pub fn assembler(&self) -> &GridAssembler {
        &self.assembler
    }

    pub fn last_report(&self) -> Option<&AssemblyReport> {
        self.assembler.last_report()
    }

    /// Process one camera frame and return the surface to display.
    pub fn on_frame(&mut self, frame: &ImageRgba8) -> &ImageRgba8 {
        self.circles = self.detector.detect(frame);

        self.annotated.clone_from(frame);
        annotate(&mut self.annotated, &self.circles, &self.overlay);
        match self.raw.as_mut() {
            Some(raw) => raw.clone_from(frame),
            None => self.raw = Some(frame.clone()),
        }

        match self.mode {
            ViewMode::Live => &self.annotated,
            ViewMode::Grid => self.assembler.canvas(),
        }
    }

    /// Handle a tap and return the new mode.
    pub fn on_touch(&mut self) -> ViewMode {
        self.mode = match self.mode {
            ViewMode::Live => {
                let crops = match self.raw.as_ref() {
                    Some(frame) if !self.circles.is_empty() => {
                        extract_coin_crops(frame, &self.circles, &self.assembler.crop_params())
                    }
                    _ => {
                        debug!("FrameHandler::on_touch no detections, assembling placeholders");
                        Vec::new()
                    }
                };
                self.assembler.assemble(&crops);
                ViewMode::Grid
            }
            ViewMode::Grid => ViewMode::Live,
        };
        self.mode
    }
}
