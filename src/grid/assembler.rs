//! Grid assembler composing coin crops into the puzzle canvas.
//!
//! Cells are visited row-major. Reserved cells are painted with the reserved
//! colour and never receive a crop; every other cell takes the next crop in
//! order. Once the crops run out the remaining usable cells get the filler
//! colour, and crops left over after the last usable cell are dropped.
//! The separator grid is drawn on top.
use super::layout::{GridLayout, GridSpec};
use crate::crop::{CoinCrop, CropParams};
use crate::diagnostics::{AssemblyReport, TimingBreakdown};
use crate::draw::{draw_line, draw_number};
use crate::image::ImageRgba8;
use crate::types::{
    Rgba, FILLER_COLOR, GRID_EMPTY_COLOR, GRID_LINE_COLOR, LABEL_COLOR, MASK_BACKGROUND,
};
use log::debug;
use std::time::Instant;

/// What ends up in a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellContent {
    Reserved,
    /// Index into the crop list.
    Crop(usize),
    Filler,
}

/// Colours and overlay knobs for assembly.
#[derive(Clone, Debug)]
pub struct AssemblyParams {
    pub reserved_color: Rgba,
    pub filler_color: Rgba,
    pub line_color: Rgba,
    pub line_thickness: u32,
    /// Overlay the 1-based crop index in the top-left corner of each cell.
    pub show_labels: bool,
    pub label_color: Rgba,
    pub label_scale: usize,
}

impl Default for AssemblyParams {
    fn default() -> Self {
        Self {
            reserved_color: GRID_EMPTY_COLOR,
            filler_color: FILLER_COLOR,
            line_color: GRID_LINE_COLOR,
            line_thickness: 3,
            show_labels: true,
            label_color: LABEL_COLOR,
            label_scale: 4,
        }
    }
}

/// Map `crop_count` crops onto the cells of `layout`.
pub fn placements(layout: &GridLayout, crop_count: usize) -> Vec<CellContent> {
    let mut next = 0usize;
    (0..layout.cells().len())
        .map(|k| {
            if layout.is_reserved(k) {
                CellContent::Reserved
            } else if next < crop_count {
                next += 1;
                CellContent::Crop(next - 1)
            } else {
                CellContent::Filler
            }
        })
        .collect()
}

/// Reusable grid composer bound to a fixed canvas size.
pub struct GridAssembler {
    layout: GridLayout,
    params: AssemblyParams,
    canvas: ImageRgba8,
    report: Option<AssemblyReport>,
}

impl GridAssembler {
    pub fn new(
        spec: GridSpec,
        canvas_width: usize,
        canvas_height: usize,
        params: AssemblyParams,
    ) -> Self {
        let layout = GridLayout::new(spec, canvas_width, canvas_height);
        let canvas = ImageRgba8::filled(canvas_width, canvas_height, params.filler_color);
        Self {
            layout,
            params,
            canvas,
            report: None,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn params(&self) -> &AssemblyParams {
        &self.params
    }

    /// Crop parameters matching this grid's usable cell size.
    pub fn crop_params(&self) -> CropParams {
        let (cell_width, cell_height) = self.layout.cell_size();
        CropParams {
            cell_width,
            cell_height,
            background: MASK_BACKGROUND,
            filler: self.params.filler_color,
        }
    }

    /// Last composed canvas.
    pub fn canvas(&self) -> &ImageRgba8 {
        &self.canvas
    }

    pub fn last_report(&self) -> Option<&AssemblyReport> {
        self.report.as_ref()
    }

    /// Compose `crops` into the canvas and return it.
    pub fn assemble(&mut self, crops: &[CoinCrop]) -> &ImageRgba8 {
        let mut timings = TimingBreakdown::default();
        let plan = placements(&self.layout, crops.len());

        let start = Instant::now();
        let mut placed = 0usize;
        let mut filler_cells = 0usize;
        for (k, content) in plan.iter().enumerate() {
            let cell = self.layout.cells()[k];
            match *content {
                CellContent::Reserved => {
                    let color = self.params.reserved_color;
                    self.canvas
                        .fill_rect(cell.x, cell.y, cell.width, cell.height, color);
                }
                CellContent::Filler => {
                    filler_cells += 1;
                    let color = self.params.filler_color;
                    self.canvas
                        .fill_rect(cell.x, cell.y, cell.width, cell.height, color);
                }
                CellContent::Crop(i) => {
                    placed += 1;
                    let mut tile = crops[i].image.resized(cell.width, cell.height);
                    if self.params.show_labels {
                        let scale = self.params.label_scale;
                        let pad = scale as i64;
                        draw_number(&mut tile, (pad, pad), i + 1, scale, self.params.label_color);
                    }
                    self.canvas.copy_from(&tile, cell.x, cell.y);
                }
            }
        }
        timings.push("cells", start.elapsed().as_secs_f64() * 1000.0);

        let start = Instant::now();
        for (p0, p1) in self.layout.separator_lines() {
            let (color, thickness) = (self.params.line_color, self.params.line_thickness);
            draw_line(&mut self.canvas, p0, p1, color, thickness);
        }
        timings.push("grid_lines", start.elapsed().as_secs_f64() * 1000.0);

        let dropped = crops.len() - placed;
        if dropped > 0 {
            debug!(
                "GridAssembler::assemble dropped {} of {} crops ({} usable cells)",
                dropped,
                crops.len(),
                self.layout.usable_cells()
            );
        }

        let (canvas_width, canvas_height) = self.layout.canvas_size();
        self.report = Some(AssemblyReport {
            canvas_width,
            canvas_height,
            total_cells: plan.len(),
            reserved_cells: self.layout.reserved_cells(),
            usable_cells: self.layout.usable_cells(),
            supplied_crops: crops.len(),
            placed_crops: placed,
            dropped_crops: dropped,
            filler_cells,
            timings,
        });
        &self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Circle;

    fn crop(color: Rgba, size: usize) -> CoinCrop {
        CoinCrop::from_image(ImageRgba8::filled(size, size, color), Circle::default())
    }

    fn quiet_params() -> AssemblyParams {
        AssemblyParams {
            show_labels: false,
            line_thickness: 1,
            ..Default::default()
        }
    }

    #[test]
    fn placements_skip_reserved_column() {
        let layout = GridLayout::new(GridSpec::default(), 1280, 720);
        let plan = placements(&layout, 7);
        assert_eq!(plan[0], CellContent::Crop(0));
        assert_eq!(plan[4], CellContent::Crop(4));
        assert_eq!(plan[5], CellContent::Reserved);
        assert_eq!(plan[6], CellContent::Crop(5));
        assert_eq!(plan[7], CellContent::Crop(6));
        assert_eq!(plan[8], CellContent::Filler);
        assert_eq!(plan[17], CellContent::Reserved);
    }

    #[test]
    fn placements_drop_excess_crops() {
        let layout = GridLayout::new(GridSpec::default(), 1280, 720);
        let plan = placements(&layout, 40);
        let used: Vec<usize> = plan
            .iter()
            .filter_map(|c| match c {
                CellContent::Crop(i) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(used, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn crop_pixels_land_in_first_cell() {
        let red = [255, 0, 0, 255];
        let mut asm = GridAssembler::new(GridSpec::default(), 600, 300, quiet_params());
        let canvas = asm.assemble(&[crop(red, 100)]).clone();
        // cell 0 is [0, 100) x [0, 100); sample away from the separator lines
        assert_eq!(canvas.get(50, 50), red);
        assert_eq!(canvas.get(150, 50), FILLER_COLOR);
        assert_eq!(canvas.get(560, 50), GRID_EMPTY_COLOR);
    }

    #[test]
    fn mismatched_crop_is_resized_to_cell() {
        let blue = [0, 0, 255, 255];
        let mut asm = GridAssembler::new(GridSpec::default(), 600, 300, quiet_params());
        let canvas = asm.assemble(&[crop(blue, 37)]).clone();
        assert_eq!(canvas.get(10, 10), blue);
        assert_eq!(canvas.get(90, 90), blue);
    }

    #[test]
    fn report_counts_cells() {
        let params = AssemblyParams::default();
        let mut asm = GridAssembler::new(GridSpec::default(), 1280, 720, params);
        let crops: Vec<CoinCrop> = (0..20).map(|_| crop([9, 9, 9, 255], 240)).collect();
        asm.assemble(&crops);
        let report = asm.last_report().unwrap();
        assert_eq!(report.total_cells, 18);
        assert_eq!(report.reserved_cells, 3);
        assert_eq!(report.placed_crops, 15);
        assert_eq!(report.dropped_crops, 5);
        assert_eq!(report.filler_cells, 0);
        assert_eq!(report.timings.stages.len(), 2);
    }

    #[test]
    fn label_is_drawn_inside_cell() {
        let gray = [90, 90, 90, 255];
        let params = AssemblyParams {
            label_scale: 2,
            line_thickness: 1,
            ..Default::default()
        };
        let mut asm = GridAssembler::new(GridSpec::default(), 600, 300, params);
        let canvas = asm.assemble(&[crop(gray, 100)]).clone();
        // "1" stem at column 1 of the glyph, scaled by 2 and offset by the pad
        assert_eq!(canvas.get(2 + 2, 2 + 4), LABEL_COLOR);
        assert_eq!(canvas.get(60, 60), gray);
    }
}
