use super::TimingBreakdown;
use serde::Serialize;

/// Summary of one grid assembly.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyReport {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub total_cells: usize,
    pub reserved_cells: usize,
    pub usable_cells: usize,
    /// Crops handed to the assembler.
    pub supplied_crops: usize,
    /// Crops that landed in a cell.
    pub placed_crops: usize,
    /// Crops that did not fit and were dropped.
    pub dropped_crops: usize,
    /// Usable cells painted with the placeholder colour.
    pub filler_cells: usize,
    pub timings: TimingBreakdown,
}
