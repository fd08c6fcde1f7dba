//! Grid layout and assembly of coin crops into the puzzle canvas.
//!
//! - [`layout`] – partitions a fixed canvas into `columns × rows` cells,
//!   optionally keeping the last column as a reserved label strip.
//! - [`assembler`] – maps an ordered crop list onto the usable cells and
//!   draws the separator grid.

pub mod assembler;
pub mod layout;

pub use assembler::{placements, AssemblyParams, CellContent, GridAssembler};
pub use layout::{CellRect, GridLayout, GridSpec};
