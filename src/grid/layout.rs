//! Partition of the output canvas into grid cells.
//!
//! Two conventions are supported:
//! - reserved last column: usable cells are squares of side
//!   `min(h / rows, w / (columns - 1))`, and the last column stretches from
//!   the end of the usable area to the right canvas edge;
//! - uniform: every column gets `w / columns` pixels.
//!
//! In both cases row `i` spans `[i·h/rows, (i+1)·h/rows)`. The cell list is
//! computed once and never changes for the lifetime of the layout.
use serde::{Deserialize, Serialize};

/// Grid dimensions and column convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    pub columns: usize,
    pub rows: usize,
    /// Keep the last column as a label/separator strip.
    pub reserve_last_column: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 6,
            rows: 3,
            reserve_last_column: true,
        }
    }
}

impl GridSpec {
    /// Square `n × n` grid without a reserved column.
    pub fn square(n: usize) -> Self {
        Self {
            columns: n,
            rows: n,
            reserve_last_column: false,
        }
    }

    /// Raise degenerate dimensions so the layout is always well defined.
    fn normalized(self) -> Self {
        let min_columns = if self.reserve_last_column { 2 } else { 1 };
        Self {
            columns: self.columns.max(min_columns),
            rows: self.rows.max(1),
            reserve_last_column: self.reserve_last_column,
        }
    }

    pub fn area(&self) -> usize {
        self.columns * self.rows
    }
}

/// Pixel rectangle of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CellRect {
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

#[derive(Clone, Debug)]
pub struct GridLayout {
    spec: GridSpec,
    canvas_width: usize,
    canvas_height: usize,
    column_edges: Vec<usize>,
    row_edges: Vec<usize>,
    cells: Vec<CellRect>,
}

impl GridLayout {
    pub fn new(spec: GridSpec, canvas_width: usize, canvas_height: usize) -> Self {
        let spec = spec.normalized();
        let (w, h) = (canvas_width, canvas_height);

        let row_edges: Vec<usize> = (0..=spec.rows).map(|i| i * h / spec.rows).collect();
        let column_edges: Vec<usize> = if spec.reserve_last_column {
            let usable = spec.columns - 1;
            let side = (h / spec.rows).min(w / usable);
            (0..spec.columns)
                .map(|j| j * side)
                .chain(std::iter::once(w))
                .collect()
        } else {
            (0..=spec.columns).map(|j| j * w / spec.columns).collect()
        };

        let mut cells = Vec::with_capacity(spec.area());
        for rows in row_edges.windows(2) {
            for cols in column_edges.windows(2) {
                cells.push(CellRect {
                    x: cols[0],
                    y: rows[0],
                    width: cols[1] - cols[0],
                    height: rows[1] - rows[0],
                });
            }
        }

        Self {
            spec,
            canvas_width,
            canvas_height,
            column_edges,
            row_edges,
            cells,
        }
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    pub fn canvas_size(&self) -> (usize, usize) {
        (self.canvas_width, self.canvas_height)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[CellRect] {
        &self.cells
    }

    pub fn cell(&self, k: usize) -> Option<&CellRect> {
        self.cells.get(k)
    }

    pub fn is_reserved(&self, k: usize) -> bool {
        self.spec.reserve_last_column && (k + 1) % self.spec.columns == 0
    }

    pub fn reserved_cells(&self) -> usize {
        (0..self.cells.len()).filter(|&k| self.is_reserved(k)).count()
    }

    pub fn usable_cells(&self) -> usize {
        self.cells.len() - self.reserved_cells()
    }

    /// Size of a usable cell, i.e. the size crops should be scaled to.
    pub fn cell_size(&self) -> (usize, usize) {
        let width = self.column_edges[1] - self.column_edges[0];
        (width, self.canvas_height / self.spec.rows)
    }

    /// Horizontal extent covered by usable columns.
    pub fn grid_extent(&self) -> usize {
        if self.spec.reserve_last_column {
            self.column_edges[self.spec.columns - 1]
        } else {
            self.canvas_width
        }
    }

    /// Interior separator lines as `(start, end)` pixel pairs.
    ///
    /// Horizontal lines span the usable extent; vertical lines sit on every
    /// interior column boundary, including the one in front of the reserved
    /// column.
    pub fn separator_lines(&self) -> Vec<((i64, i64), (i64, i64))> {
        let extent = self.grid_extent() as i64;
        let bottom = self.canvas_height as i64;
        let horizontal = self.row_edges[1..self.spec.rows]
            .iter()
            .map(|&y| ((0, y as i64), (extent, y as i64)));
        let vertical = self.column_edges[1..self.spec.columns]
            .iter()
            .map(|&x| ((x as i64, 0), (x as i64, bottom)));
        horizontal.chain(vertical).collect()
    }
}
