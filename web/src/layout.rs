use blocksweeper_core::{Coord, Coord2};

/// Pixel rectangle of one cell, gaps between cells excluded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Screen geometry of the board, derived from `(col, row)` and fixed cell dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellLayout {
    size: Coord2,
    cell_width: u32,
    cell_height: u32,
    margin: u32,
}

impl CellLayout {
    pub const DEFAULT_MARGIN: u32 = 3;

    pub fn new((cols, rows): Coord2, cell_width: u32, cell_height: u32, margin: u32) -> Self {
        let cell_width = cell_width.max(1);
        let cell_height = cell_height.max(1);
        Self {
            size: (cols.max(1), rows.max(1)),
            cell_width,
            cell_height,
            margin: margin.min(cell_width.min(cell_height) - 1),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    /// Canvas dimensions needed to fit every cell.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.cell_width * u32::from(self.size.0),
            self.cell_height * u32::from(self.size.1),
        )
    }

    pub fn cell_rect(&self, (col, row): Coord2) -> CellRect {
        CellRect {
            x: u32::from(col) * self.cell_width,
            y: u32::from(row) * self.cell_height,
            width: self.cell_width - self.margin,
            height: self.cell_height - self.margin,
        }
    }

    /// Anchor for the cell label, the middle of the full cell including its gap.
    pub fn cell_center(&self, coords: Coord2) -> (f64, f64) {
        let rect = self.cell_rect(coords);
        (
            f64::from(rect.x) + f64::from(self.cell_width) / 2.,
            f64::from(rect.y) + f64::from(self.cell_height) / 2.,
        )
    }

    /// Maps a click position to the cell under it.
    ///
    /// Pixels past the last full cell clamp to the last column or row, negative positions are
    /// off the board.
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<Coord2> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let col = (x / self.cell_width).min(u32::from(self.size.0) - 1);
        let row = (y / self.cell_height).min(u32::from(self.size.1) - 1);
        Some((col as Coord, row as Coord))
    }
}
