//! Pixel geometry of a single heatmap panel
//!
//! The panel area is split into a title band on top, a gutter for user
//! labels on the left and a gutter for rotated item labels below the grid.
//! Cells are square; the grid is centered in the remaining space. Geometry
//! depends only on the panel size and the grid size, never on the data.

use super::error::{RenderError, Result};

/// Outer margin around the panel content
pub const MARGIN: i32 = 10;
/// Height reserved for the panel title
pub const TITLE_BAND: i32 = 30;
/// Width reserved for user (row) labels
pub const Y_LABEL_GUTTER: i32 = 70;
/// Height reserved for rotated item (column) labels
pub const X_LABEL_GUTTER: i32 = 80;
/// Distance between the grid edge and tick labels
pub const LABEL_PAD: i32 = 6;

/// Pixel coordinate relative to the panel's top-left corner
pub type PixelCoord = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    /// Top-left corner of cell (0, 0)
    pub origin: PixelCoord,
    /// Side length of one cell in pixels
    pub cell: i32,
    /// Cells per side
    pub n: usize,
}

impl PanelLayout {
    pub fn compute(width: u32, height: u32, n: usize) -> Result<Self> {
        let too_small = RenderError::TooSmall {
            width,
            height,
            size: n,
        };
        if n == 0 {
            return Err(too_small);
        }

        let w = width as i32;
        let h = height as i32;
        let avail_w = w - 2 * MARGIN - Y_LABEL_GUTTER;
        let avail_h = h - 2 * MARGIN - TITLE_BAND - X_LABEL_GUTTER;

        let cell = avail_w.min(avail_h) / n as i32;
        if cell < 1 {
            return Err(too_small);
        }

        let side = cell * n as i32;
        let origin = (
            MARGIN + Y_LABEL_GUTTER + (avail_w - side) / 2,
            MARGIN + TITLE_BAND + (avail_h - side) / 2,
        );

        Ok(Self { origin, cell, n })
    }

    /// Side length of the whole grid
    pub fn side(&self) -> i32 {
        self.cell * self.n as i32
    }

    /// Upper-left and bottom-right corners of cell (row, col); row 0 is on top
    pub fn cell_rect(&self, row: usize, col: usize) -> (PixelCoord, PixelCoord) {
        let x0 = self.origin.0 + col as i32 * self.cell;
        let y0 = self.origin.1 + row as i32 * self.cell;
        ((x0, y0), (x0 + self.cell, y0 + self.cell))
    }

    pub fn cell_center(&self, row: usize, col: usize) -> PixelCoord {
        let ((x0, y0), _) = self.cell_rect(row, col);
        (x0 + self.cell / 2, y0 + self.cell / 2)
    }

    /// Right-aligned anchor of the label for `row`
    pub fn y_label_anchor(&self, row: usize) -> PixelCoord {
        (self.origin.0 - LABEL_PAD, self.cell_center(row, 0).1)
    }

    /// Top anchor of the rotated label for `col`
    pub fn x_label_anchor(&self, col: usize) -> PixelCoord {
        (self.cell_center(0, col).0, self.origin.1 + self.side() + LABEL_PAD)
    }

    /// Center of the title band, above the grid
    pub fn title_anchor(&self) -> PixelCoord {
        (self.origin.0 + self.side() / 2, self.origin.1 - TITLE_BAND / 2)
    }
}
