//! BoardView: maps board cells onto framebuffer rectangles.
//!
//! This module is pure (no I/O). One `BoardView` owns the cell geometry and
//! the color table, so painting and pointer hit-testing can never disagree
//! about where a cell is.

use tui_life_core::Grid;
use tui_life_types::CellGeometry;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Glyph used to fill cell rectangles; the color carries the state.
const CELL_GLYPH: char = '█';

/// Renders a board into a framebuffer using a fixed geometry and palette.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    geometry: CellGeometry,
    grid_color: Rgb,
    dead_color: Rgb,
    live_color: Rgb,
}

impl BoardView {
    pub fn new(geometry: CellGeometry, grid_color: Rgb, dead_color: Rgb, live_color: Rgb) -> Self {
        Self {
            geometry,
            grid_color,
            dead_color,
            live_color,
        }
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    /// Total terminal size of the rendered board.
    pub fn board_size(&self, grid: &Grid) -> (u16, u16) {
        self.geometry.board_size(grid.width(), grid.height())
    }

    fn cell_style(&self, alive: bool) -> CellStyle {
        CellStyle {
            fg: if alive { self.live_color } else { self.dead_color },
            bg: self.grid_color,
            bold: false,
        }
    }

    /// Paint one cell rectangle (the gap around it stays background).
    pub fn paint_cell(&self, fb: &mut FrameBuffer, x: usize, y: usize, alive: bool) {
        let (px, py) = self.geometry.cell_origin(x, y);
        fb.fill_rect(
            px,
            py,
            self.geometry.cell_w,
            self.geometry.cell_h,
            CELL_GLYPH,
            self.cell_style(alive),
        );
    }

    /// Paint the background and every cell.
    ///
    /// Used for the initial frame and after anything that invalidates the
    /// incremental state (e.g. a terminal resize).
    pub fn full_render(&self, fb: &mut FrameBuffer, grid: &Grid) {
        let (w, h) = self.board_size(grid);
        let background = CellStyle {
            fg: self.grid_color,
            bg: self.grid_color,
            bold: false,
        };
        fb.fill_rect(
            self.geometry.origin_x,
            self.geometry.origin_y,
            w,
            h,
            ' ',
            background,
        );

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let alive = grid.get(x, y).unwrap_or(false);
                self.paint_cell(fb, x, y, alive);
            }
        }
    }

    /// Map a terminal position back to the board cell under it.
    pub fn cell_at(&self, col: u16, row: u16, grid: &Grid) -> Option<(usize, usize)> {
        self.geometry.cell_at(col, row, grid.width(), grid.height())
    }
}
