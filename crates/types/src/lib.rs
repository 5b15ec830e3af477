//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The default board matches the original interactive setup:
//!
//! - **Width**: 100 columns
//! - **Height**: 50 rows
//!
//! Dimensions are fixed for the lifetime of an automaton; the constants here
//! are only the startup defaults and can be overridden through configuration.
//!
//! # Coordinates
//!
//! Cells are addressed as `(x, y)` with `x` in `0..width` (left to right) and
//! `y` in `0..height` (top to bottom). The simulation wraps neighbor lookups
//! around both axes (torus); direct cell addressing never wraps.

/// Default board width in cells (columns).
pub const DEFAULT_BOARD_WIDTH: usize = 100;

/// Default board height in cells (rows).
pub const DEFAULT_BOARD_HEIGHT: usize = 50;

/// Default simulation rate in generations per second while running.
pub const DEFAULT_FPS: u32 = 30;

/// Discrete user actions applied to the simulation.
///
/// These are produced by the input layer (keyboard and mouse) and consumed by
/// the control loop. Each action maps to exactly one core mutation or one
/// controller-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeAction {
    /// Start or stop the free-running simulation.
    TogglePause,
    /// Advance exactly one generation, regardless of pause state.
    StepOnce,
    /// Kill every cell on the board.
    Clear,
    /// Copy the current board into the in-memory save slot.
    SaveSlot,
    /// Pause and restore the board from the save slot.
    RestoreSlot,
    /// Write the current board to a file on disk.
    ExportBoard,
    /// Flip the state of a single cell (pointer toggle / drag paint).
    ToggleCell { x: usize, y: usize },
}

/// Terminal geometry of the rendered board.
///
/// A board cell occupies `cell_w` terminal columns by `cell_h` rows, followed
/// by `gap` columns/rows of background before the next cell. `origin_x` and
/// `origin_y` locate the top-left corner of cell (0, 0) on the screen.
///
/// The same geometry is used to paint cells and to hit-test pointer events,
/// so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellGeometry {
    pub cell_w: u16,
    pub cell_h: u16,
    pub gap: u16,
    pub origin_x: u16,
    pub origin_y: u16,
}

impl CellGeometry {
    /// Horizontal stride from one cell's left edge to the next.
    pub fn span_w(&self) -> u16 {
        self.cell_w + self.gap
    }

    /// Vertical stride from one cell's top edge to the next.
    pub fn span_h(&self) -> u16 {
        self.cell_h + self.gap
    }

    /// Total size in terminal columns/rows of a `width` x `height` board.
    ///
    /// The trailing gap after the last column/row is not included.
    pub fn board_size(&self, width: usize, height: usize) -> (u16, u16) {
        if width == 0 || height == 0 {
            return (0, 0);
        }
        let w = (width as u16) * self.span_w() - self.gap;
        let h = (height as u16) * self.span_h() - self.gap;
        (w, h)
    }

    /// Screen position of the top-left corner of cell `(x, y)`.
    pub fn cell_origin(&self, x: usize, y: usize) -> (u16, u16) {
        (
            self.origin_x + (x as u16) * self.span_w(),
            self.origin_y + (y as u16) * self.span_h(),
        )
    }

    /// Map a terminal position back to the board cell under it.
    ///
    /// Returns `None` for positions outside the board or on the gap between
    /// cells.
    pub fn cell_at(
        &self,
        col: u16,
        row: u16,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        if col < self.origin_x || row < self.origin_y {
            return None;
        }
        let rel_x = col - self.origin_x;
        let rel_y = row - self.origin_y;

        let x = (rel_x / self.span_w()) as usize;
        let y = (rel_y / self.span_h()) as usize;
        if x >= width || y >= height {
            return None;
        }
        if rel_x % self.span_w() >= self.cell_w || rel_y % self.span_h() >= self.cell_h {
            return None;
        }
        Some((x, y))
    }
}
