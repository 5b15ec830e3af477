//! CanvasSink: the cell sink that paints into a retained framebuffer.

use anyhow::Result;

use tui_life_adapter::CellSink;
use tui_life_core::Grid;

use crate::fb::{CellStyle, FrameBuffer};
use crate::view::BoardView;

/// Owns the framebuffer the board is painted into.
///
/// The tracker pushes changed cells through [`CellSink`]; the control loop
/// then flushes the framebuffer to the terminal. Because the buffer is
/// retained across frames, each publish only has to repaint the cells the
/// tracker reported.
pub struct CanvasSink {
    view: BoardView,
    fb: FrameBuffer,
}

impl CanvasSink {
    pub fn new(view: BoardView, width: u16, height: u16) -> Self {
        Self {
            view,
            fb: FrameBuffer::new(width, height),
        }
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn fb(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Repaint everything, e.g. for the first frame or after a resize.
    pub fn full_redraw(&mut self, grid: &Grid, viewport_w: u16, viewport_h: u16) {
        self.fb.resize(viewport_w, viewport_h);
        self.view.full_render(&mut self.fb, grid);
    }

    /// Write a line of text below the board (clipped to the viewport).
    pub fn status_line(&mut self, y: u16, text: &str) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        // Blank the row first so a shorter status does not leave residue.
        let width = self.fb.width();
        self.fb.fill_rect(0, y, width, 1, ' ', CellStyle::default());
        self.fb.put_str(0, y, text, style);
    }
}

impl CellSink for CanvasSink {
    fn on_cell_changed(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.view.paint_cell(&mut self.fb, x, y, alive);
        Ok(())
    }
}
