//! Pointer handling: click-to-toggle and drag painting.
//!
//! A left press toggles the cell under the pointer and starts a paint
//! stroke; dragging toggles each newly entered cell once; releasing the
//! button ends the stroke. Tracking the last toggled cell prevents terminal
//! mouse-move repeats from flipping the same cell back and forth.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{CellGeometry, LifeAction};

/// Stateful handler for pointer press/drag/release sequences.
#[derive(Debug, Clone, Default)]
pub struct PointerPainter {
    painting: bool,
    last_cell: Option<(usize, usize)>,
}

impl PointerPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a paint stroke is in progress.
    pub fn painting(&self) -> bool {
        self.painting
    }

    /// Translate a mouse event into an optional toggle action.
    ///
    /// Positions on the gap between cells or outside the board produce no
    /// action but do not end the stroke; the stroke resumes when the pointer
    /// re-enters a cell.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        geometry: CellGeometry,
        board_w: usize,
        board_h: usize,
    ) -> Option<LifeAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let cell = geometry.cell_at(event.column, event.row, board_w, board_h)?;
                self.painting = true;
                self.last_cell = Some(cell);
                Some(LifeAction::ToggleCell {
                    x: cell.0,
                    y: cell.1,
                })
            }
            MouseEventKind::Drag(MouseButton::Left) if self.painting => {
                let cell = geometry.cell_at(event.column, event.row, board_w, board_h)?;
                if self.last_cell == Some(cell) {
                    return None;
                }
                self.last_cell = Some(cell);
                Some(LifeAction::ToggleCell {
                    x: cell.0,
                    y: cell.1,
                })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.painting = false;
                self.last_cell = None;
                None
            }
            _ => None,
        }
    }
}
