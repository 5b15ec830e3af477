//! The Game of Life engine.
//!
//! Owns the board and applies the B3/S23 transition rule with toroidal
//! wraparound. The next generation is always computed from the previous one
//! in full (generation-barrier semantics): no cell update ever reads an
//! already-updated neighbor. A retained scratch grid keeps `step` free of
//! per-generation allocation.

use crate::codec;
use crate::error::LifeError;
use crate::grid::Grid;

/// Glyph for a live cell in the text rendition.
const ALIVE_GLYPH: char = '█';
/// Glyph for a dead cell in the text rendition.
const DEAD_GLYPH: char = '·';

/// The cellular automaton: a board plus the rule to advance it.
#[derive(Debug, Clone)]
pub struct Automaton {
    board: Grid,
    scratch: Grid,
}

impl Automaton {
    /// Construct from an initial grid.
    ///
    /// Fails with [`LifeError::InvalidDimensions`] when the grid has zero
    /// rows or zero columns. Dimensions are fixed afterwards; a different
    /// board size requires constructing a new automaton.
    pub fn from_grid(grid: Grid) -> Result<Self, LifeError> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(LifeError::InvalidDimensions);
        }
        let scratch = Grid::dead(grid.width(), grid.height());
        Ok(Self {
            board: grid,
            scratch,
        })
    }

    /// Construct from a previously persisted byte stream (see [`codec`]).
    ///
    /// Fails with [`LifeError::CorruptData`] when the bytes do not parse and
    /// with [`LifeError::InvalidDimensions`] when they decode to a zero-sized
    /// board.
    pub fn from_persisted_bytes(bytes: &[u8]) -> Result<Self, LifeError> {
        Self::from_grid(codec::decode(bytes)?)
    }

    /// Read access to the current board.
    ///
    /// External renderers use this for a full (non-incremental) redraw.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Advance the board by one generation.
    ///
    /// Every cell's fate is decided by its live-neighbor count in the *old*
    /// generation; the new board is swapped in whole, so callers never
    /// observe a half-stepped state.
    pub fn step(&mut self) {
        let w = self.board.width();
        let h = self.board.height();
        for y in 0..h {
            for x in 0..w {
                let n = self.board.live_neighbors(x, y);
                let alive = self.board.get(x, y).unwrap_or(false);
                self.scratch.set(x, y, n == 3 || (n == 2 && alive));
            }
        }
        std::mem::swap(&mut self.board, &mut self.scratch);
    }

    /// Flip a single cell.
    ///
    /// Unlike neighbor lookups, direct addressing does not wrap: an address
    /// outside the board fails with [`LifeError::OutOfBounds`] and leaves
    /// the board unchanged.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), LifeError> {
        match self.board.get(x, y) {
            Some(alive) => {
                self.board.set(x, y, !alive);
                Ok(())
            }
            None => Err(LifeError::OutOfBounds { x, y }),
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.board.fill(false);
    }

    /// Replace the board with a previously saved grid of the same shape.
    ///
    /// Fails with [`LifeError::DimensionMismatch`] otherwise; the board is
    /// unchanged on failure.
    pub fn restore(&mut self, saved: &Grid) -> Result<(), LifeError> {
        if !self.board.same_size(saved) {
            return Err(LifeError::DimensionMismatch {
                expected: (self.board.width(), self.board.height()),
                found: (saved.width(), saved.height()),
            });
        }
        self.board.copy_from(saved);
        Ok(())
    }

    /// Encode the current board into the persisted byte layout.
    pub fn serialize(&self) -> Vec<u8> {
        codec::encode(&self.board)
    }

    /// Human-readable multi-line rendition, one glyph per cell.
    ///
    /// Diagnostic only: used by tests and headless runs, never by the
    /// interactive path.
    pub fn render(&self) -> String {
        let w = self.board.width();
        let h = self.board.height();
        let mut out = String::with_capacity(h * (w + 1));
        for y in 0..h {
            for x in 0..w {
                let alive = self.board.get(x, y).unwrap_or(false);
                out.push(if alive { ALIVE_GLYPH } else { DEAD_GLYPH });
            }
            if y + 1 < h {
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_grids_are_rejected() {
        assert_eq!(
            Automaton::from_grid(Grid::dead(0, 5)).unwrap_err(),
            LifeError::InvalidDimensions
        );
        assert_eq!(
            Automaton::from_grid(Grid::dead(5, 0)).unwrap_err(),
            LifeError::InvalidDimensions
        );
        assert!(Automaton::from_grid(Grid::dead(1, 1)).is_ok());
    }

    #[test]
    fn lonely_cells_die_and_empty_boards_stay_empty() {
        let mut grid = Grid::dead(6, 6);
        grid.set(3, 3, true);
        let mut life = Automaton::from_grid(grid).unwrap();
        life.step();
        assert_eq!(life.board().count_alive(), 0);

        // And a dead board stays dead.
        life.step();
        assert_eq!(life.board().count_alive(), 0);
    }

    #[test]
    fn birth_on_exactly_three_neighbors() {
        let grid = Grid::from_rows(&[
            "······", //
            "··█···", //
            "··█···", //
            "··█···", //
            "······",
        ]);
        let mut life = Automaton::from_grid(grid).unwrap();
        life.step();
        // The blinker flips to horizontal: cells at (1,2),(2,2),(3,2).
        assert_eq!(life.board().get(1, 2), Some(true));
        assert_eq!(life.board().get(2, 2), Some(true));
        assert_eq!(life.board().get(3, 2), Some(true));
        assert_eq!(life.board().count_alive(), 3);
    }

    #[test]
    fn step_uses_the_old_generation_for_every_cell() {
        // An R-pentomino near the center: if any update read an
        // already-updated neighbor the population after two steps would
        // differ from the known sequence (5 -> 6 -> 7).
        let grid = Grid::from_rows(&[
            "········", //
            "···██···", //
            "··██····", //
            "···█····", //
            "········", //
            "········",
        ]);
        let mut life = Automaton::from_grid(grid).unwrap();
        assert_eq!(life.board().count_alive(), 5);
        life.step();
        assert_eq!(life.board().count_alive(), 6);
        life.step();
        assert_eq!(life.board().count_alive(), 7);
    }

    #[test]
    fn toggle_cell_is_its_own_inverse() {
        let mut life = Automaton::from_grid(Grid::dead(4, 4)).unwrap();
        life.toggle_cell(2, 1).unwrap();
        assert_eq!(life.board().get(2, 1), Some(true));
        life.toggle_cell(2, 1).unwrap();
        assert_eq!(life.board().get(2, 1), Some(false));
        assert_eq!(life.board().count_alive(), 0);
    }

    #[test]
    fn toggle_cell_does_not_wrap() {
        let mut life = Automaton::from_grid(Grid::dead(4, 4)).unwrap();
        assert_eq!(
            life.toggle_cell(4, 0).unwrap_err(),
            LifeError::OutOfBounds { x: 4, y: 0 }
        );
        assert_eq!(
            life.toggle_cell(0, 7).unwrap_err(),
            LifeError::OutOfBounds { x: 0, y: 7 }
        );
        assert_eq!(life.board().count_alive(), 0);
    }

    #[test]
    fn clear_kills_everything() {
        let mut life = Automaton::from_grid(Grid::random(8, 8, 3)).unwrap();
        life.clear();
        assert_eq!(life.board().count_alive(), 0);
        assert!(!life.render().contains('█'));
    }

    #[test]
    fn restore_requires_matching_dimensions() {
        let mut life = Automaton::from_grid(Grid::dead(4, 4)).unwrap();
        let saved = Grid::from_rows(&["██", "██"]);
        assert!(matches!(
            life.restore(&saved).unwrap_err(),
            LifeError::DimensionMismatch { .. }
        ));

        let saved = Grid::random(4, 4, 11);
        life.restore(&saved).unwrap();
        assert_eq!(life.board(), &saved);
    }

    #[test]
    fn persisted_round_trip_through_the_named_constructor() {
        let life = Automaton::from_grid(Grid::random(12, 7, 5)).unwrap();
        let restored = Automaton::from_persisted_bytes(&life.serialize()).unwrap();
        assert_eq!(restored.board(), life.board());
    }

    #[test]
    fn persisted_zero_sized_board_is_invalid_dimensions() {
        let bytes = codec::encode(&Grid::dead(0, 4));
        assert_eq!(
            Automaton::from_persisted_bytes(&bytes).unwrap_err(),
            LifeError::InvalidDimensions
        );
    }

    #[test]
    fn render_draws_one_glyph_per_cell() {
        let life = Automaton::from_grid(Grid::from_rows(&["█·", "·█"])).unwrap();
        assert_eq!(life.render(), "█·\n·█");
    }
}
