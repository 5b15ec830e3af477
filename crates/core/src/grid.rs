//! Grid module - the boolean cell matrix
//!
//! The grid is a fixed-size 2D matrix of cells, dead = `false` and
//! alive = `true`. Uses a flat vector for better cache locality.
//! Coordinates: (x, y) where x ranges over columns (left to right) and
//! y over rows (top to bottom); storage is row-major (`y * width + x`).
//!
//! Neighbor counting treats the grid as a torus: every offset is taken
//! modulo the board dimensions, so the 8-neighborhood of a corner cell
//! reaches the opposite edges.

use crate::rng::SimpleRng;

/// A fixed-size boolean cell matrix using flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn dead(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid with cells alive or dead at random (roughly half each).
    ///
    /// The fill is deterministic for a given seed.
    pub fn random(width: usize, height: usize, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut grid = Self::dead(width, height);
        for cell in &mut grid.cells {
            *cell = rng.next_bool();
        }
        grid
    }

    /// Build a grid from rows of glyphs, `'█'` alive, anything else dead.
    ///
    /// Rows shorter than the widest row are padded with dead cells. Intended
    /// for seeding patterns and for readable test fixtures.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::dead(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '█' {
                    grid.cells[y * width + x] = true;
                }
            }
        }
        grid
    }

    /// Width of the grid in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether another grid has the same shape.
    pub fn same_size(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Calculate flat index from (x, y) coordinates.
    /// Returns `None` if out of bounds.
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Get cell state at (x, y).
    /// Returns `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell state at (x, y).
    /// Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = alive;
                true
            }
            None => false,
        }
    }

    /// Set every cell to the given state.
    pub fn fill(&mut self, alive: bool) {
        self.cells.fill(alive);
    }

    /// Number of live cells on the board.
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// The raw cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Copy another grid's cells into this one without reallocating.
    ///
    /// Panics if the shapes differ; callers validate shape first.
    pub fn copy_from(&mut self, other: &Grid) {
        assert!(self.same_size(other));
        self.cells.copy_from_slice(&other.cells);
    }

    /// Count live cells among the 8 toroidally wrapped neighbors of (x, y).
    ///
    /// Offsets of -1 are expressed as `dim - 1` so the addition never
    /// underflows; on degenerate 1-wide or 1-tall boards the wrapped offsets
    /// coincide, which is exactly what modular arithmetic prescribes.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width;
        let h = self.height;
        let mut count = 0u8;
        for dy in [h - 1, 0, 1] {
            for dx in [w - 1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x + dx) % w;
                let ny = (y + dy) % h;
                if self.cells[ny * w + nx] {
                    count += 1;
                }
            }
        }
        count
    }
}
