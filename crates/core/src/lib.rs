//! Core simulation logic - pure, deterministic, and testable
//!
//! This module contains the cellular automaton itself: the board, the
//! transition rule, and the persisted board codec. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same board always steps to the same board
//! - **Testable**: every rule and edge case is unit tested
//! - **Portable**: runs in any environment (terminal, headless, benchmarks)
//! - **Fast**: the generation step reuses a scratch buffer and does not
//!   allocate
//!
//! # Module Structure
//!
//! - [`grid`]: flat row-major boolean matrix with toroidal neighbor counting
//! - [`automaton`]: the Game of Life engine (step, toggle, clear, restore)
//! - [`codec`]: binary encoding of a grid for save/load
//! - [`error`]: the validation error taxonomy
//! - [`rng`]: small deterministic RNG for random starting boards
//!
//! # Rules
//!
//! Conway's standard B3/S23 rule on a torus: a cell is alive in the next
//! generation iff it has exactly 3 live neighbors, or it is alive and has
//! exactly 2. Neighbor lookups wrap around both board edges, so row `H-1` is
//! adjacent to row `0` and column `W-1` to column `0`.
//!
//! # Example
//!
//! ```
//! use tui_life_core::{Automaton, Grid};
//!
//! let mut grid = Grid::dead(5, 5);
//! // A vertical blinker in the middle of the board.
//! for y in 1..4 {
//!     grid.set(2, y, true);
//! }
//!
//! let mut life = Automaton::from_grid(grid).unwrap();
//! life.step();
//! // After one generation the blinker is horizontal.
//! assert!(life.board().get(1, 2).unwrap());
//! assert!(life.board().get(3, 2).unwrap());
//! ```

pub mod automaton;
pub mod codec;
pub mod error;
pub mod grid;
pub mod rng;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use automaton::Automaton;
pub use error::LifeError;
pub use grid::Grid;
pub use rng::SimpleRng;
