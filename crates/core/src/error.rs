//! Validation error taxonomy for the simulation core.
//!
//! Every failure here is local, synchronous, and non-retriable: the caller
//! passed a value the core cannot accept. The core never recovers on the
//! caller's behalf and no operation leaves the board in a partial state.

use std::fmt;

/// Errors produced by the simulation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A grid with zero rows or zero columns was used to construct an
    /// automaton.
    InvalidDimensions,
    /// A cell address outside the board extents. Direct addressing never
    /// wraps; only neighbor lookups do.
    OutOfBounds { x: usize, y: usize },
    /// Two grids that must share a shape did not. Dimensions are
    /// `(width, height)`.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A persisted byte stream did not parse into a rectangular boolean
    /// matrix.
    CorruptData(String),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidDimensions => {
                write!(f, "grid must have at least one row and one column")
            }
            LifeError::OutOfBounds { x, y } => {
                write!(f, "cell ({}, {}) is outside the board", x, y)
            }
            LifeError::DimensionMismatch { expected, found } => write!(
                f,
                "grid is {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            LifeError::CorruptData(reason) => {
                write!(f, "corrupt board data: {}", reason)
            }
        }
    }
}

impl std::error::Error for LifeError {}
