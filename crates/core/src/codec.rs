//! Binary codec for persisted boards.
//!
//! Layout: two little-endian `u32` values (height, then width) followed by
//! `height * width` cell bytes in row-major order, dead = 0 and alive = 1.
//! The format is self-describing, so a round-trip reproduces the exact grid.
//!
//! Decoding is strict: a truncated header or payload, trailing bytes, or any
//! cell byte other than 0/1 is rejected as corrupt.

use crate::error::LifeError;
use crate::grid::Grid;

/// Header size in bytes: height and width as `u32` each.
const HEADER_LEN: usize = 8;

/// Encode a grid into the persisted byte layout.
pub fn encode(grid: &Grid) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + grid.cells().len());
    out.extend_from_slice(&(grid.height() as u32).to_le_bytes());
    out.extend_from_slice(&(grid.width() as u32).to_le_bytes());
    out.extend(grid.cells().iter().map(|&alive| alive as u8));
    out
}

/// Decode a persisted byte stream back into a grid.
pub fn decode(bytes: &[u8]) -> Result<Grid, LifeError> {
    if bytes.len() < HEADER_LEN {
        return Err(LifeError::CorruptData(format!(
            "{} bytes is too short for the dimension header",
            bytes.len()
        )));
    }

    let height = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let width = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
    let payload = &bytes[HEADER_LEN..];

    let expected = width
        .checked_mul(height)
        .ok_or_else(|| LifeError::CorruptData("dimension header overflows".to_string()))?;
    if payload.len() != expected {
        return Err(LifeError::CorruptData(format!(
            "{}x{} board needs {} cell bytes, found {}",
            width,
            height,
            expected,
            payload.len()
        )));
    }

    let mut grid = Grid::dead(width, height);
    for (i, &byte) in payload.iter().enumerate() {
        match byte {
            0 => {}
            1 => {
                grid.set(i % width, i / width, true);
            }
            other => {
                return Err(LifeError::CorruptData(format!(
                    "cell byte {} is {}, expected 0 or 1",
                    i, other
                )));
            }
        }
    }
    Ok(grid)
}
