//! Configuration surface.
//!
//! One immutable struct, constructed at startup from an optional JSON file
//! and passed by reference to whichever component needs it. Never global.
//!
//! Recognized keys (all optional, defaults in parentheses):
//!
//! ```json
//! {
//!   "W": 100,
//!   "H": 50,
//!   "CELL_SIZE": 1,
//!   "GAP": 0,
//!   "FPS": 30,
//!   "GRID_COLOR": [30, 30, 30],
//!   "DEAD_LIVE_COLOR": [[0, 0, 0], [255, 255, 255]],
//!   "EMIT_NOTES": false,
//!   "SILENCE_ON_CLEAR": true,
//!   "NOTES_PATH": "life-notes.jsonl"
//! }
//! ```
//!
//! `CELL_SIZE` is in terminal rows: a cell is `2 * CELL_SIZE` columns wide by
//! `CELL_SIZE` rows tall to compensate for the typical glyph aspect ratio.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tui_life_term::Rgb;
use tui_life_types::{CellGeometry, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_FPS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Board width in cells (columns).
    #[serde(rename = "W", default = "default_width")]
    pub width: usize,
    /// Board height in cells (rows).
    #[serde(rename = "H", default = "default_height")]
    pub height: usize,
    /// Cell size in terminal rows; columns are doubled for aspect.
    #[serde(rename = "CELL_SIZE", default = "default_cell_size")]
    pub cell_size: u16,
    /// Background rows/columns between adjacent cells.
    #[serde(rename = "GAP", default)]
    pub gap: u16,
    /// Generations per second while the simulation is running.
    #[serde(rename = "FPS", default = "default_fps")]
    pub fps: u32,
    /// Background color behind and between cells.
    #[serde(rename = "GRID_COLOR", default = "default_grid_color")]
    pub grid_color: [u8; 3],
    /// Cell colors indexed by state: `[dead, alive]`.
    #[serde(rename = "DEAD_LIVE_COLOR", default = "default_dead_live_color")]
    pub dead_live_color: [[u8; 3]; 2],
    /// Emit note events for every cell change.
    #[serde(rename = "EMIT_NOTES", default)]
    pub emit_notes: bool,
    /// Clearing the board also stops every sounding note.
    #[serde(rename = "SILENCE_ON_CLEAR", default = "default_true")]
    pub silence_on_clear: bool,
    /// Where note events are written when `EMIT_NOTES` is set.
    #[serde(rename = "NOTES_PATH", default = "default_notes_path")]
    pub notes_path: String,
}

fn default_width() -> usize {
    DEFAULT_BOARD_WIDTH
}

fn default_height() -> usize {
    DEFAULT_BOARD_HEIGHT
}

fn default_cell_size() -> u16 {
    1
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_grid_color() -> [u8; 3] {
    [30, 30, 30]
}

fn default_dead_live_color() -> [[u8; 3]; 2] {
    [[0, 0, 0], [255, 255, 255]]
}

fn default_true() -> bool {
    true
}

fn default_notes_path() -> String {
    "life-notes.jsonl".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cell_size: default_cell_size(),
            gap: 0,
            fps: default_fps(),
            grid_color: default_grid_color(),
            dead_live_color: default_dead_live_color(),
            emit_notes: false,
            silence_on_clear: default_true(),
            notes_path: default_notes_path(),
        }
    }
}

impl Config {
    /// Load a configuration file, filling unspecified keys with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("could not parse config file {}", path.display()))
    }

    /// Cell geometry derived from `CELL_SIZE` and `GAP`.
    ///
    /// The board is anchored at the top-left of the screen.
    pub fn geometry(&self) -> CellGeometry {
        let cell_size = self.cell_size.max(1);
        CellGeometry {
            cell_w: cell_size * 2,
            cell_h: cell_size,
            gap: self.gap,
            origin_x: 0,
            origin_y: 0,
        }
    }

    pub fn grid_color(&self) -> Rgb {
        self.grid_color.into()
    }

    pub fn dead_color(&self) -> Rgb {
        self.dead_live_color[0].into()
    }

    pub fn live_color(&self) -> Rgb {
        self.dead_live_color[1].into()
    }

    /// Time between generations while running.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}
