//! Terminal canvas module.
//!
//! The terminal is this project's pixel canvas: board cells are painted as
//! colored character rectangles into a framebuffer, and the framebuffer is
//! flushed to the real terminal with run-coalesced diffing.
//!
//! Goals:
//! - Keep `core` free of any rendering concern
//! - Paint only what changed: the tracker diffs at the board level, the
//!   renderer diffs at the character level
//! - Share one geometry description between painting and pointer
//!   hit-testing

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use canvas::CanvasSink;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::BoardView;
