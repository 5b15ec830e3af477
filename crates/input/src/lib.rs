//! Terminal input module.
//!
//! This module is intentionally independent of any rendering concern. It
//! maps `crossterm` key events into [`tui_life_types::LifeAction`] and turns
//! mouse press/drag sequences into per-cell toggle actions using the shared
//! cell geometry.

pub mod map;
pub mod pointer;

pub use tui_life_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::PointerPainter;
