//! tui-life (workspace facade crate).
//!
//! This package keeps a stable `tui_life::{core,adapter,term,input,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`. The facade also hosts the configuration surface shared by the
//! interactive and headless binaries.

pub mod config;

pub use tui_life_adapter as adapter;
pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;
