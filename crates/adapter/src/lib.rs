//! Adapter module - change tracking and per-cell side-effect dispatch
//!
//! This module sits between the simulation core and whatever consumes cell
//! state changes (terminal canvas, note emission, test capture). The core
//! never draws or sounds anything itself; it hands each new board to a
//! [`ChangeTracker`], which compares it against the last published snapshot
//! and forwards only the cells that actually changed.
//!
//! # Why diff at all
//!
//! A full redraw per tick would be wasteful for the canvas and wrong for
//! notes: re-sending note-on for a cell that stayed alive would retrigger
//! the note every frame. The diff is the one optimization the design relies
//! on for correctness, so it is a first-class contract here rather than a
//! renderer detail.
//!
//! # Contract
//!
//! - `publish` calls the sink **exactly once** per changed cell, in
//!   row-major order within a call (deterministic, but not a sink-visible
//!   guarantee).
//! - The snapshot baseline is committed only after every sink call
//!   succeeded. A sink failure propagates to the caller and the next
//!   `publish` recomputes the same diff.
//! - Publishing a grid of a different shape than the baseline is a
//!   [`LifeError::DimensionMismatch`] and reaches no sink.
//!
//! # Note events
//!
//! The [`notes`] module maps cell changes to MIDI-style note events
//! (note-on for births, note-off for deaths) and serializes them as
//! line-delimited JSON to a pluggable writer. Actual device I/O stays
//! behind that writer seam.

pub mod notes;
pub mod sink;
pub mod tracker;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use notes::{note_for_cell, NoteEvent, NoteKind, NoteSink};
pub use sink::{CaptureSink, CellSink, FanoutSink};
pub use tracker::ChangeTracker;

// Re-exported so sink implementations and tests can match on the typed error.
pub use tui_life_core::LifeError;
