//! Note events: map cell changes to MIDI-style note on/off records.
//!
//! A birth starts a note and a death stops one. The mapping is positional:
//! the cell column picks the note number and the row picks the velocity
//! (higher rows are louder), both folded into MIDI's 7-bit range.
//!
//! Events are serialized as line-delimited JSON to a pluggable writer, so
//! real device I/O (or a downstream bridge process) stays outside this
//! crate. One record per line:
//!
//! ```text
//! {"kind":"note_on","note":42,"velocity":115,"channel":0}
//! ```

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::sink::CellSink;

/// Number of MIDI note values (and velocity values).
const NOTE_RANGE: usize = 128;

/// Velocity used when force-stopping notes in bulk.
const SILENCE_VELOCITY: u8 = 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    NoteOn,
    NoteOff,
}

/// One note event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub kind: NoteKind,
    pub note: u8,
    pub velocity: u8,
    pub channel: u8,
}

/// Map a cell change to its note event.
///
/// An explicit two-arm match: births start notes, deaths stop them.
pub fn note_for_cell(x: usize, y: usize, alive: bool) -> NoteEvent {
    let kind = match alive {
        true => NoteKind::NoteOn,
        false => NoteKind::NoteOff,
    };
    NoteEvent {
        kind,
        note: (x % NOTE_RANGE) as u8,
        velocity: ((NOTE_RANGE - 1).wrapping_sub(y) % NOTE_RANGE) as u8,
        channel: 0,
    }
}

/// Emits one JSON line per note event to its writer.
pub struct NoteSink<W: Write> {
    out: W,
}

impl<W: Write> NoteSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, event: &NoteEvent) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Stop every note on the channel.
    ///
    /// Used on quit, and on clear when the silence-on-clear policy is
    /// enabled: the per-cell diff only stops notes for cells that just died,
    /// while this covers anything still sounding from earlier states.
    pub fn all_notes_off(&mut self) -> Result<()> {
        for note in 0..NOTE_RANGE as u8 {
            self.emit(&NoteEvent {
                kind: NoteKind::NoteOff,
                note,
                velocity: SILENCE_VELOCITY,
                channel: 0,
            })?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Flush buffered events to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CellSink for NoteSink<W> {
    fn on_cell_changed(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let event = note_for_cell(x, y, alive);
        self.emit(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn births_start_notes_and_deaths_stop_them() {
        let on = note_for_cell(60, 60, true);
        assert_eq!(on.kind, NoteKind::NoteOn);
        assert_eq!(on.note, 60);
        assert_eq!(on.velocity, 67);
        assert_eq!(on.channel, 0);

        let off = note_for_cell(60, 60, false);
        assert_eq!(off.kind, NoteKind::NoteOff);
        assert_eq!(off.note, 60);
    }

    #[test]
    fn note_and_velocity_fold_into_midi_range() {
        // Column 130 folds to note 2.
        assert_eq!(note_for_cell(130, 0, true).note, 2);
        // Row 0 is the loudest.
        assert_eq!(note_for_cell(0, 0, true).velocity, 127);
        // Row 127 folds to 0, row 128 wraps back to 127.
        assert_eq!(note_for_cell(0, 127, true).velocity, 0);
        assert_eq!(note_for_cell(0, 128, true).velocity, 127);
    }

    #[test]
    fn sink_writes_one_json_line_per_change() {
        let mut sink = NoteSink::new(Vec::new());
        sink.on_cell_changed(3, 1, true).unwrap();
        sink.on_cell_changed(3, 1, false).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: NoteEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, note_for_cell(3, 1, true));
        let second: NoteEvent = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.kind, NoteKind::NoteOff);
    }

    #[test]
    fn all_notes_off_covers_the_full_range() {
        let mut sink = NoteSink::new(Vec::new());
        sink.all_notes_off().unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let events: Vec<NoteEvent> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(events.len(), 128);
        assert!(events.iter().all(|e| e.kind == NoteKind::NoteOff));
        assert_eq!(events[0].note, 0);
        assert_eq!(events[127].note, 127);
    }
}
