//! The per-cell change sink contract and generic sink combinators.

use anyhow::Result;

/// Consumer of per-cell state changes.
///
/// The tracker calls this exactly once for every cell whose state differs
/// from the last published snapshot. Implementations perform the actual side
/// effect (paint a rectangle, emit a note, record for a test); a returned
/// error aborts the publish and leaves the tracker's baseline untouched.
pub trait CellSink {
    fn on_cell_changed(&mut self, x: usize, y: usize, alive: bool) -> Result<()>;
}

/// Forward each change to several sinks in order.
///
/// Composition lives here, outside the tracker, so the tracker only ever
/// knows about a single sink.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn CellSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sink: Box<dyn CellSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl CellSink for FanoutSink {
    fn on_cell_changed(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        for sink in &mut self.sinks {
            sink.on_cell_changed(x, y, alive)?;
        }
        Ok(())
    }
}

/// Records every change it receives; the test sink.
#[derive(Debug, Default)]
pub struct CaptureSink {
    changes: Vec<(usize, usize, bool)>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(x, y, alive)` changes received so far, in dispatch order.
    pub fn changes(&self) -> &[(usize, usize, bool)] {
        &self.changes
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}

impl CellSink for CaptureSink {
    fn on_cell_changed(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.changes.push((x, y, alive));
        Ok(())
    }
}
