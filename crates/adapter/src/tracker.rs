//! ChangeTracker: diffs each new board against the last published snapshot.

use anyhow::Result;

use tui_life_core::{Grid, LifeError};

use crate::sink::CellSink;

/// Tracks "what was last rendered/sounded" and forwards only the delta.
///
/// The tracker owns its sink and a deep copy of the baseline grid. It never
/// holds a reference back into the automaton, so the simulation is free to
/// mutate its board between publishes.
pub struct ChangeTracker<S: CellSink> {
    snapshot: Grid,
    sink: S,
}

impl<S: CellSink> ChangeTracker<S> {
    /// Store a copy of `initial` as the baseline and take ownership of the
    /// sink.
    pub fn new(initial: &Grid, sink: S) -> Self {
        Self {
            snapshot: initial.clone(),
            sink,
        }
    }

    /// The last committed baseline.
    pub fn snapshot(&self) -> &Grid {
        &self.snapshot
    }

    /// The owned sink (e.g. to reach a canvas for flushing).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the tracker and hand back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Publish a new board state.
    ///
    /// Scans row-major for cells where `current` differs from the baseline
    /// and invokes the sink exactly once per difference. The baseline is
    /// replaced with a copy of `current` only after every sink call
    /// succeeded; on any failure the baseline stays as it was, so a retry
    /// recomputes the same diff.
    ///
    /// Fails with [`LifeError::DimensionMismatch`] (downcastable through the
    /// returned error) when `current` has a different shape than the
    /// baseline; the sink is not called in that case.
    pub fn publish(&mut self, current: &Grid) -> Result<()> {
        if !self.snapshot.same_size(current) {
            return Err(LifeError::DimensionMismatch {
                expected: (self.snapshot.width(), self.snapshot.height()),
                found: (current.width(), current.height()),
            }
            .into());
        }

        let width = current.width();
        for (idx, (&now, &before)) in current
            .cells()
            .iter()
            .zip(self.snapshot.cells())
            .enumerate()
        {
            if now != before {
                self.sink.on_cell_changed(idx % width, idx / width, now)?;
            }
        }

        // Commit: reuse the existing allocation.
        self.snapshot.copy_from(current);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CaptureSink;
    use anyhow::anyhow;

    struct FailAfter {
        remaining: usize,
        delivered: Vec<(usize, usize, bool)>,
    }

    impl CellSink for FailAfter {
        fn on_cell_changed(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
            if self.remaining == 0 {
                return Err(anyhow!("sink backend failed"));
            }
            self.remaining -= 1;
            self.delivered.push((x, y, alive));
            Ok(())
        }
    }

    #[test]
    fn unchanged_grid_produces_no_sink_calls() {
        let grid = Grid::random(6, 4, 1);
        let mut tracker = ChangeTracker::new(&grid, CaptureSink::new());
        tracker.publish(&grid).unwrap();
        assert!(tracker.sink().changes().is_empty());
    }

    #[test]
    fn each_differing_cell_is_dispatched_exactly_once() {
        let base = Grid::dead(4, 3);
        let mut tracker = ChangeTracker::new(&base, CaptureSink::new());

        let mut next = base.clone();
        next.set(1, 0, true);
        next.set(3, 2, true);
        tracker.publish(&next).unwrap();
        assert_eq!(tracker.sink().changes(), &[(1, 0, true), (3, 2, true)]);

        // Re-publishing the same grid is a no-op.
        tracker.sink_mut().clear();
        tracker.publish(&next).unwrap();
        assert!(tracker.sink().changes().is_empty());
    }

    #[test]
    fn deaths_are_reported_with_the_new_state() {
        let base = Grid::from_rows(&["██", "··"]);
        let mut tracker = ChangeTracker::new(&base, CaptureSink::new());

        let next = Grid::from_rows(&["·█", "·█"]);
        tracker.publish(&next).unwrap();
        assert_eq!(tracker.sink().changes(), &[(0, 0, false), (1, 1, true)]);
    }

    #[test]
    fn dimension_mismatch_reaches_no_sink() {
        let base = Grid::dead(4, 4);
        let mut tracker = ChangeTracker::new(&base, CaptureSink::new());

        let err = tracker.publish(&Grid::dead(4, 5)).unwrap_err();
        let life = err.downcast_ref::<LifeError>().unwrap();
        assert_eq!(
            *life,
            LifeError::DimensionMismatch {
                expected: (4, 4),
                found: (4, 5),
            }
        );
        assert!(tracker.sink().changes().is_empty());
    }

    #[test]
    fn failed_publish_keeps_the_baseline_so_a_retry_resends() {
        let base = Grid::dead(3, 1);
        let mut next = base.clone();
        next.set(0, 0, true);
        next.set(2, 0, true);

        // First attempt delivers one change, then the backend fails.
        let sink = FailAfter {
            remaining: 1,
            delivered: Vec::new(),
        };
        let mut tracker = ChangeTracker::new(&base, sink);
        assert!(tracker.publish(&next).is_err());
        assert_eq!(tracker.sink().delivered, &[(0, 0, true)]);
        assert_eq!(tracker.snapshot(), &base);

        // Retry recomputes the same diff from the unchanged baseline.
        tracker.sink_mut().remaining = usize::MAX;
        tracker.sink_mut().delivered.clear();
        tracker.publish(&next).unwrap();
        assert_eq!(tracker.sink().delivered, &[(0, 0, true), (2, 0, true)]);
        assert_eq!(tracker.snapshot(), &next);
    }
}
