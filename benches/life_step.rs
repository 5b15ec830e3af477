use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_life::adapter::{CellSink, ChangeTracker};
use tui_life::core::{Automaton, Grid};

/// Counts changes without retaining them, so iterations stay allocation-free.
struct CountingSink {
    count: u64,
}

impl CellSink for CountingSink {
    fn on_cell_changed(&mut self, _x: usize, _y: usize, _alive: bool) -> anyhow::Result<()> {
        self.count += 1;
        Ok(())
    }
}

fn bench_step(c: &mut Criterion) {
    let mut life = Automaton::from_grid(Grid::random(100, 50, 12345)).unwrap();

    c.bench_function("step_100x50", |b| {
        b.iter(|| {
            life.step();
            black_box(life.board().count_alive())
        })
    });
}

fn bench_publish_unchanged(c: &mut Criterion) {
    let grid = Grid::random(100, 50, 12345);
    let mut tracker = ChangeTracker::new(&grid, CountingSink { count: 0 });

    c.bench_function("publish_unchanged_100x50", |b| {
        b.iter(|| {
            tracker.publish(black_box(&grid)).unwrap();
        })
    });
}

fn bench_step_and_publish(c: &mut Criterion) {
    let mut life = Automaton::from_grid(Grid::random(100, 50, 999)).unwrap();
    let mut tracker = ChangeTracker::new(life.board(), CountingSink { count: 0 });

    c.bench_function("step_and_publish_100x50", |b| {
        b.iter(|| {
            life.step();
            tracker.publish(life.board()).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_publish_unchanged,
    bench_step_and_publish
);
criterion_main!(benches);
