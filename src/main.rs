//! Interactive Game of Life runner (default binary).
//!
//! One synchronous control loop owns the automaton and the change tracker:
//! poll input with a tick-bounded timeout, advance the simulation when it is
//! running and a tick has elapsed, publish the diff, flush the framebuffer.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::adapter::{CellSink, ChangeTracker, NoteSink};
use tui_life::config::Config;
use tui_life::core::{Automaton, Grid};
use tui_life::input::{handle_key_event, should_quit, PointerPainter};
use tui_life::term::{BoardView, CanvasSink, TerminalRenderer};
use tui_life::types::LifeAction;

/// How the starting board is produced.
enum BoardSource {
    Empty,
    Random(u32),
    Load(PathBuf),
}

struct CliArgs {
    config: Option<PathBuf>,
    source: BoardSource,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut config = None;
    let mut source = BoardSource::Empty;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config = Some(PathBuf::from(v));
            }
            "--load" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --load"))?;
                source = BoardSource::Load(PathBuf::from(v));
            }
            "--random" => {
                // Optional seed; fall back to the clock for a fresh board.
                let seed = match args.get(i + 1) {
                    Some(v) if !v.starts_with("--") => {
                        i += 1;
                        v.parse::<u32>()
                            .map_err(|_| anyhow!("invalid --random seed: {}", v))?
                    }
                    _ => clock_seed(),
                };
                source = BoardSource::Random(seed);
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(CliArgs { config, source })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn build_automaton(source: &BoardSource, config: &Config) -> Result<Automaton> {
    let automaton = match source {
        BoardSource::Empty => Automaton::from_grid(Grid::dead(config.width, config.height))?,
        BoardSource::Random(seed) => {
            Automaton::from_grid(Grid::random(config.width, config.height, *seed))?
        }
        BoardSource::Load(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("could not read board file {}", path.display()))?;
            Automaton::from_persisted_bytes(&bytes)
                .with_context(|| format!("could not load board file {}", path.display()))?
        }
    };
    Ok(automaton)
}

/// The per-frame sink stack: canvas always, notes when configured.
struct FrameSink {
    canvas: CanvasSink,
    notes: Option<NoteSink<BufWriter<File>>>,
}

impl CellSink for FrameSink {
    fn on_cell_changed(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.canvas.on_cell_changed(x, y, alive)?;
        if let Some(notes) = &mut self.notes {
            notes.on_cell_changed(x, y, alive)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let automaton = build_automaton(&cli.source, &config)?;

    let mut term = TerminalRenderer::new();
    term.enter("John Conway's Game of Life")?;

    let result = run(&mut term, &config, automaton);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, mut life: Automaton) -> Result<()> {
    let board_w = life.board().width();
    let board_h = life.board().height();
    let geometry = config.geometry();
    let view = BoardView::new(
        geometry,
        config.grid_color(),
        config.dead_color(),
        config.live_color(),
    );

    let (vw, vh) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut canvas = CanvasSink::new(view, vw, vh);

    let notes = if config.emit_notes {
        let file = File::create(&config.notes_path)
            .with_context(|| format!("could not open notes file {}", config.notes_path))?;
        Some(NoteSink::new(BufWriter::new(file)))
    } else {
        None
    };

    // Start from an empty canvas and an all-dead baseline: the first publish
    // then paints every live cell and starts its note, like the original's
    // empty-board bootstrap draw.
    let empty = Grid::dead(board_w, board_h);
    canvas.full_redraw(&empty, vw, vh);
    let mut tracker = ChangeTracker::new(&empty, FrameSink { canvas, notes });
    tracker.publish(life.board())?;

    let mut saved: Grid = life.board().clone();
    let mut painter = PointerPainter::new();
    let mut running = false;
    let mut message = String::new();

    let tick = config.tick_duration();
    let mut last_tick = Instant::now();
    let status_row = geometry.origin_y + view.board_size(life.board()).1 + 1;

    loop {
        let status = format!(
            "{}  [space] run  [->] step  [c] clear  [s] save  [r] restore  [q] quit  {}",
            if running { "RUNNING" } else { "PAUSED " },
            message
        );
        tracker.sink_mut().canvas.status_line(status_row, &status);
        term.draw(tracker.sink().canvas.fb())?;
        if let Some(notes) = &mut tracker.sink_mut().notes {
            notes.flush()?;
        }

        // Input with timeout until next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        if let Some(notes) = &mut tracker.sink_mut().notes {
                            notes.all_notes_off()?;
                        }
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(
                            action,
                            &mut life,
                            &mut tracker,
                            &mut saved,
                            &mut running,
                            &mut message,
                            config,
                        )?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = painter.handle_mouse(mouse, geometry, board_w, board_h) {
                        apply_action(
                            action,
                            &mut life,
                            &mut tracker,
                            &mut saved,
                            &mut running,
                            &mut message,
                            config,
                        )?;
                    }
                }
                Event::Resize(new_w, new_h) => {
                    term.invalidate();
                    tracker
                        .sink_mut()
                        .canvas
                        .full_redraw(life.board(), new_w, new_h);
                }
                _ => {}
            }
        }

        // Tick.
        if running && last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            life.step();
            tracker.publish(life.board())?;
        }
    }
}

fn apply_action(
    action: LifeAction,
    life: &mut Automaton,
    tracker: &mut ChangeTracker<FrameSink>,
    saved: &mut Grid,
    running: &mut bool,
    message: &mut String,
    config: &Config,
) -> Result<()> {
    match action {
        LifeAction::TogglePause => {
            *running = !*running;
            message.clear();
        }
        LifeAction::StepOnce => {
            life.step();
            tracker.publish(life.board())?;
        }
        LifeAction::Clear => {
            life.clear();
            tracker.publish(life.board())?;
            if config.silence_on_clear {
                if let Some(notes) = &mut tracker.sink_mut().notes {
                    notes.all_notes_off()?;
                }
            }
        }
        LifeAction::SaveSlot => {
            saved.copy_from(life.board());
            *message = "board saved".to_string();
        }
        LifeAction::RestoreSlot => {
            *running = false;
            life.restore(saved)?;
            tracker.publish(life.board())?;
        }
        LifeAction::ExportBoard => {
            let stamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let path = format!("game_of_life_{}.board", stamp);
            fs::write(&path, life.serialize())
                .with_context(|| format!("could not write board file {}", path))?;
            *message = format!("saved as \"{}\"", path);
        }
        LifeAction::ToggleCell { x, y } => {
            life.toggle_cell(x, y)?;
            tracker.publish(life.board())?;
        }
    }
    Ok(())
}
