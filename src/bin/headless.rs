//! Headless runner: advance a board without a terminal UI.
//!
//! Useful for smoke-testing rules and persisted boards:
//!
//! ```bash
//! headless --width 40 --height 20 --seed 7 --steps 30
//! headless --load saved.board --steps 1 --print-each
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use tui_life::core::{Automaton, Grid};
use tui_life::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

struct HeadlessArgs {
    width: usize,
    height: usize,
    seed: u32,
    steps: u32,
    load: Option<PathBuf>,
    print_each: bool,
}

fn parse_args(args: &[String]) -> Result<HeadlessArgs> {
    let mut parsed = HeadlessArgs {
        width: DEFAULT_BOARD_WIDTH,
        height: DEFAULT_BOARD_HEIGHT,
        seed: 1,
        steps: 30,
        load: None,
        print_each: false,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                parsed.width = parse_value(args.get(i), "--width")?;
            }
            "--height" => {
                i += 1;
                parsed.height = parse_value(args.get(i), "--height")?;
            }
            "--seed" => {
                i += 1;
                parsed.seed = parse_value(args.get(i), "--seed")?;
            }
            "--steps" => {
                i += 1;
                parsed.steps = parse_value(args.get(i), "--steps")?;
            }
            "--load" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --load"))?;
                parsed.load = Some(PathBuf::from(v));
            }
            "--print-each" => {
                parsed.print_each = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(parsed)
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid value for {}: {}", flag, v))
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let mut life = match &args.load {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("could not read board file {}", path.display()))?;
            Automaton::from_persisted_bytes(&bytes)
                .with_context(|| format!("could not load board file {}", path.display()))?
        }
        None => Automaton::from_grid(Grid::random(args.width, args.height, args.seed))?,
    };

    for generation in 0..args.steps {
        life.step();
        if args.print_each {
            println!("generation {} ({} alive)", generation + 1, life.board().count_alive());
            println!("{}", life.render());
        }
    }

    if !args.print_each {
        println!("{}", life.render());
        println!("{} alive after {} generations", life.board().count_alive(), args.steps);
    }
    Ok(())
}
