use std::collections::{BTreeSet, VecDeque};

use anyhow::{Result, bail};
use cavegen::{CaveGenerator, Cell, GeneratedCave, GenerationError, GeneratorConfig};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
}

fn range(rng: &mut ChaCha8Rng, min_value: i32, max_value: i32) -> i32 {
    let span = (max_value - min_value + 1) as u64;
    min_value + (rng.next_u64() % span) as i32
}

fn main() -> Result<()> {
    let args = Args::parse();
    Builder::from_default_env().filter_level(LevelFilter::Warn).init();

    println!("Starting cave fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut skipped = 0;

    for run in 0..args.runs {
        let config = GeneratorConfig {
            width: range(&mut rng, 20, 140),
            height: range(&mut rng, 20, 100),
            seed: format!("fuzz-{}", rng.next_u64()),
            fill_percent: range(&mut rng, 35, 55),
            border_size: range(&mut rng, 0, 3) as usize,
            ..GeneratorConfig::default()
        };

        let cave = match CaveGenerator::new(config.clone())?.generate() {
            Ok(cave) => cave,
            Err(GenerationError::NoViableRooms { .. }) => {
                skipped += 1;
                continue;
            }
            Err(error) => bail!("run {run} failed for {config:?}: {error}"),
        };

        // Assert invariants
        if !frame_is_solid(&cave) {
            bail!("Invariant failed: open cell in border frame (run {run}, {config:?})");
        }
        if !cave.rooms.iter().all(|room| room.is_accessible_from_main_room) {
            bail!("Invariant failed: room cut off from main room (run {run}, {config:?})");
        }
        if !open_cells_connected(&cave) {
            bail!("Invariant failed: floor split into pockets (run {run}, {config:?})");
        }
    }

    println!("Fuzzing completed successfully ({skipped} run(s) without viable rooms).");
    Ok(())
}

fn frame_is_solid(cave: &GeneratedCave) -> bool {
    let border = cave.border_size as i32;
    let right = cave.map.width() as i32 - border;
    let bottom = cave.map.height() as i32 - border;
    cave.map
        .coords()
        .filter(|pos| pos.x < border || pos.y < border || pos.x >= right || pos.y >= bottom)
        .all(|pos| cave.map.get(pos) == Some(Cell::Wall))
}

fn open_cells_connected(cave: &GeneratedCave) -> bool {
    let mut open = cave.map.coords().filter(|&pos| cave.map.get(pos) == Some(Cell::Floor));
    let Some(start) = open.next() else {
        return true;
    };
    let total = 1 + open.count();

    let mut frontier = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(pos) = frontier.pop_front() {
        for next in pos.orthogonal_neighbors() {
            if cave.map.get(next) == Some(Cell::Floor) && seen.insert(next) {
                frontier.push_back(next);
            }
        }
    }
    seen.len() == total
}
