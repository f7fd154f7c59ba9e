//! headless: runs the train routing puzzle without a window.
//!
//! Builds a two-station layout with one switch, starts the game and runs a
//! fixed number of frames, flipping the switch at a regular interval the way
//! a player would.  Writes the arrival journal and a final snapshot to
//! `OUTPUT_DIR`, then checks that the snapshot restores.
//!
//! Usage: `headless [config.json]`.  Set `RUST_LOG` to change log verbosity.

mod layout;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use tr_core::GameConfig;
use tr_output::{CsvWriter, OutputObserver, load_snapshot, save_snapshot};
use tr_sim::{Command, World, WorldBuilder};

use layout::{SWITCH, build_layout};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAMES:              u64  = 60 * 60 * 5; // 5 minutes at 60 FPS
const TOGGLE_EVERY_FRAMES: u64  = 450;
const SCORE_INTERVAL:      u64  = 60;
const OUTPUT_DIR:          &str = "output/headless";

fn load_config(path: Option<String>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config(std::env::args().nth(1))?;
    println!("=== headless: train routing puzzle ===");
    println!(
        "Map: {}x{} tiles  |  Frames: {FRAMES}  |  Seed: {}",
        config.map_width, config.map_height, config.seed
    );

    // 1. Lay out the map during setup.
    let mut world = WorldBuilder::new(config).build()?;
    build_layout(&mut world)?;
    println!(
        "Layout: {} elements, stations: {}",
        world.map().grid().len(),
        world
            .map()
            .station_colors()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // 2. Start and run, journaling to CSV.
    let outcome = world.apply(Command::Start);
    if let Some(notice) = outcome.notice {
        anyhow::bail!("cannot start: {notice}");
    }

    let output_dir = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(output_dir)?;
    let mut observer = OutputObserver::new(CsvWriter::new(output_dir)?, SCORE_INTERVAL);

    let t0 = Instant::now();
    let mut frames = 0;
    while frames < FRAMES {
        let chunk = TOGGLE_EVERY_FRAMES.min(FRAMES - frames);
        world.run_frames(chunk, &mut observer)?;
        frames += chunk;
        world.apply(Command::Toggle(SWITCH));
        info!("frame {frames}: switch toggled, score {:?}", world.score());
    }
    observer.finish()?;
    let elapsed = t0.elapsed();

    let score = world.score();
    println!();
    println!("Score: {} correct, {} wrong (net {})", score.correct, score.wrong, score.net());
    println!("Trains on the map: {} ({} active)", world.trains().len(), world.active_trains());
    println!("Ran {FRAMES} frames in {:.1} ms", elapsed.as_secs_f64() * 1e3);

    // 3. Persist and verify the snapshot.
    let snapshot_path = output_dir.join("world.json");
    save_snapshot(&snapshot_path, &world.snapshot())?;
    let restored = World::restore(load_snapshot(&snapshot_path)?)?;
    anyhow::ensure!(restored.score() == score, "restored score differs");
    println!("Output written to {}", output_dir.display());
    Ok(())
}
