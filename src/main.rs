use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hexlife::{Config, DirectorySink, Reanimation, Simulation, config};
use log::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReanimationArg {
    /// Pick any cell and leave it alone if it is already alive.
    Skip,
    /// Pick only among dead cells.
    PickDead,
}

impl From<ReanimationArg> for Reanimation {
    fn from(arg: ReanimationArg) -> Self {
        match arg {
            ReanimationArg::Skip => Reanimation::SkipIfAlive,
            ReanimationArg::PickDead => Reanimation::PickDead,
        }
    }
}

/// Hexagonal Game of Life, written out as one PNG per generation plus a GIF.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = config::ROWS)]
    rows: usize,
    #[arg(long, default_value_t = config::COLS)]
    cols: usize,
    /// Hexagon radius in pixels.
    #[arg(long, default_value_t = config::CELL_RADIUS)]
    radius: f64,
    #[arg(short, long, default_value_t = config::GENERATIONS)]
    generations: usize,
    /// Every n-th generation brings all dead cells back.
    #[arg(long, value_name = "N", default_value_t = config::RESURRECT_AFTER)]
    resurrect_after: usize,
    /// Every n-th generation brings one random cell to life.
    #[arg(long, value_name = "N", default_value_t = config::RANDOM_LIFE_AFTER)]
    random_life_after: usize,
    #[arg(long, value_enum, default_value_t = ReanimationArg::Skip)]
    reanimation: ReanimationArg,
    /// Never resurrect on generation 1.
    #[arg(long)]
    spare_first_generation: bool,
    /// Seconds each frame is shown in the animation.
    #[arg(long, value_name = "SECONDS", default_value_t = config::FRAME_DURATION)]
    frame_duration: f64,
    #[arg(long)]
    seed: Option<u64>,
    /// Directory receiving the frames and the animation.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            rows: args.rows,
            cols: args.cols,
            cell_radius: args.radius,
            generations: args.generations,
            resurrect_after: args.resurrect_after,
            random_life_after: args.random_life_after,
            frame_duration: args.frame_duration,
            reanimation: args.reanimation.into(),
            spare_first_generation: args.spare_first_generation,
            seed: args.seed,
            ..Config::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let output = args.output.clone();
    let mut simulation = Simulation::new(args.into())?;
    let mut sink = DirectorySink::new(&output)
        .with_context(|| format!("cannot use {} for output", output.display()))?;
    simulation
        .run(&mut sink)
        .with_context(|| format!("writing frames to {}", output.display()))?;
    info!("animation written to {}", sink.animation_path().display());
    Ok(())
}
