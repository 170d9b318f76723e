use log::info;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::Config,
    engine::{Automaton, Rules},
    error::Result,
    grid::Grid,
    render,
    sink::FrameSink,
};

/// A validated configuration plus the automaton it drives.
pub struct Simulation {
    config: Config,
    automaton: Automaton,
    settings: render::Settings,
    rng: StdRng,
}

impl Simulation {
    /// Starts from a random grid, seeded from `config.seed` when present.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let mut rng = seeded(config.seed);
        let grid = Grid::random(config.rows, config.cols, &mut rng);
        Ok(Self::build(config, grid, rng))
    }

    /// Starts from `grid`, whose size overrides the configured one.
    pub fn with_grid(mut config: Config, grid: Grid) -> Result<Self> {
        config.rows = grid.rows();
        config.cols = grid.cols();
        config.validate()?;
        let rng = seeded(config.seed);
        Ok(Self::build(config, grid, rng))
    }

    fn build(config: Config, grid: Grid, rng: StdRng) -> Self {
        let settings = render::Settings::new(&config);
        let automaton = Automaton::new(grid, Rules::from(&config));
        Self {
            config,
            automaton,
            settings,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        self.automaton.grid()
    }

    pub fn settings(&self) -> render::Settings {
        self.settings
    }

    /// Runs every generation in order, handing each frame to `sink`, then finalizes it.
    pub fn run<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> Result<&Grid> {
        let generations = self.config.generations;
        info!(
            "running {generations} generations on a {}x{} grid, canvas {}x{}",
            self.config.rows, self.config.cols, self.settings.width, self.settings.height
        );
        for _ in 0..generations {
            let grid = self.automaton.step(&mut self.rng);
            let frame = grid.render(self.settings);
            sink.write_frame(&frame, self.automaton.generation())?;
        }
        sink.finalize(generations, self.config.frame_duration)?;
        info!(
            "finished with population {}",
            self.automaton.grid().population()
        );
        Ok(self.automaton.grid())
    }
}

fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
