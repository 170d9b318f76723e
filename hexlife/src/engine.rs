use log::{debug, trace};
use rand::{Rng, seq::IteratorRandom};

use crate::{
    config::{Config, Reanimation},
    grid::{Cell, Grid},
    topology::Topology,
};

/// The periodic parts of the update rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    pub resurrect_after: usize,
    pub random_life_after: usize,
    pub reanimation: Reanimation,
    pub spare_first_generation: bool,
}

impl Rules {
    pub fn resurrects_at(&self, generation: usize) -> bool {
        if self.spare_first_generation && generation == 1 {
            return false;
        }
        generation % self.resurrect_after == 0
    }

    pub fn reanimates_at(&self, generation: usize) -> bool {
        generation % self.random_life_after == 0
    }
}

impl From<&Config> for Rules {
    fn from(config: &Config) -> Self {
        Self {
            resurrect_after: config.resurrect_after,
            random_life_after: config.random_life_after,
            reanimation: config.reanimation,
            spare_first_generation: config.spare_first_generation,
        }
    }
}

/// Computes the next grid from a read-only snapshot of `grid`.
///
/// Live cells survive on 2 or 3 live neighbours. Dead cells are born on
/// exactly 3, and otherwise come back only when `resurrect` is set.
pub fn next_generation(grid: &Grid, topology: &Topology, resurrect: bool) -> Grid {
    let mut next = Grid::dead(grid.rows(), grid.cols());
    for p in grid.coords() {
        let live = topology
            .neighbours(p)
            .iter()
            .filter(|&&n| grid.get(n))
            .count();
        let alive = match (grid.get(p), live) {
            (true, 2 | 3) | (false, 3) => true,
            (true, _) => false,
            (false, _) => resurrect,
        };
        next.set(p, alive);
    }
    next
}

/// Brings one random cell to life, returning it if anything changed.
pub fn reanimate<R: Rng + ?Sized>(
    grid: &mut Grid,
    policy: Reanimation,
    rng: &mut R,
) -> Option<Cell> {
    let p = match policy {
        Reanimation::SkipIfAlive => {
            let p = (rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
            if grid.get(p) {
                trace!("reanimation picked live cell {p:?}, skipping");
                return None;
            }
            p
        }
        Reanimation::PickDead => grid.dead_cells().choose(rng)?,
    };
    grid.set(p, true);
    Some(p)
}

#[derive(Clone, Debug)]
pub struct Automaton {
    grid: Grid,
    topology: Topology,
    rules: Rules,
    generation: usize,
}

impl Automaton {
    pub fn new(grid: Grid, rules: Rules) -> Self {
        let topology = Topology::new(grid.rows(), grid.cols());
        Self {
            grid,
            topology,
            rules,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of transitions applied so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Applies one transition, counted from generation 1.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Grid {
        self.generation += 1;
        let generation = self.generation;
        let resurrect = self.rules.resurrects_at(generation);
        self.grid = next_generation(&self.grid, &self.topology, resurrect);
        let reanimated = if self.rules.reanimates_at(generation) {
            reanimate(&mut self.grid, self.rules.reanimation, rng)
        } else {
            None
        };
        debug!(
            "generation {generation}: population {}, resurrect {resurrect}, reanimated {reanimated:?}",
            self.grid.population()
        );
        &self.grid
    }
}
