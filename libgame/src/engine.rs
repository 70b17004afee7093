use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use crate::{
    board::{CellState, Grid},
    config::LifeConfig,
    error::LifeError,
    neighbors::{NeighborCounter, NeighborCounts, new_counter},
    rule,
};

/// Owns the grid of a single simulation and advances it one generation per [`tick`].
///
/// The next generation is built in a scratch grid from the previous one only, then the
/// two buffers are swapped, so no partially updated generation is ever observable.
///
/// [`tick`]: LifeEngine::tick
pub struct LifeEngine<R = StdRng> {
    grid: Grid,
    next: Grid,
    generation: u64,
    birth_rate: Option<f64>,
    initial_grid: Option<Grid>,
    counter: Box<dyn NeighborCounter>,
    rng: R,
}

impl LifeEngine<StdRng> {
    /// Builds an engine seeded from `config.seed`, or from the OS when no seed is set.
    pub fn new(config: &LifeConfig) -> Result<Self, LifeError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::with_rng(config, rng)
    }

    /// Starts from `grid`, which must match the configured shape.
    pub fn from_grid(config: &LifeConfig, grid: Grid) -> Result<Self, LifeError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::from_grid_with_rng(config, grid, rng)
    }
}

impl<R> LifeEngine<R>
where
    R: Rng,
{
    /// Starts from the configured initial grid, or a random one drawn from `rng`.
    pub fn with_rng(config: &LifeConfig, mut rng: R) -> Result<Self, LifeError> {
        config.validate()?;

        let initial_grid = config.initial_grid()?;
        let grid = match &initial_grid {
            Some(initial_grid) => initial_grid.clone(),
            None => Grid::random(config.rows, config.cols, &mut rng)?,
        };

        Ok(Self::build(config, grid, initial_grid, rng))
    }

    pub fn from_grid_with_rng(config: &LifeConfig, grid: Grid, rng: R) -> Result<Self, LifeError> {
        config.validate()?;
        config.check_shape(&grid)?;

        Ok(Self::build(config, grid.clone(), Some(grid), rng))
    }

    fn build(config: &LifeConfig, grid: Grid, initial_grid: Option<Grid>, rng: R) -> Self {
        let counter = new_counter(config.counting, config.boundary, config.rows, config.cols);

        debug!(
            rows = config.rows,
            cols = config.cols,
            birth_rate = ?config.birth_rate,
            boundary = ?config.boundary,
            counting = ?config.counting,
            population = grid.population(),
            "Created life engine"
        );

        Self {
            next: grid.clone(),
            grid,
            generation: 0,
            birth_rate: config.birth_rate,
            initial_grid,
            counter,
            rng,
        }
    }

    /// Advances the simulation by one generation.
    pub fn tick(&mut self) -> Result<(), LifeError> {
        let counts = self.counter.count(&self.grid)?;

        if counts.shape() != self.grid.shape() {
            let (got_rows, got_cols) = counts.shape();
            return Err(LifeError::DimensionMismatch {
                rows: self.grid.rows(),
                cols: self.grid.cols(),
                got_rows,
                got_cols,
            });
        }

        let next_cells = self.next.cells_mut();
        for ((next, current), count) in next_cells
            .iter_mut()
            .zip(self.grid.cells())
            .zip(counts.as_slice())
        {
            *next = rule::next_state(*current, *count);
        }

        // Runs only after the whole deterministic pass. One draw per cell, alive or not.
        let mut forced_births = 0;
        if let Some(birth_rate) = self.birth_rate.filter(|birth_rate| *birth_rate > 0.0) {
            for next in next_cells.iter_mut() {
                if self.rng.random::<f64>() < birth_rate && !next.is_alive() {
                    *next = CellState::Alive;
                    forced_births += 1;
                }
            }
        }

        std::mem::swap(&mut self.grid, &mut self.next);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.population(),
            forced_births,
            "Ticked"
        );

        Ok(())
    }

    /// Sets the grid back to its starting state: the supplied initial grid if there
    /// is one, otherwise a fresh random grid. The generation counter restarts at 0.
    pub fn reset(&mut self) -> Result<(), LifeError> {
        let (rows, cols) = self.grid.shape();

        self.grid = match &self.initial_grid {
            Some(initial_grid) => initial_grid.clone(),
            None => Grid::random(rows, cols, &mut self.rng)?,
        };
        self.generation = 0;

        debug!(population = self.population(), "Reset life engine");

        Ok(())
    }

    /// Counts live cells. Walks the whole grid every call.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn birth_rate(&self) -> Option<f64> {
        self.birth_rate
    }

    /// Live-neighbor counts of the current generation.
    pub fn neighbor_counts(&self) -> Result<NeighborCounts, LifeError> {
        self.counter.count(&self.grid)
    }
}
