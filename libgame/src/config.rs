use serde::{Deserialize, Serialize};

use crate::{
    board::Grid,
    error::LifeError,
    neighbors::{Boundary, CountingMethod},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,

    /// Per-tick probability of forcing each cell alive. `None` and `0.0` both disable it.
    pub birth_rate: Option<f64>,

    pub boundary: Boundary,
    pub counting: CountingMethod,

    /// Seed for the random generator. Drawn from the OS when absent.
    pub seed: Option<u64>,

    /// Rows of `0`/`1` values to start from instead of a random grid.
    pub initial_grid: Option<Vec<Vec<u8>>>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 39,
            cols: 39,
            birth_rate: None,
            boundary: Boundary::default(),
            counting: CountingMethod::default(),
            seed: None,
            initial_grid: None,
        }
    }
}

impl LifeConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// A configuration shaped after `grid` that starts from it.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols()).with_initial_grid(grid.to_rows())
    }

    pub fn with_birth_rate(mut self, birth_rate: f64) -> Self {
        self.birth_rate = Some(birth_rate);
        self
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_counting(mut self, counting: CountingMethod) -> Self {
        self.counting = counting;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial_grid(mut self, rows: Vec<Vec<u8>>) -> Self {
        self.initial_grid = Some(rows);
        self
    }

    /// Checks everything that can be checked before a grid exists.
    pub fn validate(&self) -> Result<(), LifeError> {
        Grid::check_dimensions(self.rows, self.cols)?;

        if let Some(birth_rate) = self.birth_rate {
            if !(0.0..=1.0).contains(&birth_rate) {
                return Err(LifeError::InvalidBirthRate(birth_rate));
            }
        }

        Ok(())
    }

    /// The configured initial grid, if any, checked against the configured shape.
    pub fn initial_grid(&self) -> Result<Option<Grid>, LifeError> {
        let Some(rows) = &self.initial_grid else {
            return Ok(None);
        };

        let grid = Grid::from_rows(rows)?;
        self.check_shape(&grid)?;

        Ok(Some(grid))
    }

    pub(crate) fn check_shape(&self, grid: &Grid) -> Result<(), LifeError> {
        let (got_rows, got_cols) = grid.shape();

        if (got_rows, got_cols) != (self.rows, self.cols) {
            return Err(LifeError::InitialGridMismatch {
                rows: self.rows,
                cols: self.cols,
                got_rows,
                got_cols,
            });
        }

        Ok(())
    }
}
