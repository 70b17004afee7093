use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{board::Grid, error::LifeError, pos::Position};

pub use fft::FftCounter;

pub mod fft;

/// Offsets of the Moore neighborhood as `[row, col]` deltas.
pub const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// How neighbors beyond the grid edge are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Cells outside the grid are dead.
    #[default]
    ZeroPadded,

    /// Opposite edges are joined.
    Toroidal,
}

impl Boundary {
    /// Resolves `center + offset` along an axis of length `len`.
    pub fn resolve(self, center: usize, offset: isize, len: usize) -> Option<usize> {
        let pos = center as isize + offset;

        match self {
            Boundary::ZeroPadded => (0..len as isize).contains(&pos).then_some(pos as usize),
            Boundary::Toroidal => Some(pos.rem_euclid(len as isize) as usize),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingMethod {
    #[default]
    Direct,
    Fft,
}

/// Live-neighbor counts for every cell of a grid, each within `0..=8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCounts {
    rows: usize,
    cols: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub(crate) fn with_counts(rows: usize, cols: usize, counts: Vec<u8>) -> Self {
        debug_assert_eq!(counts.len(), rows * cols);
        Self { rows, cols, counts }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.counts
    }

    pub fn get<P>(&self, pos: P) -> Option<u8>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows || col >= self.cols {
            return None;
        }

        self.counts.get(col + row * self.cols).copied()
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.counts
            .chunks_exact(self.cols)
            .map(<[u8]>::to_vec)
            .collect_vec()
    }
}

pub trait NeighborCounter: Send + Sync {
    /// Counts the live Moore neighbors of every cell in `grid`.
    fn count(&self, grid: &Grid) -> Result<NeighborCounts, LifeError>;
}

/// Sums the eight neighbors of each cell directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectCounter {
    pub boundary: Boundary,
}

impl DirectCounter {
    pub fn new(boundary: Boundary) -> Self {
        Self { boundary }
    }
}

impl NeighborCounter for DirectCounter {
    fn count(&self, grid: &Grid) -> Result<NeighborCounts, LifeError> {
        Ok(count_neighbors(grid, self.boundary))
    }
}

pub fn count_neighbors(grid: &Grid, boundary: Boundary) -> NeighborCounts {
    let (rows, cols) = grid.shape();

    let counts = grid
        .enumerate_cells()
        .map(|(Position { row, col }, _)| {
            NEIGHBOR_RELATIVE_POSITIONS
                .iter()
                .filter_map(|[row_offset, col_offset]| {
                    let pos = Position {
                        row: boundary.resolve(row, *row_offset, rows)?,
                        col: boundary.resolve(col, *col_offset, cols)?,
                    };

                    grid.cell(pos)
                })
                .filter(|neighbor| neighbor.is_alive())
                .count() as u8
        })
        .collect_vec();

    NeighborCounts::with_counts(rows, cols, counts)
}

/// Builds the counter selected by `method` for grids of the given shape.
pub fn new_counter(
    method: CountingMethod,
    boundary: Boundary,
    rows: usize,
    cols: usize,
) -> Box<dyn NeighborCounter> {
    match method {
        CountingMethod::Direct => Box::new(DirectCounter::new(boundary)),
        CountingMethod::Fft => Box::new(FftCounter::new(rows, cols, boundary)),
    }
}
