use itertools::Itertools;
use rand::Rng;

use crate::{error::LifeError, pos::Position};

/// A fixed-size grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        Self::check_dimensions(rows, cols)?;
        let cells = vec![CellState::default(); rows * cols];
        Ok(Self { rows, cols, cells })
    }

    /// Every cell is independently alive with probability one half.
    pub fn random<R>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, LifeError>
    where
        R: Rng,
    {
        Self::check_dimensions(rows, cols)?;

        let cells = (0..rows * cols)
            .map(|_| CellState::from(rng.random_bool(0.5)))
            .collect_vec();

        Ok(Self { rows, cols, cells })
    }

    pub fn with_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Self, LifeError> {
        Self::check_dimensions(rows, cols)?;

        if cells.len() != rows * cols {
            return Err(LifeError::CellCountMismatch {
                expected: rows * cols,
                got: cells.len(),
            });
        }

        Ok(Self { rows, cols, cells })
    }

    /// Builds a grid from rows of `0`/`1` values.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        let mut cols = None;
        let mut row_count = 0;
        let mut cells = Vec::new();

        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            let expected = *cols.get_or_insert(values.len());

            if values.len() != expected {
                return Err(LifeError::RaggedRow {
                    row,
                    len: values.len(),
                    expected,
                });
            }

            for (col, value) in values.iter().enumerate() {
                let state = CellState::try_from(*value).map_err(|value| {
                    LifeError::InvalidCellValue {
                        position: Position { row, col },
                        value,
                    }
                })?;
                cells.push(state);
            }

            row_count += 1;
        }

        Self::with_cells(row_count, cols.unwrap_or(0), cells)
    }

    pub fn from_alive_cells<I, P>(rows: usize, cols: usize, alive: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let mut grid = Self::new(rows, cols)?;

        for pos in alive {
            let position = pos.into();
            let cell = grid.cell_mut(position).ok_or(LifeError::OutOfBounds {
                position,
                rows,
                cols,
            })?;
            *cell = CellState::Alive;
        }

        Ok(grid)
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

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    pub fn cell<P>(&self, pos: P) -> Option<&CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &CellState)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// The grid as rows of `0`/`1` values.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks_exact(self.cols)
            .map(|row| row.iter().copied().map(u8::from).collect_vec())
            .collect_vec()
    }

    /// Rejects empty grids and grids whose cell count doesn't fit in `usize`.
    pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<(), LifeError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }

        Ok(())
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.cols;
        let col = index % self.cols;
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }
}

impl TryFrom<u8> for CellState {
    /// The rejected value.
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(other),
        }
    }
}
