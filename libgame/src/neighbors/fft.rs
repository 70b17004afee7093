//! Neighbor counting through frequency-domain convolution.
//!
//! The grid plus a one-cell halo (dead or wrapped, depending on the boundary) is
//! copied into a buffer two cells larger than the grid along each axis, transformed
//! with a 2D FFT, multiplied by the precomputed spectrum of the Moore kernel and
//! transformed back. The circular convolution never wraps into the cells that are
//! read back, so a buffer of exactly `(rows + 2) x (cols + 2)` is enough.

use std::sync::Arc;

use rustfft::{Fft, FftPlanner, num_complex::Complex};

use crate::{board::Grid, error::LifeError};

use super::{Boundary, NEIGHBOR_RELATIVE_POSITIONS, NeighborCounter, NeighborCounts};

/// Forward and inverse transforms along one axis.
#[derive(Clone)]
struct AxisPlan {
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl AxisPlan {
    fn new(planner: &mut FftPlanner<f64>, len: usize) -> Self {
        Self {
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
        }
    }

    fn get(&self, inverse: bool) -> &Arc<dyn Fft<f64>> {
        if inverse { &self.inverse } else { &self.forward }
    }
}

/// Counts neighbors of grids with one fixed shape.
#[derive(Clone)]
pub struct FftCounter {
    rows: usize,
    cols: usize,
    boundary: Boundary,
    padded_rows: usize,
    padded_cols: usize,
    row_plan: AxisPlan,
    col_plan: AxisPlan,
    kernel_spectrum: Vec<Complex<f64>>,
}

impl FftCounter {
    pub fn new(rows: usize, cols: usize, boundary: Boundary) -> Self {
        let padded_rows = rows + 2;
        let padded_cols = cols + 2;

        let mut planner = FftPlanner::<f64>::new();
        // Row transforms run along the columns of a row and vice versa.
        let row_plan = AxisPlan::new(&mut planner, padded_cols);
        let col_plan = AxisPlan::new(&mut planner, padded_rows);

        let mut counter = Self {
            rows,
            cols,
            boundary,
            padded_rows,
            padded_cols,
            row_plan,
            col_plan,
            kernel_spectrum: Vec::new(),
        };

        let mut kernel = vec![Complex::new(0.0, 0.0); padded_rows * padded_cols];
        for [row_offset, col_offset] in NEIGHBOR_RELATIVE_POSITIONS {
            let row = (1 + *row_offset) as usize;
            let col = (1 + *col_offset) as usize;
            kernel[row * padded_cols + col] = Complex::new(1.0, 0.0);
        }
        counter.fft2d(&mut kernel, false);
        counter.kernel_spectrum = kernel;

        counter
    }

    /// 2D FFT of a row-major `padded_rows x padded_cols` buffer. The inverse transform
    /// is scaled by `1 / (padded_rows * padded_cols)`.
    fn fft2d(&self, data: &mut [Complex<f64>], inverse: bool) {
        let (rows, cols) = (self.padded_rows, self.padded_cols);

        // Runs over every row at once, the buffer is a whole number of rows.
        self.row_plan.get(inverse).process(data);

        let mut transposed = vec![Complex::new(0.0, 0.0); data.len()];
        for row in 0..rows {
            for col in 0..cols {
                transposed[col * rows + row] = data[row * cols + col];
            }
        }

        self.col_plan.get(inverse).process(&mut transposed);

        let scale = if inverse { 1.0 / (rows * cols) as f64 } else { 1.0 };
        for row in 0..rows {
            for col in 0..cols {
                data[row * cols + col] = transposed[col * rows + row] * scale;
            }
        }
    }
}

impl NeighborCounter for FftCounter {
    fn count(&self, grid: &Grid) -> Result<NeighborCounts, LifeError> {
        let (got_rows, got_cols) = grid.shape();
        if (got_rows, got_cols) != (self.rows, self.cols) {
            return Err(LifeError::DimensionMismatch {
                rows: self.rows,
                cols: self.cols,
                got_rows,
                got_cols,
            });
        }

        let mut buffer = vec![Complex::new(0.0, 0.0); self.kernel_spectrum.len()];

        // Halo coordinate `h` holds grid coordinate `h - 1`.
        for halo_row in 0..self.padded_rows {
            let Some(row) = self.boundary.resolve(halo_row, -1, self.rows) else {
                continue;
            };

            for halo_col in 0..self.padded_cols {
                let Some(col) = self.boundary.resolve(halo_col, -1, self.cols) else {
                    continue;
                };

                if grid.cells()[row * self.cols + col].is_alive() {
                    buffer[halo_row * self.padded_cols + halo_col] = Complex::new(1.0, 0.0);
                }
            }
        }

        self.fft2d(&mut buffer, false);
        for (value, kernel) in buffer.iter_mut().zip(&self.kernel_spectrum) {
            *value *= *kernel;
        }
        self.fft2d(&mut buffer, true);

        let mut counts = Vec::with_capacity(self.rows * self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let value = buffer[(row + 2) * self.padded_cols + col + 2].re;
                debug_assert!(
                    (value - value.round()).abs() < 0.25,
                    "convolution drifted to {value} at ({row}, {col})"
                );
                counts.push(value.round() as u8);
            }
        }

        Ok(NeighborCounts::with_counts(self.rows, self.cols, counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::count_neighbors;

    #[test]
    fn transform_round_trips() {
        // A 1x3 grid pads to a 3x5 buffer.
        let counter = FftCounter::new(1, 3, Boundary::ZeroPadded);
        let original = (0..15)
            .map(|i| Complex::new(i as f64, 0.0))
            .collect::<Vec<_>>();

        let mut data = original.clone();
        counter.fft2d(&mut data, false);
        counter.fft2d(&mut data, true);

        for (a, b) in data.iter().zip(&original) {
            assert!((a.re - b.re).abs() < 1e-9);
            assert!(a.im.abs() < 1e-9);
        }
    }

    #[test]
    fn matches_direct_counts() {
        let grid = Grid::from_rows([
            [0u8, 1, 1, 0, 1],
            [1, 0, 1, 1, 0],
            [0, 0, 0, 1, 1],
            [1, 1, 0, 0, 1],
        ])
        .unwrap();

        for boundary in [Boundary::ZeroPadded, Boundary::Toroidal] {
            let counter = FftCounter::new(4, 5, boundary);
            assert_eq!(
                counter.count(&grid).unwrap(),
                count_neighbors(&grid, boundary)
            );
        }
    }

    #[test]
    fn rejects_grids_of_another_shape() {
        let counter = FftCounter::new(4, 4, Boundary::ZeroPadded);
        let grid = Grid::new(4, 5).unwrap();

        assert_eq!(
            counter.count(&grid),
            Err(LifeError::DimensionMismatch {
                rows: 4,
                cols: 4,
                got_rows: 4,
                got_cols: 5
            })
        );
    }
}
