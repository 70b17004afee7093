use libgame::{
    board::Grid,
    neighbors::{Boundary, CountingMethod, new_counter},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_rows(rng: &mut StdRng, rows: usize, cols: usize, density: f64) -> Vec<Vec<u8>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_bool(density) as u8).collect())
        .collect()
}

fn count_naive(cells: &[Vec<u8>], boundary: Boundary) -> Vec<Vec<u8>> {
    let rows = cells.len() as isize;
    let cols = cells[0].len() as isize;

    let mut out = vec![vec![0u8; cols as usize]; rows as usize];
    for row in 0..rows {
        for col in 0..cols {
            let mut neighbors = 0;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }

                    let (mut r, mut c) = (row + dr, col + dc);
                    match boundary {
                        Boundary::ZeroPadded => {
                            if r < 0 || r >= rows || c < 0 || c >= cols {
                                continue;
                            }
                        }
                        Boundary::Toroidal => {
                            r = (r + rows) % rows;
                            c = (c + cols) % cols;
                        }
                    }

                    neighbors += cells[r as usize][c as usize];
                }
            }
            out[row as usize][col as usize] = neighbors;
        }
    }

    out
}

fn shapes() -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let mut shapes = vec![(1, 1), (1, 2), (2, 1), (1, 9), (9, 1), (2, 2), (3, 3), (6, 6)];
    shapes.extend((0..24).map(|_| (rng.random_range(1..40), rng.random_range(1..40))));
    shapes
}

#[test]
fn counts_match_naive_sum() {
    let mut rng = StdRng::seed_from_u64(42);

    for (rows, cols) in shapes() {
        for density in [0.1, 0.5, 0.9] {
            let cells = random_rows(&mut rng, rows, cols, density);
            let grid = Grid::from_rows(&cells).unwrap();

            for boundary in [Boundary::ZeroPadded, Boundary::Toroidal] {
                let expected = count_naive(&cells, boundary);

                for method in [CountingMethod::Direct, CountingMethod::Fft] {
                    let counts = new_counter(method, boundary, rows, cols)
                        .count(&grid)
                        .unwrap();

                    assert_eq!(
                        counts.to_rows(),
                        expected,
                        "{method:?} {boundary:?} mismatch on {rows}x{cols} grid"
                    );
                }
            }
        }
    }
}

#[test]
fn counts_stay_within_moore_range() {
    let mut rng = StdRng::seed_from_u64(3);

    for (rows, cols) in shapes() {
        let cells = random_rows(&mut rng, rows, cols, 0.7);
        let grid = Grid::from_rows(&cells).unwrap();

        for boundary in [Boundary::ZeroPadded, Boundary::Toroidal] {
            let counts = new_counter(CountingMethod::Fft, boundary, rows, cols)
                .count(&grid)
                .unwrap();

            assert_eq!(counts.shape(), (rows, cols));
            assert!(counts.as_slice().iter().all(|count| *count <= 8));
        }
    }
}

#[test]
fn fft_counts_large_grid_exactly() {
    let mut rng = StdRng::seed_from_u64(99);
    let cells = random_rows(&mut rng, 150, 150, 0.5);
    let grid = Grid::from_rows(&cells).unwrap();

    let counts = new_counter(CountingMethod::Fft, Boundary::ZeroPadded, 150, 150)
        .count(&grid)
        .unwrap();

    assert_eq!(counts.to_rows(), count_naive(&cells, Boundary::ZeroPadded));
}
