// factory.rs - Building starting generations

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid};

/// Supplies the initial contents of a grid, one row at a time.
pub trait ValueSource {
    /// Returns the `size` cells of the next row.
    fn row(&mut self, size: usize) -> Vec<Cell>;
}

/// A constant fills every cell with the same value.
impl ValueSource for Cell {
    fn row(&mut self, size: usize) -> Vec<Cell> {
        vec![*self; size]
    }
}

/// Any per-row generator closure. It receives the row count and must return exactly that many cells.
impl<F> ValueSource for F
where
    F: FnMut(usize) -> Vec<Cell>,
{
    fn row(&mut self, size: usize) -> Vec<Cell> {
        self(size)
    }
}

/// Fair coin per cell, drawn from an injected random source.
pub struct RandomCells<R> {
    rng: R,
}

impl<R: Rng> RandomCells<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueSource for RandomCells<R> {
    fn row(&mut self, size: usize) -> Vec<Cell> {
        (0..size).map(|_| Cell::from(self.rng.random::<bool>())).collect()
    }
}

/// Builds a `size` x `size` grid, asking `source` for each row from top to bottom.
///
/// # Panics
///
/// If `source` returns a row whose length is not `size`.
pub fn build_grid<S>(source: &mut S, size: usize) -> Grid
where
    S: ValueSource + ?Sized,
{
    let rows: Vec<Vec<Cell>> = (0..size)
        .map(|y| {
            let row = source.row(size);
            assert_eq!(row.len(), size, "value source produced row {y} with the wrong length");
            row
        })
        .collect();
    Grid::from_cell_rows(size, rows)
}

/// A randomized `size` x `size` starting grid from the thread-local generator.
pub fn create_grid(size: usize) -> Grid {
    let grid = build_grid(&mut RandomCells::new(rand::rng()), size);
    debug!("created random {size}x{size} grid with {} live cells", grid.live_count());
    grid
}

/// Same as [`create_grid`] but reproducible for a given seed.
pub fn create_grid_seeded(size: usize, seed: u64) -> Grid {
    let grid = build_grid(&mut RandomCells::new(StdRng::seed_from_u64(seed)), size);
    debug!("created {size}x{size} grid from seed {seed} with {} live cells", grid.live_count());
    grid
}

/// A `width` x `height` grid where each cell is alive with probability `density`.
///
/// Densities outside `0.0..=1.0` are clamped; NaN falls back to a fair coin.
pub fn random_grid_with_density<R: Rng>(width: usize, height: usize, density: f64, rng: &mut R) -> Grid {
    let density = if density.is_nan() { 0.5 } else { density.clamp(0.0, 1.0) };
    let rows = (0..height)
        .map(|_| (0..width).map(|_| Cell::from(rng.random_bool(density))).collect())
        .collect();
    Grid::from_cell_rows(width, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_source_fills_every_cell() {
        let grid = build_grid(&mut Cell::Alive, 4);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.live_count(), 16);

        let grid = build_grid(&mut Cell::Dead, 3);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn generator_is_called_once_per_row_with_the_size() {
        let mut calls = Vec::new();
        let grid = build_grid(
            &mut |n: usize| {
                calls.push(n);
                vec![Cell::Dead, Cell::Alive, Cell::Dead]
            },
            3,
        );
        assert_eq!(calls, vec![3, 3, 3]);
        assert_eq!(grid.to_rows(), vec![vec![0, 1, 0]; 3]);
    }

    #[test]
    fn zero_size_is_empty() {
        assert!(build_grid(&mut Cell::Alive, 0).is_empty());
        assert!(create_grid(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "wrong length")]
    fn short_rows_panic() {
        build_grid(&mut |_: usize| vec![Cell::Alive], 2);
    }

    #[test]
    fn random_grid_is_square_and_binary() {
        let grid = create_grid(7);
        assert_eq!(grid.height(), 7);
        assert!(grid.rows().all(|row| row.len() == 7));
        assert!(grid.to_rows().iter().flatten().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn seeded_grids_repeat() {
        assert_eq!(create_grid_seeded(20, 42), create_grid_seeded(20, 42));
    }

    #[test]
    fn random_cells_uses_both_values() {
        let grid = create_grid_seeded(32, 7);
        let live = grid.live_count();
        assert!(live > 0 && live < 32 * 32);
    }

    #[test]
    fn density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let full = random_grid_with_density(5, 3, 1.0, &mut rng);
        assert_eq!((full.width(), full.height()), (5, 3));
        assert_eq!(full.live_count(), 15);
        assert_eq!(random_grid_with_density(5, 3, 0.0, &mut rng).live_count(), 0);
        assert_eq!(random_grid_with_density(4, 4, 7.5, &mut rng).live_count(), 16);
        assert_eq!(random_grid_with_density(4, 4, -1.0, &mut rng).live_count(), 0);
    }

    #[test]
    fn nan_density_is_a_fair_coin() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = random_grid_with_density(32, 32, f64::NAN, &mut rng);
        let live = grid.live_count();
        assert!(live > 0 && live < 32 * 32);
    }
}
