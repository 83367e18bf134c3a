// engine.rs - Neighbor counting and the B3/S23 transition

use log::trace;

use crate::grid::{Cell, Coord, Grid};

/// Offsets of the eight surrounding cells as (dx, dy).
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 1), (0, 1), (1, 1),
    (-1, 0),         (1, 0),
    (-1, -1), (0, -1), (1, -1),
];

/// Counts the live cells around `coord`, not including `coord` itself.
///
/// Anything past an edge counts as dead; the grid never wraps.
pub fn count_live_neighbors(grid: &Grid, coord: Coord) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| coord.offset(dx, dy))
        .filter_map(|neighbor| grid.get(neighbor))
        .map(u8::from)
        .sum()
}

/// Conway's rules for a single cell given its live neighbor count.
pub fn next_state(cell: Cell, live: u8) -> Cell {
    match (cell, live) {
        (Cell::Alive, 0..=1) => Cell::Dead,  // Under-population
        (Cell::Alive, 2..=3) => Cell::Alive, // Survival
        (Cell::Alive, _)     => Cell::Dead,  // Overcrowding
        (Cell::Dead, 3)      => Cell::Alive, // Birth
        (Cell::Dead, _)      => Cell::Dead,
    }
}

/// Next-generation values for row `y`, read from the unmodified `grid`.
pub fn step_row(grid: &Grid, y: usize) -> Vec<Cell> {
    grid.row(y)
        .iter()
        .enumerate()
        .map(|(x, &cell)| next_state(cell, count_live_neighbors(grid, Coord::new(x, y))))
        .collect()
}

/// Computes the following generation into a fresh grid of the same shape.
pub fn step(grid: &Grid) -> Grid {
    let rows = (0..grid.height()).map(|y| step_row(grid, y)).collect();
    let next = Grid::from_cell_rows(grid.width(), rows);
    trace!("stepped {}x{} grid, {} live", next.width(), next.height(), next.live_count());
    next
}

/// Applies [`step`] `generations` times.
pub fn run(grid: &Grid, generations: usize) -> Grid {
    (0..generations).fold(grid.clone(), |current, _| step(&current))
}
