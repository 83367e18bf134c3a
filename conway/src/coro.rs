// coro.rs - One async coroutine per row
//
// Every row task reads the same shared generation and returns its finished
// row, so the result is identical to `engine::step`.

use std::sync::Arc;

use crate::engine::{count_live_neighbors, next_state};
use crate::error::{GridError, Result};
use crate::grid::{Cell, Coord, Grid};

/// Row coroutine that computes row `y` of the next generation.
pub async fn process_row(y: usize, current: Arc<Grid>) -> (usize, Vec<Cell>) {
    let mut row = Vec::with_capacity(current.width());
    for x in 0..current.width() {
        let coord = Coord::new(x, y);
        let live = count_live_neighbors(&current, coord);
        row.push(next_state(current.get(coord).unwrap_or_default(), live));

        tokio::task::yield_now().await; // Cooperative yielding
    }
    (y, row) // Return (row_id, completed_row)
}

/// Steps `current` by spawning every row coroutine on the running tokio runtime.
pub async fn step_coroutines(current: Arc<Grid>) -> Result<Grid> {
    let handles: Vec<_> = (0..current.height())
        .map(|y| tokio::spawn(process_row(y, Arc::clone(&current))))
        .collect();

    let mut rows = vec![Vec::new(); current.height()];
    for (row, handle) in handles.into_iter().enumerate() {
        let (y, cells) = handle
            .await
            .map_err(|err| GridError::RowTask { row, reason: err.to_string() })?;
        rows[y] = cells;
    }

    Ok(Grid::from_cell_rows(current.width(), rows))
}
