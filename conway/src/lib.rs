//! Conway's Game of Life on a fixed, non-wrapping grid.
//!
//! ```
//! use conway::{create_grid_seeded, step};
//!
//! let grid = create_grid_seeded(16, 1);
//! let next = step(&grid);
//! assert_eq!(next.height(), 16);
//! ```

pub mod config;
pub mod coro;
pub mod engine;
pub mod error;
pub mod factory;
pub mod grid;
pub mod history;
pub mod patterns;

pub use config::LifeConfig;
pub use coro::step_coroutines;
pub use engine::{count_live_neighbors, next_state, run, step};
pub use error::{GridError, Result};
pub use factory::{
    RandomCells, ValueSource, build_grid, create_grid, create_grid_seeded, random_grid_with_density,
};
pub use grid::{Cell, Coord, Grid};
pub use history::CycleDetector;
pub use patterns::{PATTERNS, Pattern};
