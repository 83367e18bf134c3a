// config.rs - Run settings shared by the drivers

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{GridError, Result};
use crate::factory::{create_grid, create_grid_seeded, random_grid_with_density};
use crate::grid::Grid;
use crate::patterns;

pub const DEFAULT_SIZE: usize = 75;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);
/// Largest board the drivers will build.
pub const MAX_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    /// Rows and columns of the (square) board.
    pub size: usize,
    /// Time between generations.
    pub interval: Duration,
    /// Seed for the random start; `None` draws from the thread generator.
    pub seed: Option<u64>,
    /// Stop after this many generations; `None` runs until interrupted.
    pub generations: Option<u64>,
    /// Chance of a random cell starting alive; `None` is a fair coin.
    pub density: Option<f64>,
    /// Start from a named pattern instead of random cells.
    pub pattern: Option<String>,
    /// Step with one coroutine per row instead of sequentially.
    pub coroutines: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            interval: DEFAULT_INTERVAL,
            seed: None,
            generations: None,
            density: None,
            pattern: None,
            coroutines: false,
        }
    }
}

impl LifeConfig {
    /// Rejects boards larger than [`MAX_SIZE`] on a side.
    pub fn validate(&self) -> Result<()> {
        if self.size > MAX_SIZE {
            return Err(GridError::TooLarge { width: self.size, height: self.size });
        }
        Ok(())
    }

    /// Generation 0 for this configuration.
    pub fn initial_grid(&self) -> Result<Grid> {
        self.validate()?;
        if let Some(name) = &self.pattern {
            return Ok(patterns::find(name)?.centered(self.size));
        }
        let size = self.size;
        Ok(match (self.density, self.seed) {
            (Some(density), Some(seed)) => {
                random_grid_with_density(size, size, density, &mut StdRng::seed_from_u64(seed))
            }
            (Some(density), None) => random_grid_with_density(size, size, density, &mut rand::rng()),
            (None, Some(seed)) => create_grid_seeded(size, seed),
            (None, None) => create_grid(size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_console_driver() {
        let config = LifeConfig::default();
        assert_eq!(config.size, 75);
        assert_eq!(config.interval, Duration::from_secs(1));
        assert!(!config.coroutines);
    }

    #[test]
    fn seeded_start_is_reproducible() {
        let config = LifeConfig { size: 10, seed: Some(5), ..Default::default() };
        assert_eq!(config.initial_grid().unwrap(), config.initial_grid().unwrap());
    }

    #[test]
    fn pattern_wins_over_seed() {
        let config = LifeConfig {
            size: 8,
            seed: Some(5),
            pattern: Some("glider".into()),
            ..Default::default()
        };
        assert_eq!(config.initial_grid().unwrap().live_count(), 5);
    }

    #[test]
    fn density_controls_the_random_start() {
        let full = LifeConfig { size: 6, density: Some(1.0), ..Default::default() };
        assert_eq!(full.initial_grid().unwrap().live_count(), 36);

        let seeded = LifeConfig { size: 16, seed: Some(4), density: Some(0.2), ..Default::default() };
        assert_eq!(seeded.initial_grid().unwrap(), seeded.initial_grid().unwrap());
    }

    #[test]
    fn oversized_board_is_rejected_before_allocating() {
        let config = LifeConfig { size: usize::MAX, ..Default::default() };
        assert_eq!(
            config.initial_grid(),
            Err(GridError::TooLarge { width: usize::MAX, height: usize::MAX })
        );
        assert!(LifeConfig { size: MAX_SIZE, ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let config = LifeConfig { pattern: Some("spaceship".into()), ..Default::default() };
        assert_eq!(config.initial_grid(), Err(GridError::UnknownPattern("spaceship".into())));
    }
}
