// history.rs - Detecting still lifes and short oscillators

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::debug;

use crate::grid::Grid;

pub const DEFAULT_CAPACITY: usize = 10;

/// Remembers fingerprints of the last few generations in a circular buffer.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    history: Vec<u64>,
    count: usize,
    capacity: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl CycleDetector {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: Vec::with_capacity(capacity),
            count: 0,
            capacity,
        }
    }

    pub fn fingerprint(grid: &Grid) -> u64 {
        let mut hasher = DefaultHasher::new();
        grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Records `grid` and returns `true` if it matches one of the remembered generations.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = Self::fingerprint(grid);
        if self.history.contains(&hash) {
            debug!("cycle detected after {} generations", self.count);
            return true;
        }

        if self.history.len() < self.capacity {
            self.history.push(hash);
        } else {
            self.history[self.count % self.capacity] = hash; // Circular buffer
        }
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.count = 0;
    }
}
