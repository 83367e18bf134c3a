// main.rs - Async Conway's Game of Life with Row Coroutines
// The engine lives in the `conway` crate; this is the egui front end.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use egui::Color32;
use log::{error, info};

use conway::{Coord, CycleDetector, Grid, LifeConfig, create_grid, create_grid_seeded, patterns};

mod ui;

#[derive(Parser)]
#[command(name = "conway_coro", about = "Conway's Game of Life, one coroutine per row")]
struct Args {
    /// Rows and columns of the board
    #[arg(long, default_value_t = 50)]
    size: usize,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    /// Seed for the Random button; omit for a fresh board every time
    #[arg(long)]
    seed: Option<u64>,

    /// Pattern to load at startup
    #[arg(long)]
    pattern: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = LifeConfig {
        size: args.size,
        interval: Duration::from_millis(args.interval_ms),
        seed: args.seed,
        pattern: args.pattern,
        coroutines: true,
        ..Default::default()
    };
    let app = GameOfLife::new(config).context("failed to set up the simulation")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Async Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("eframe: {err}"))
}

/// Async Conway's Game of Life - one `conway::Grid` per generation
pub struct GameOfLife {
    pub grid: Grid,
    pub size: usize,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    seed: Option<u64>,
    reseeds: u64,
    runtime: tokio::runtime::Runtime,
    history: CycleDetector,
}

impl GameOfLife {
    pub fn new(config: LifeConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
        let grid = match config.pattern {
            Some(_) => config.initial_grid()?,
            None => Grid::new(config.size, config.size),
        };

        let mut app = Self {
            grid: Grid::empty(),
            size: config.size,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.interval,
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            seed: config.seed,
            reseeds: 0,
            runtime,
            history: CycleDetector::default(),
        };
        app.restart(grid);
        Ok(app)
    }

    /// Starts over from `grid` as generation 0.
    fn restart(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
        self.history.reset();
        self.history.observe(&self.grid);
    }
}

/// Actions the UI module drives
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, coord: Coord);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        let current = Arc::new(self.grid.clone());

        match self.runtime.block_on(conway::step_coroutines(current)) {
            Ok(next) => {
                self.grid = next;
                self.generation += 1;
            }
            Err(err) => {
                error!("generation {} failed: {err}", self.generation + 1);
                self.is_running = false;
                return;
            }
        }

        if self.check_for_cycle() {
            info!("pausing at generation {}: pattern repeats", self.generation);
            self.is_running = false;
        }
    }

    fn check_for_cycle(&mut self) -> bool {
        self.history.observe(&self.grid)
    }

    fn clear_grid(&mut self) {
        self.restart(Grid::new(self.size, self.size));
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.restart(pattern.centered(self.size));
        }
    }

    fn apply_random_pattern(&mut self) {
        let grid = match self.seed {
            Some(seed) => create_grid_seeded(self.size, seed.wrapping_add(self.reseeds)),
            None => create_grid(self.size),
        };
        self.reseeds += 1;
        self.restart(grid);
    }

    fn toggle_cell(&mut self, coord: Coord) {
        self.grid.toggle(coord);
    }
}
